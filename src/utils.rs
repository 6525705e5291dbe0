use crate::error::{NgsparkError, Result};
use crate::runner::CommandStatus;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// Process execution utilities
pub mod process_utils {
    use super::*;
    use std::process::Stdio;

    /// Execute a command interactively (inherit stdin/stdout/stderr)
    pub async fn execute_interactive(
        program: &str,
        args: &[&str],
        working_dir: Option<&Path>,
    ) -> Result<CommandStatus> {
        debug!("Executing interactively: {} {}", program, args.join(" "));

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = working_dir {
            cmd.current_dir(dir);
        }

        let status = cmd
            .status()
            .await
            .map_err(|source| NgsparkError::CommandSpawn {
                command: format!("{} {}", program, args.join(" ")).trim_end().to_string(),
                source,
            })?;

        debug!("{} exited with {:?}", program, status.code());
        Ok(status.into())
    }
}

/// String utilities
pub mod string_utils {
    use regex::Regex;

    /// Validate project name, returning the trimmed name.
    ///
    /// The name becomes both an unquoted `ng new` argument and a directory
    /// under the current one.
    pub fn validate_project_name(name: &str) -> std::result::Result<&str, String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Project name is required".to_string());
        }

        let re = Regex::new(r"^[a-zA-Z][a-zA-Z0-9_-]*$").unwrap();
        if !re.is_match(name) {
            return Err(
                "Project name must start with a letter and contain only letters, numbers, underscores, and hyphens"
                    .to_string(),
            );
        }
        Ok(name)
    }
}

/// File system utilities
pub mod fs_utils {
    use super::*;
    use std::fs;

    pub fn read_to_string(path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| NgsparkError::io(path, e))
    }

    /// Write `content`, creating missing parent directories.
    pub fn write_file(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| NgsparkError::io(parent, e))?;
        }
        fs::write(path, content).map_err(|e| NgsparkError::io(path, e))
    }
}
