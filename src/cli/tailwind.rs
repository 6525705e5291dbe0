//! Tailwind CSS provisioning
//!
//! Installs the PostCSS plugin, registers it in `.postcssrc.json` and imports
//! Tailwind at the top of the global style sheet.

use std::path::Path;

use serde_json::json;
use tracing::debug;

use crate::cli::create::{Executor, Project};
use crate::error::Result;
use crate::runner::CommandRunner;
use crate::utils::fs_utils;

pub const INSTALL_COMMAND: &str = "bun add tailwindcss @tailwindcss/postcss postcss --force";
pub const POSTCSS_CONFIG_FILE: &str = ".postcssrc.json";
pub const STYLES_FILE: &str = "src/styles.css";
pub const TAILWIND_IMPORT: &str = "@import \"tailwindcss\";";

pub async fn setup<R: CommandRunner>(executor: &Executor<'_, R>, project: &Project) -> Result<()> {
    executor.run(INSTALL_COMMAND, &project.root).await?;
    write_postcss_config(&project.root)?;
    prepend_import(&project.root)?;
    Ok(())
}

pub fn postcss_config() -> Result<String> {
    let config = json!({
        "plugins": {
            "@tailwindcss/postcss": {}
        }
    });
    Ok(serde_json::to_string_pretty(&config)?)
}

/// Overwrites any existing PostCSS config.
pub fn write_postcss_config(project_root: &Path) -> Result<()> {
    let path = project_root.join(POSTCSS_CONFIG_FILE);
    fs_utils::write_file(&path, &postcss_config()?)?;
    debug!("Wrote {}", path.display());
    Ok(())
}

/// The style sheet must already exist; `ng new` creates it.
pub fn prepend_import(project_root: &Path) -> Result<()> {
    let path = project_root.join(STYLES_FILE);
    let styles = fs_utils::read_to_string(&path)?;
    fs_utils::write_file(&path, &format!("{TAILWIND_IMPORT}\n{styles}"))?;
    debug!("Imported tailwindcss in {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_postcss_config() {
        assert_eq!(
            postcss_config().unwrap(),
            "{\n  \"plugins\": {\n    \"@tailwindcss/postcss\": {}\n  }\n}"
        );
    }

    #[test]
    fn test_write_postcss_config_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(POSTCSS_CONFIG_FILE);
        fs::write(&path, "{\"plugins\": {\"autoprefixer\": {}}}").unwrap();

        write_postcss_config(dir.path()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), postcss_config().unwrap());
    }

    #[test]
    fn test_prepend_import() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join(STYLES_FILE), "").unwrap();

        prepend_import(dir.path()).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join(STYLES_FILE)).unwrap(),
            "@import \"tailwindcss\";\n"
        );
    }

    #[test]
    fn test_prepend_import_without_styles() {
        let dir = tempfile::tempdir().unwrap();
        assert!(prepend_import(dir.path()).is_err());
    }
}
