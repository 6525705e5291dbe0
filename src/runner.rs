//! External command execution
//!
//! Every tool ngspark drives (`ng`, `bun`, `bunx`) is started through a
//! [`CommandRunner`]. The runner reports the exit status back; deciding what a
//! failure means is left to the caller.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{NgsparkError, Result};
use crate::utils::process_utils;

/// A single external command line bound to a working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdBuilder {
    pub cmd: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl CmdBuilder {
    /// Split a space-delimited command line into program and arguments.
    ///
    /// No quoting is supported; an argument containing a space cannot be expressed.
    pub fn parse(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace().map(str::to_owned);
        let cmd = parts
            .next()
            .ok_or_else(|| NgsparkError::InvalidCommand("program name cannot be empty".into()))?;
        Ok(Self {
            cmd,
            args: parts.collect(),
            working_dir: None,
        })
    }

    /// Set the working directory
    pub fn working_dir(mut self, working_dir: &Path) -> Self {
        self.working_dir = Some(working_dir.to_path_buf());
        self
    }

    /// The command line as typed, without the working directory.
    pub fn line(&self) -> String {
        std::iter::once(self.cmd.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CmdBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line())
    }
}

/// Exit status of a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// `None` when the child was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    pub const SUCCESS: Self = Self { code: Some(0) };

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit code for reporting; signal terminations map to -1.
    pub fn exit_code(&self) -> i32 {
        self.code.unwrap_or(-1)
    }
}

impl From<std::process::ExitStatus> for CommandStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Runs external commands to completion.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `cmd` with the terminal's stdio and wait for it to exit.
    ///
    /// Fails only when the child could not be started.
    async fn run(&self, cmd: &CmdBuilder) -> Result<CommandStatus>;
}

/// Spawns real child processes that inherit stdin, stdout and stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    async fn run(&self, cmd: &CmdBuilder) -> Result<CommandStatus> {
        let args = cmd.args.iter().map(String::as_str).collect::<Vec<_>>();
        process_utils::execute_interactive(&cmd.cmd, &args, cmd.working_dir.as_deref()).await
    }
}
