//! Error handling module for ngspark
//!
//! This module defines the error type shared by the provisioning pipeline.
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NgsparkError>;

/// Main error type for the ngspark application
#[derive(Error, Debug)]
pub enum NgsparkError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid package manifest: {0}")]
    Manifest(String),

    #[error("Failed to start command '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command execution error: {command} failed with exit code {exit_code}")]
    CommandExecution { command: String, exit_code: i32 },

    #[error("Invalid command line: {0}")]
    InvalidCommand(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Interactive prompts need a terminal")]
    NotATerminal,
}

impl NgsparkError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn manifest(message: impl Into<String>) -> Self {
        Self::Manifest(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io",
            Self::Json(_) | Self::Manifest(_) => "manifest",
            Self::CommandSpawn { .. }
            | Self::CommandExecution { .. }
            | Self::InvalidCommand(_) => "command",
            Self::Config(_) => "config",
            Self::Prompt(_) | Self::NotATerminal => "prompt",
        }
    }
}
