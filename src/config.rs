//! Configuration management module for ngspark
//!
//! An optional `config.toml` in the platform config directory tunes how the
//! provisioning run reacts to failing tools. `NGSPARK_CONFIG` overrides the path.

use crate::error::{NgsparkError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_ENV: &str = "NGSPARK_CONFIG";

/// What to do when an external tool exits with a non-zero status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log a warning and keep provisioning
    #[default]
    Continue,
    /// Stop the run with an error
    Abort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub on_command_failure: FailurePolicy,
    /// Theme passed to `ng add @angular/material`
    pub material_theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            on_command_failure: FailurePolicy::Continue,
            material_theme: "azure-blue".to_string(),
        }
    }
}

impl Config {
    /// Load from `NGSPARK_CONFIG` or the platform config directory.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| NgsparkError::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let config = Self::parse(&content)
            .map_err(|e| NgsparkError::config(format!("{} ({})", e, path.display())))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Failed to parse config: {}", e))
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from("dev", "ngspark", "ngspark").map(|dirs| dirs.config_dir().join("config.toml"))
}
