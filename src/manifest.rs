//! `package.json` editing
//!
//! The manifest is kept as an untyped JSON document so fields ngspark does not
//! know about survive the rewrite in their original order.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{NgsparkError, Result};
use crate::utils::fs_utils;

pub const MANIFEST_FILE: &str = "package.json";

#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    document: Map<String, Value>,
}

impl PackageManifest {
    /// Load `package.json` from the project root.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(MANIFEST_FILE);
        let content = fs_utils::read_to_string(&path)?;
        Self::parse(path, &content)
    }

    pub fn parse(path: PathBuf, content: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(document) => Ok(Self { path, document }),
            _ => Err(NgsparkError::manifest(format!(
                "{} is not a JSON object",
                path.display()
            ))),
        }
    }

    pub fn main(&self) -> Option<&str> {
        self.document.get("main").and_then(Value::as_str)
    }

    pub fn set_main(&mut self, entry: &str) -> &mut Self {
        self.document
            .insert("main".to_string(), Value::String(entry.to_string()));
        self
    }

    pub fn script(&self, name: &str) -> Option<&str> {
        self.document
            .get("scripts")
            .and_then(|scripts| scripts.get(name))
            .and_then(Value::as_str)
    }

    /// Add or overwrite a script entry, creating `scripts` when absent.
    pub fn set_script(&mut self, name: &str, command: &str) -> Result<&mut Self> {
        let scripts = self
            .document
            .entry("scripts")
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| NgsparkError::manifest("\"scripts\" is not a JSON object"))?;
        scripts.insert(name.to_string(), Value::String(command.to_string()));
        Ok(self)
    }

    /// Pretty-printed with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }

    pub fn save(&self) -> Result<()> {
        fs_utils::write_file(&self.path, &self.to_json()?)
    }
}
