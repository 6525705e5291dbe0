#![allow(dead_code)]

use ngspark::cli::create::{Feature, Prompter};
use ngspark::error::Result;
use ngspark::runner::{CmdBuilder, CommandRunner, CommandStatus};
use std::cell::RefCell;
use std::fs;
use std::path::Path;

pub const STYLES: &str = "body { margin: 0; }";

pub const PACKAGE_JSON: &str = r#"{
  "name": "demo",
  "version": "0.0.0",
  "scripts": {
    "ng": "ng",
    "start": "ng serve",
    "build": "ng build"
  },
  "private": true
}"#;

/// Records every command and fakes `ng new` by writing a minimal project.
#[derive(Default)]
pub struct FakeRunner {
    pub commands: RefCell<Vec<CmdBuilder>>,
    /// Command lines that exit with code 1
    pub failing: Vec<String>,
    /// Behave like a generator that produced nothing
    pub skip_scaffold: bool,
}

impl FakeRunner {
    pub fn failing(lines: &[&str]) -> Self {
        Self {
            failing: lines.iter().map(|l| l.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.commands.borrow().iter().map(|c| c.line()).collect()
    }
}

impl CommandRunner for FakeRunner {
    async fn run(&self, cmd: &CmdBuilder) -> Result<CommandStatus> {
        self.commands.borrow_mut().push(cmd.clone());

        let is_generator = cmd.cmd == "ng" && cmd.args.first().map(String::as_str) == Some("new");
        if is_generator && !self.skip_scaffold {
            let dir = cmd.working_dir.as_deref().unwrap_or(Path::new("."));
            scaffold(&dir.join(&cmd.args[1]));
        }

        if self.failing.contains(&cmd.line()) {
            Ok(CommandStatus { code: Some(1) })
        } else {
            Ok(CommandStatus::SUCCESS)
        }
    }
}

pub fn scaffold(root: &Path) {
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("src/styles.css"), STYLES).unwrap();
    fs::write(root.join("package.json"), PACKAGE_JSON).unwrap();
}

/// Answers prompts from fixed values.
pub struct ScriptedPrompter {
    pub name: String,
    pub features: Vec<Feature>,
}

impl ScriptedPrompter {
    pub fn new(name: &str, features: &[Feature]) -> Self {
        Self {
            name: name.to_string(),
            features: features.to_vec(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn project_name(&mut self) -> Result<Option<String>> {
        Ok(Some(self.name.clone()))
    }

    fn features(&mut self) -> Result<Option<Vec<Feature>>> {
        Ok(Some(self.features.clone()))
    }
}
