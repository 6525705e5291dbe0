//! Create command handler for ngspark
//!
//! Collects the project name and optional features, generates the base Angular
//! project, then provisions each selected feature in a fixed order.

use std::collections::BTreeSet;
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

use console::Term;
use dialoguer::{Input, MultiSelect, theme::ColorfulTheme};
use tracing::{debug, warn};

use crate::cli::{electron, material, tailwind};
use crate::config::{Config, FailurePolicy};
use crate::error::{NgsparkError, Result};
use crate::log::StyledText;
use crate::runner::{CmdBuilder, CommandRunner, CommandStatus, ProcessRunner};
use crate::utils::string_utils;

/// Optional features, declared in provisioning order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Material,
    Tailwind,
    Electron,
}

impl Feature {
    pub const ALL: [Feature; 3] = [Feature::Material, Feature::Tailwind, Feature::Electron];

    pub fn id(&self) -> &'static str {
        match self {
            Feature::Material => "material",
            Feature::Tailwind => "tailwind",
            Feature::Electron => "electron",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Feature::Material => "Angular Material",
            Feature::Tailwind => "Tailwind CSS",
            Feature::Electron => "Electron",
        }
    }

    fn banner(&self) -> &'static str {
        match self {
            Feature::Material => "🗿 Adding Angular Material...",
            Feature::Tailwind => "✨ Adding TailwindCSS...",
            Feature::Electron => "⚡️ Adding Electron...",
        }
    }

    async fn provision<R: CommandRunner>(
        self,
        executor: &Executor<'_, R>,
        project: &Project,
    ) -> Result<()> {
        match self {
            Feature::Material => material::setup(executor, project).await,
            Feature::Tailwind => tailwind::setup(executor, project).await,
            Feature::Electron => electron::setup(executor, project).await,
        }
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Answers collected from the prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub project: String,
    pub features: BTreeSet<Feature>,
}

impl Selection {
    pub fn new(project: impl Into<String>, features: impl IntoIterator<Item = Feature>) -> Self {
        Self {
            project: project.into(),
            features: features.into_iter().collect(),
        }
    }

    pub fn wants(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }
}

/// A generated project and the directory it lives in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub root: PathBuf,
}

impl Project {
    pub fn new(base_dir: &Path, name: &str) -> Self {
        Self {
            name: name.to_string(),
            root: base_dir.join(name),
        }
    }
}

/// Source of the user's answers
pub trait Prompter {
    /// `None` when the prompt was cancelled.
    fn project_name(&mut self) -> Result<Option<String>>;

    /// `None` when the prompt was cancelled.
    fn features(&mut self) -> Result<Option<Vec<Feature>>>;
}

/// Prompts on the controlling terminal
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Prompter for DialoguerPrompter {
    fn project_name(&mut self) -> Result<Option<String>> {
        if !Term::stderr().is_term() {
            return Err(NgsparkError::NotATerminal);
        }

        let name = Input::<String>::with_theme(&self.theme)
            .with_prompt("Project name")
            .validate_with(|input: &String| {
                string_utils::validate_project_name(input).map(|_| ())
            })
            .interact_text()?;
        Ok(Some(name))
    }

    fn features(&mut self) -> Result<Option<Vec<Feature>>> {
        let titles = Feature::ALL.map(|feature| feature.title());
        let selections = MultiSelect::with_theme(&self.theme)
            .with_prompt("Which optional tools do you want to include? (space to select, enter to confirm)")
            .items(&titles)
            .interact_opt()?;

        Ok(selections.map(|indices| indices.into_iter().map(|i| Feature::ALL[i]).collect()))
    }
}

/// Runs command lines for the provisioners and applies the failure policy.
pub struct Executor<'a, R: CommandRunner> {
    runner: &'a R,
    config: &'a Config,
}

impl<'a, R: CommandRunner> Executor<'a, R> {
    pub fn new(runner: &'a R, config: &'a Config) -> Self {
        Self { runner, config }
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    /// Run `line` inside `dir`.
    ///
    /// A non-zero exit is logged and tolerated under [`FailurePolicy::Continue`],
    /// and turned into an error under [`FailurePolicy::Abort`].
    pub async fn run(&self, line: &str, dir: &Path) -> Result<CommandStatus> {
        let cmd = CmdBuilder::parse(line)?.working_dir(dir);
        debug!("Running `{}` in {}", cmd, dir.display());

        let status = self.runner.run(&cmd).await?;
        if !status.success() {
            match self.config.on_command_failure {
                FailurePolicy::Continue => warn!(
                    "`{}` exited with code {}, continuing",
                    cmd,
                    status.exit_code()
                ),
                FailurePolicy::Abort => {
                    return Err(NgsparkError::CommandExecution {
                        command: cmd.line(),
                        exit_code: status.exit_code(),
                    });
                }
            }
        }
        Ok(status)
    }
}

/// Handle the create command
pub async fn handle() -> Result<()> {
    let config = Config::load()?;
    let base_dir = std::env::current_dir().map_err(|e| NgsparkError::io(".", e))?;
    let mut prompter = DialoguerPrompter::default();

    create(&ProcessRunner, &mut prompter, &config, &base_dir).await?;
    Ok(())
}

/// Prompt, provision and report. Returns `None` when nothing was created.
pub async fn create<R: CommandRunner, P: Prompter>(
    runner: &R,
    prompter: &mut P,
    config: &Config,
    base_dir: &Path,
) -> Result<Option<Project>> {
    let Some(selection) = collect_selection(prompter)? else {
        debug!("No project name given, nothing to create");
        return Ok(None);
    };

    let project = provision(runner, config, base_dir, &selection).await?;

    StyledText::new(" ").green_bold("✅ Project created!").println();
    StyledText::new(" ").text(&next_steps(&selection)).println();

    Ok(Some(project))
}

/// Gather the selection; an empty or cancelled project name yields `None`.
pub fn collect_selection<P: Prompter>(prompter: &mut P) -> Result<Option<Selection>> {
    let Some(name) = prompter.project_name()? else {
        return Ok(None);
    };
    let Ok(name) = string_utils::validate_project_name(&name) else {
        return Ok(None);
    };
    let name = name.to_string();

    let features = prompter.features()?.unwrap_or_default();
    Ok(Some(Selection::new(name, features)))
}

/// Generate the base project in `base_dir`, then run each selected provisioner.
pub async fn provision<R: CommandRunner>(
    runner: &R,
    config: &Config,
    base_dir: &Path,
    selection: &Selection,
) -> Result<Project> {
    let executor = Executor::new(runner, config);
    let project = Project::new(base_dir, &selection.project);

    StyledText::new("")
        .green_bold("🚀 Creating project: ")
        .cyan_bold(&project.name)
        .green_bold("...")
        .println();
    executor
        .run(
            &format!("ng new {} --defaults --package-manager=bun", project.name),
            base_dir,
        )
        .await?;

    for feature in Feature::ALL {
        if !selection.wants(feature) {
            continue;
        }
        StyledText::new("").green_bold(feature.banner()).println();
        feature.provision(&executor, &project).await?;
    }

    Ok(project)
}

/// Follow-up instruction shown after a successful run.
pub fn next_steps(selection: &Selection) -> String {
    let name = &selection.project;
    if selection.wants(Feature::Electron) {
        format!(
            "➡️ Run 'cd {name} && bun run electron:start' to launch the app. Or 'cd {name} && bun run electron:dev' for developer mode"
        )
    } else {
        format!("➡️ Run 'cd {name} && ng serve' to launch the app.")
    }
}
