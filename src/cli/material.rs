use crate::cli::create::{Executor, Project};
use crate::error::Result;
use crate::runner::CommandRunner;

/// `ng add` command for Angular Material with the configured theme
pub fn add_command(theme: &str) -> String {
    format!("ng add @angular/material --defaults --theme={theme} --skip-confirmation")
}

pub async fn setup<R: CommandRunner>(executor: &Executor<'_, R>, project: &Project) -> Result<()> {
    let command = add_command(&executor.config().material_theme);
    executor.run(&command, &project.root).await?;
    Ok(())
}
