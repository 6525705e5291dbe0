//! Electron provisioning
//!
//! Installs Electron with Electron Forge, wires the desktop scripts into
//! `package.json` and writes the main-process and preload scripts.

use std::path::Path;

use tracing::debug;

use crate::cli::create::{Executor, Project};
use crate::error::Result;
use crate::manifest::PackageManifest;
use crate::runner::CommandRunner;
use crate::utils::fs_utils;

pub const INSTALL_COMMAND: &str = "bun add -d electron @electron-forge/cli concurrently wait-on";
pub const IMPORT_COMMAND: &str = "bunx electron-forge import";

pub const MAIN_ENTRY: &str = "electron/main.js";
pub const PRELOAD_FILE: &str = "electron/preload.js";

const MAIN_TEMPLATE: &str = include_str!("templates/electron_main.js");

/// Scripts added to `package.json`, overwriting existing entries of the same name.
pub const SCRIPTS: [(&str, &str); 5] = [
    ("electron:build", "ng build --base-href ./"),
    (
        "electron:start",
        "bun run electron:build && bunx electron-forge start",
    ),
    (
        "electron:dev",
        r#"concurrently -k -n "NG,ELEC" -c "magenta,cyan" "ng serve" "bun run wait-and-electron""#,
    ),
    ("electron", "electron ."),
    (
        "wait-and-electron",
        "wait-on http://localhost:4200 && bun run electron",
    ),
];

pub async fn setup<R: CommandRunner>(executor: &Executor<'_, R>, project: &Project) -> Result<()> {
    executor.run(INSTALL_COMMAND, &project.root).await?;
    executor.run(IMPORT_COMMAND, &project.root).await?;

    patch_manifest(&project.root)?;
    write_scripts(project)?;
    Ok(())
}

/// Point `main` at the Electron entry and add the desktop scripts.
pub fn patch_manifest(project_root: &Path) -> Result<()> {
    let mut manifest = PackageManifest::load(project_root)?;
    manifest.set_main(MAIN_ENTRY);
    for (name, command) in SCRIPTS {
        manifest.set_script(name, command)?;
    }
    manifest.save()?;
    debug!("Patched package.json with {} electron scripts", SCRIPTS.len());
    Ok(())
}

/// Main-process script; production builds load `dist/<name>/browser/index.html`.
pub fn main_script(project_name: &str) -> String {
    MAIN_TEMPLATE.trim().replace("{{project}}", project_name)
}

pub fn write_scripts(project: &Project) -> Result<()> {
    fs_utils::write_file(&project.root.join(MAIN_ENTRY), &main_script(&project.name))?;
    fs_utils::write_file(&project.root.join(PRELOAD_FILE), "")?;
    Ok(())
}
