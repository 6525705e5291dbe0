mod common;

use common::{FakeRunner, ScriptedPrompter};
use ngspark::cli::create::{Feature, create};
use ngspark::config::Config;
use ngspark::manifest::PackageManifest;
use std::fs;
use tempfile::tempdir;

#[tokio::test]
async fn test_electron_patches_manifest_and_writes_scripts() {
    let dir = tempdir().unwrap();
    let runner = FakeRunner::default();
    let mut prompter = ScriptedPrompter::new("demo", &[Feature::Electron]);

    let project = create(&runner, &mut prompter, &Config::default(), dir.path())
        .await
        .unwrap()
        .unwrap();

    let raw = fs::read_to_string(project.root.join("package.json")).unwrap();
    assert!(raw.contains(r#""main": "electron/main.js""#));
    assert!(raw.contains(r#""electron": "electron .""#));

    let manifest = PackageManifest::load(&project.root).unwrap();
    assert_eq!(manifest.script("start"), Some("ng serve"));
    assert_eq!(manifest.script("electron:build"), Some("ng build --base-href ./"));
    assert_eq!(
        manifest.script("electron:start"),
        Some("bun run electron:build && bunx electron-forge start")
    );
    assert_eq!(
        manifest.script("wait-and-electron"),
        Some("wait-on http://localhost:4200 && bun run electron")
    );

    let main_js = fs::read_to_string(project.root.join("electron/main.js")).unwrap();
    assert!(main_js.contains("'../dist/demo/browser/index.html'"));
    assert_eq!(
        fs::read_to_string(project.root.join("electron/preload.js")).unwrap(),
        ""
    );

    // styles stay untouched without tailwind
    assert_eq!(
        fs::read_to_string(project.root.join("src/styles.css")).unwrap(),
        common::STYLES
    );
}
