#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const MARKER_CHANGELOG: &str = "# Changelog\n\n<!-- CHANGELOG:INSERT -->\n";

pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dirs");
    }
    fs::write(path, content).expect("write file");
}

pub fn write_changeset(root: &Path, id: &str, bumps: &[(&str, &str)], summary: &str) {
    let front_matter: String = bumps
        .iter()
        .map(|(name, bump)| format!("\"{name}\": {bump}\n"))
        .collect();
    write(
        root,
        &format!(".changeset/{id}.md"),
        &format!("---\n{front_matter}---\n\n{summary}\n"),
    );
}

/// Workspace with root `acme`, a renamed member and an excluded docs package.
pub fn create_workspace() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    let root = dir.path();

    write(
        root,
        "Cargo.toml",
        r#"[package]
name = "acme"
version = "1.4.0"

[workspace]
members = ["crates/*"]

[workspace.metadata.relnotes]
excluded-packages = ["acme-docs"]
package-prefix = "acme-"
"#,
    );
    write(
        root,
        "crates/parser/Cargo.toml",
        "[package]\nname = \"acme-parser\"\nversion = \"0.2.1\"\n",
    );
    write(
        root,
        "crates/docs/Cargo.toml",
        "[package]\nname = \"acme-docs\"\nversion = \"0.1.0\"\n",
    );
    write(root, "CHANGELOG.md", MARKER_CHANGELOG);

    dir
}

macro_rules! cargo_relnotes {
    () => {
        assert_cmd::cargo::cargo_bin_cmd!("cargo-relnotes")
    };
}
