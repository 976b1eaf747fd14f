use std::path::Path;

use relnotes_changelog::ProseWrap;
use serde::Deserialize;

use crate::error::ProjectError;

#[derive(Debug, Deserialize)]
pub(crate) struct CargoManifest {
    pub(crate) package: Option<Package>,
    pub(crate) workspace: Option<WorkspaceSection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Package {
    pub(crate) name: String,
    pub(crate) version: Option<VersionField>,
    pub(crate) metadata: Option<Metadata>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum VersionField {
    Literal(String),
    Inherited(InheritedVersion),
}

#[derive(Debug, Deserialize)]
pub(crate) struct InheritedVersion {
    pub(crate) workspace: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WorkspaceSection {
    pub(crate) members: Option<Vec<String>>,
    pub(crate) exclude: Option<Vec<String>>,
    pub(crate) package: Option<WorkspacePackage>,
    pub(crate) metadata: Option<Metadata>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WorkspacePackage {
    pub(crate) version: Option<String>,
}

/// `[workspace.metadata]` or `[package.metadata]`; other tools' tables are
/// ignored.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct Metadata {
    pub(crate) relnotes: Option<RelnotesMetadata>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct RelnotesMetadata {
    pub(crate) changeset_dir: Option<String>,
    pub(crate) changelog_file: Option<String>,
    pub(crate) fragment_file: Option<String>,
    pub(crate) umbrella_package: Option<String>,
    #[serde(default)]
    pub(crate) excluded_packages: Vec<String>,
    pub(crate) package_prefix: Option<String>,
    pub(crate) print_width: Option<usize>,
    pub(crate) prose_wrap: Option<ProseWrap>,
}

pub(crate) fn read_manifest(path: &Path) -> Result<CargoManifest, ProjectError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProjectError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ProjectError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}
