use std::path::{Path, PathBuf};

use relnotes_changelog::{FragmentSettings, MarkdownStyle};

use crate::error::ProjectError;
use crate::manifest::{RelnotesMetadata, read_manifest};
use crate::project::{CargoProject, ProjectKind};
use crate::{DEFAULT_CHANGELOG_FILE, DEFAULT_CHANGESET_DIR, DEFAULT_FRAGMENT_FILE};

/// Resolved settings for one run. Paths are relative to the project root
/// unless given as absolute paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelnotesConfig {
    changeset_dir: PathBuf,
    changelog_file: PathBuf,
    fragment_file: PathBuf,
    fragment: FragmentSettings,
}

impl Default for RelnotesConfig {
    fn default() -> Self {
        Self {
            changeset_dir: PathBuf::from(DEFAULT_CHANGESET_DIR),
            changelog_file: PathBuf::from(DEFAULT_CHANGELOG_FILE),
            fragment_file: PathBuf::from(DEFAULT_FRAGMENT_FILE),
            fragment: FragmentSettings::default(),
        }
    }
}

/// Values supplied on the command line. Anything set here replaces the
/// manifest value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub umbrella: Option<String>,
    pub excluded: Vec<String>,
    pub changelog_file: Option<PathBuf>,
    pub fragment_file: Option<PathBuf>,
}

impl RelnotesConfig {
    #[must_use]
    pub fn changeset_dir(&self) -> &Path {
        &self.changeset_dir
    }

    #[must_use]
    pub fn changelog_file(&self) -> &Path {
        &self.changelog_file
    }

    #[must_use]
    pub fn fragment_file(&self) -> &Path {
        &self.fragment_file
    }

    #[must_use]
    pub fn fragment_settings(&self) -> &FragmentSettings {
        &self.fragment
    }

    #[must_use]
    pub fn changeset_dir_in(&self, root: &Path) -> PathBuf {
        root.join(&self.changeset_dir)
    }

    #[must_use]
    pub fn changelog_path_in(&self, root: &Path) -> PathBuf {
        root.join(&self.changelog_file)
    }

    #[must_use]
    pub fn fragment_path_in(&self, root: &Path) -> PathBuf {
        root.join(&self.fragment_file)
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(umbrella) = overrides.umbrella {
            self.fragment.umbrella = Some(umbrella);
        }
        if !overrides.excluded.is_empty() {
            self.fragment.excluded = overrides.excluded;
        }
        if let Some(path) = overrides.changelog_file {
            self.changelog_file = path;
        }
        if let Some(path) = overrides.fragment_file {
            self.fragment_file = path;
        }
        self
    }
}

/// Reads `[workspace.metadata.relnotes]` for workspaces or
/// `[package.metadata.relnotes]` for single packages.
///
/// Without an explicit `umbrella-package`, the root package is the umbrella.
///
/// # Errors
///
/// Returns an error if the root manifest cannot be read or parsed, or holds
/// an invalid setting.
pub fn load_config(project: &CargoProject) -> Result<RelnotesConfig, ProjectError> {
    let manifest_path = project.manifest_path();
    let manifest = read_manifest(&manifest_path)?;

    let metadata = match project.kind {
        ProjectKind::SinglePackage => manifest.package.and_then(|pkg| pkg.metadata),
        ProjectKind::VirtualWorkspace | ProjectKind::WorkspaceWithRoot => {
            manifest.workspace.and_then(|ws| ws.metadata)
        }
    }
    .and_then(|meta| meta.relnotes)
    .unwrap_or_default();

    build_config(project, metadata, &manifest_path)
}

fn build_config(
    project: &CargoProject,
    metadata: RelnotesMetadata,
    manifest_path: &Path,
) -> Result<RelnotesConfig, ProjectError> {
    let defaults = RelnotesConfig::default();
    let default_style = MarkdownStyle::default();

    let print_width = metadata.print_width.unwrap_or(default_style.print_width);
    if print_width == 0 {
        return Err(ProjectError::InvalidConfig {
            path: manifest_path.to_path_buf(),
            key: "print-width",
            reason: "must be greater than zero".to_string(),
        });
    }

    let umbrella = metadata
        .umbrella_package
        .or_else(|| project.root_package().map(|p| p.name.clone()));

    let fragment = FragmentSettings {
        umbrella,
        excluded: metadata.excluded_packages,
        package_prefix: metadata.package_prefix,
        style: MarkdownStyle {
            print_width,
            prose_wrap: metadata.prose_wrap.unwrap_or(default_style.prose_wrap),
            ..default_style
        },
    };

    Ok(RelnotesConfig {
        changeset_dir: metadata
            .changeset_dir
            .map_or(defaults.changeset_dir, PathBuf::from),
        changelog_file: metadata
            .changelog_file
            .map_or(defaults.changelog_file, PathBuf::from),
        fragment_file: metadata
            .fragment_file
            .map_or(defaults.fragment_file, PathBuf::from),
        fragment,
    })
}
