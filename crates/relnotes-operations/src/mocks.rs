use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use relnotes_changelog::{ChangelogError, INSERT_MARKER};
use relnotes_core::{BumpType, Changeset, PackageBump, PackageInfo};
use relnotes_project::{CargoProject, ConfigOverrides, ProjectKind, RelnotesConfig};

use crate::Result;
use crate::error::OperationError;
use crate::traits::{ChangelogWriter, ChangesetReader, FragmentStore, ProjectProvider};

fn not_found() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "not found in mock")
}

pub struct MockProjectProvider {
    project: CargoProject,
    config: RelnotesConfig,
}

impl MockProjectProvider {
    /// The root package, if any, becomes the umbrella like it does on disk.
    #[must_use]
    pub fn new(project: CargoProject) -> Self {
        let umbrella = match project.kind {
            ProjectKind::VirtualWorkspace => None,
            ProjectKind::WorkspaceWithRoot | ProjectKind::SinglePackage => project
                .packages
                .iter()
                .find(|p| p.path == project.root)
                .map(|p| p.name.clone()),
        };
        let config = RelnotesConfig::default().with_overrides(ConfigOverrides {
            umbrella,
            ..ConfigOverrides::default()
        });
        Self { project, config }
    }

    #[must_use]
    pub fn single_package(name: &str, version: &str) -> Self {
        let root = PathBuf::from("/mock/project");
        let project = CargoProject {
            root: root.clone(),
            kind: ProjectKind::SinglePackage,
            packages: vec![PackageInfo {
                name: name.to_string(),
                version: version.parse().expect("valid version"),
                path: root,
            }],
        };
        Self::new(project)
    }

    #[must_use]
    pub fn workspace(packages: Vec<(&str, &str)>) -> Self {
        let root = PathBuf::from("/mock/workspace");
        let packages = packages
            .into_iter()
            .map(|(name, version)| PackageInfo {
                name: name.to_string(),
                version: version.parse().expect("valid version"),
                path: root.join("crates").join(name),
            })
            .collect();

        Self::new(CargoProject {
            root,
            kind: ProjectKind::VirtualWorkspace,
            packages,
        })
    }
}

impl ProjectProvider for MockProjectProvider {
    fn discover_project(&self, _start_path: &Path) -> Result<CargoProject> {
        Ok(self.project.clone())
    }

    fn load_config(&self, _project: &CargoProject) -> Result<RelnotesConfig> {
        Ok(self.config.clone())
    }
}

/// Serves changesets from memory in insertion order.
pub struct MockChangesetReader {
    changesets: Vec<(PathBuf, Changeset)>,
    listed_dirs: Mutex<Vec<PathBuf>>,
}

impl MockChangesetReader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            changesets: Vec::new(),
            listed_dirs: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_changeset(mut self, path: PathBuf, changeset: Changeset) -> Self {
        self.changesets.push((path, changeset));
        self
    }

    #[must_use]
    pub fn with_changesets(mut self, changesets: Vec<(PathBuf, Changeset)>) -> Self {
        self.changesets.extend(changesets);
        self
    }

    #[must_use]
    pub fn listed_dirs(&self) -> Vec<PathBuf> {
        self.listed_dirs.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockChangesetReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangesetReader for MockChangesetReader {
    fn list_changesets(&self, changeset_dir: &Path) -> Result<Vec<PathBuf>> {
        self.listed_dirs
            .lock()
            .expect("lock poisoned")
            .push(changeset_dir.to_path_buf());
        Ok(self.changesets.iter().map(|(p, _)| p.clone()).collect())
    }

    fn read_changeset(&self, path: &Path) -> Result<Changeset> {
        self.changesets
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, c)| c.clone())
            .ok_or_else(|| OperationError::ChangesetFileRead {
                path: path.to_path_buf(),
                source: not_found(),
            })
    }
}

impl ChangesetReader for Arc<MockChangesetReader> {
    fn list_changesets(&self, changeset_dir: &Path) -> Result<Vec<PathBuf>> {
        (**self).list_changesets(changeset_dir)
    }

    fn read_changeset(&self, path: &Path) -> Result<Changeset> {
        (**self).read_changeset(path)
    }
}

pub struct MockFragmentStore {
    fragments: Mutex<HashMap<PathBuf, String>>,
    writes: Mutex<usize>,
}

impl MockFragmentStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fragments: Mutex::new(HashMap::new()),
            writes: Mutex::new(0),
        }
    }

    #[must_use]
    pub fn with_fragment(self, path: &str, fragment: &str) -> Self {
        self.fragments
            .lock()
            .expect("lock poisoned")
            .insert(PathBuf::from(path), fragment.to_string());
        self
    }

    #[must_use]
    pub fn fragment(&self, path: &Path) -> Option<String> {
        self.fragments
            .lock()
            .expect("lock poisoned")
            .get(path)
            .cloned()
    }

    #[must_use]
    pub fn write_count(&self) -> usize {
        *self.writes.lock().expect("lock poisoned")
    }
}

impl Default for MockFragmentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentStore for MockFragmentStore {
    fn read_fragment(&self, path: &Path) -> Result<String> {
        self.fragment(path)
            .ok_or_else(|| OperationError::FragmentRead {
                path: path.to_path_buf(),
                source: not_found(),
            })
    }

    fn write_fragment(&self, path: &Path, fragment: &str) -> Result<()> {
        *self.writes.lock().expect("lock poisoned") += 1;
        self.fragments
            .lock()
            .expect("lock poisoned")
            .insert(path.to_path_buf(), fragment.to_string());
        Ok(())
    }
}

impl FragmentStore for Arc<MockFragmentStore> {
    fn read_fragment(&self, path: &Path) -> Result<String> {
        (**self).read_fragment(path)
    }

    fn write_fragment(&self, path: &Path, fragment: &str) -> Result<()> {
        (**self).write_fragment(path, fragment)
    }
}

pub struct MockChangelogWriter {
    merged: Mutex<Vec<(PathBuf, String)>>,
    has_marker: bool,
}

impl MockChangelogWriter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            merged: Mutex::new(Vec::new()),
            has_marker: true,
        }
    }

    /// A writer whose changelog lacks the insertion marker.
    #[must_use]
    pub fn missing_marker() -> Self {
        Self {
            has_marker: false,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn merged(&self) -> Vec<(PathBuf, String)> {
        self.merged.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockChangelogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogWriter for MockChangelogWriter {
    fn merge_fragment(&self, changelog_path: &Path, fragment: &str) -> Result<()> {
        if !self.has_marker {
            return Err(ChangelogError::MissingMarker {
                path: changelog_path.to_path_buf(),
                marker: INSERT_MARKER,
            }
            .into());
        }
        self.merged
            .lock()
            .expect("lock poisoned")
            .push((changelog_path.to_path_buf(), fragment.to_string()));
        Ok(())
    }
}

impl ChangelogWriter for Arc<MockChangelogWriter> {
    fn merge_fragment(&self, changelog_path: &Path, fragment: &str) -> Result<()> {
        (**self).merge_fragment(changelog_path, fragment)
    }
}

#[must_use]
pub fn make_changeset(package_name: &str, bump: BumpType, summary: &str) -> Changeset {
    Changeset {
        summary: summary.to_string(),
        releases: vec![PackageBump {
            name: package_name.to_string(),
            bump_type: bump,
        }],
    }
}
