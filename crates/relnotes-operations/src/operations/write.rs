use std::path::{Path, PathBuf};

use relnotes_project::ConfigOverrides;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{ChangelogWriter, FragmentStore, ProjectProvider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutput {
    pub changelog_path: PathBuf,
    pub fragment_path: PathBuf,
}

pub struct WriteOperation<P, F, W> {
    project_provider: P,
    fragment_store: F,
    changelog_writer: W,
}

impl<P, F, W> WriteOperation<P, F, W>
where
    P: ProjectProvider,
    F: FragmentStore,
    W: ChangelogWriter,
{
    pub fn new(project_provider: P, fragment_store: F, changelog_writer: W) -> Self {
        Self {
            project_provider,
            fragment_store,
            changelog_writer,
        }
    }

    /// Merges the stored fragment into the changelog. The fragment store is
    /// left as is.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment is missing or blank, or if the
    /// changelog cannot be merged.
    pub fn execute(&self, start_path: &Path, overrides: &ConfigOverrides) -> Result<WriteOutput> {
        let project = self.project_provider.discover_project(start_path)?;
        let config = self
            .project_provider
            .load_config(&project)?
            .with_overrides(overrides.clone());

        let fragment_path = config.fragment_path_in(&project.root);
        let fragment = self.fragment_store.read_fragment(&fragment_path)?;
        if fragment.trim().is_empty() {
            return Err(OperationError::EmptyFragment {
                path: fragment_path,
            });
        }

        let changelog_path = config.changelog_path_in(&project.root);
        self.changelog_writer
            .merge_fragment(&changelog_path, &fragment)?;

        Ok(WriteOutput {
            changelog_path,
            fragment_path,
        })
    }
}
