use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use relnotes_changelog::render_fragment;
use relnotes_project::ConfigOverrides;
use tracing::debug;

use super::plan::PlanOperation;
use crate::Result;
use crate::traits::{ChangelogWriter, ChangesetReader, ProjectProvider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No release had changesets after filtering; the changelog is untouched.
    NothingToReport,
    Released {
        changelog_path: PathBuf,
        fragment: String,
    },
}

/// Composes the fragment in memory and merges it straight into the
/// changelog. The fragment store is never written.
pub struct ReleaseOperation<P, R, W> {
    planner: PlanOperation<P, R>,
    changelog_writer: W,
}

impl<P, R, W> ReleaseOperation<P, R, W>
where
    P: ProjectProvider,
    R: ChangesetReader,
    W: ChangelogWriter,
{
    pub fn new(project_provider: P, changeset_reader: R, changelog_writer: W) -> Self {
        Self {
            planner: PlanOperation::new(project_provider, changeset_reader),
            changelog_writer,
        }
    }

    /// # Errors
    ///
    /// Returns an error if planning fails, the fragment cannot be normalized,
    /// or the changelog is missing, lacks the insertion marker, or cannot be
    /// written. No file is modified in any of these cases.
    pub fn execute(
        &self,
        start_path: &Path,
        date: NaiveDate,
        overrides: &ConfigOverrides,
    ) -> Result<ReleaseOutcome> {
        let output = self.planner.execute(start_path, overrides)?;

        let Some(fragment) =
            render_fragment(&output.plan, output.config.fragment_settings(), date)?
        else {
            debug!("no releases to report");
            return Ok(ReleaseOutcome::NothingToReport);
        };

        let changelog_path = output.config.changelog_path_in(&output.project_root);
        self.changelog_writer
            .merge_fragment(&changelog_path, &fragment)?;

        Ok(ReleaseOutcome::Released {
            changelog_path,
            fragment,
        })
    }
}
