use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use relnotes_changelog::render_fragment;
use relnotes_project::ConfigOverrides;
use tracing::debug;

use super::plan::PlanOperation;
use crate::Result;
use crate::traits::{ChangesetReader, FragmentStore, ProjectProvider};

#[derive(Debug, Clone)]
pub struct ComposeInput {
    /// Date used for the `## YYYY-MM-DD` header.
    pub date: NaiveDate,
    pub dry_run: bool,
    pub overrides: ConfigOverrides,
}

impl ComposeInput {
    #[must_use]
    pub fn today() -> Self {
        Self::on(Local::now().date_naive())
    }

    #[must_use]
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date,
            dry_run: false,
            overrides: ConfigOverrides::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeOutcome {
    /// No release had changesets after filtering; nothing was written.
    NothingToReport,
    DryRun { fragment: String },
    Written { path: PathBuf, fragment: String },
}

pub struct ComposeOperation<P, R, F> {
    planner: PlanOperation<P, R>,
    fragment_store: F,
}

impl<P, R, F> ComposeOperation<P, R, F>
where
    P: ProjectProvider,
    R: ChangesetReader,
    F: FragmentStore,
{
    pub fn new(project_provider: P, changeset_reader: R, fragment_store: F) -> Self {
        Self {
            planner: PlanOperation::new(project_provider, changeset_reader),
            fragment_store,
        }
    }

    /// Renders the changelog fragment for the pending changesets and stores
    /// it, unless this is a dry run.
    ///
    /// # Errors
    ///
    /// Returns an error if planning fails, the fragment cannot be normalized,
    /// or the fragment store cannot be written.
    pub fn execute(&self, start_path: &Path, input: &ComposeInput) -> Result<ComposeOutcome> {
        let output = self.planner.execute(start_path, &input.overrides)?;

        let Some(fragment) =
            render_fragment(&output.plan, output.config.fragment_settings(), input.date)?
        else {
            debug!("no releases to report");
            return Ok(ComposeOutcome::NothingToReport);
        };

        if input.dry_run {
            return Ok(ComposeOutcome::DryRun { fragment });
        }

        let path = output.config.fragment_path_in(&output.project_root);
        self.fragment_store.write_fragment(&path, &fragment)?;

        Ok(ComposeOutcome::Written { path, fragment })
    }
}
