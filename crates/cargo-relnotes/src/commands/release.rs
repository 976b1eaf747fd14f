use std::path::Path;

use chrono::{Local, NaiveDate};
use relnotes_operations::operations::{ReleaseOperation, ReleaseOutcome};
use relnotes_operations::providers::{
    FileSystemChangelogWriter, FileSystemChangesetReader, FileSystemProjectProvider,
};
use relnotes_project::ConfigOverrides;
use tracing::info;

use crate::error::Result;

pub(crate) fn run(
    start_path: &Path,
    overrides: ConfigOverrides,
    date: Option<NaiveDate>,
) -> Result<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let operation = ReleaseOperation::new(
        FileSystemProjectProvider::new(),
        FileSystemChangesetReader::new(),
        FileSystemChangelogWriter::new(),
    );

    match operation.execute(start_path, date, &overrides)? {
        ReleaseOutcome::NothingToReport => println!("No changesets to report."),
        ReleaseOutcome::Released { changelog_path, .. } => {
            info!(date = %date, "release entry merged");
            println!("Updated {}", changelog_path.display());
        }
    }

    Ok(())
}
