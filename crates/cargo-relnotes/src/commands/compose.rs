use std::path::Path;

use chrono::NaiveDate;
use relnotes_operations::operations::{ComposeInput, ComposeOperation, ComposeOutcome};
use relnotes_operations::providers::{
    FileSystemChangesetReader, FileSystemFragmentStore, FileSystemProjectProvider,
};
use relnotes_project::ConfigOverrides;

use crate::error::Result;

pub(crate) fn run(
    start_path: &Path,
    overrides: ConfigOverrides,
    date: Option<NaiveDate>,
    dry_run: bool,
) -> Result<()> {
    let input = ComposeInput {
        dry_run,
        overrides,
        ..date.map_or_else(ComposeInput::today, ComposeInput::on)
    };
    let operation = ComposeOperation::new(
        FileSystemProjectProvider::new(),
        FileSystemChangesetReader::new(),
        FileSystemFragmentStore::new(),
    );

    match operation.execute(start_path, &input)? {
        ComposeOutcome::NothingToReport => println!("No changesets to report."),
        ComposeOutcome::DryRun { fragment } => print!("{fragment}"),
        ComposeOutcome::Written { path, .. } => {
            println!("Wrote changelog fragment to {}", path.display());
        }
    }

    Ok(())
}
