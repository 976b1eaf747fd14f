use std::path::Path;

use relnotes_operations::operations::PlanOperation;
use relnotes_operations::providers::{FileSystemChangesetReader, FileSystemProjectProvider};
use relnotes_project::ConfigOverrides;

use crate::error::Result;
use crate::output::{JsonPlanFormatter, PlainTextPlanFormatter, PlanFormatter};

pub(crate) fn run(start_path: &Path, overrides: &ConfigOverrides, json: bool) -> Result<()> {
    let operation = PlanOperation::new(
        FileSystemProjectProvider::new(),
        FileSystemChangesetReader::new(),
    );
    let output = operation.execute(start_path, overrides)?;

    let rendered = if json {
        JsonPlanFormatter.format_plan(&output)?
    } else {
        PlainTextPlanFormatter.format_plan(&output)?
    };
    print!("{rendered}");

    Ok(())
}
