use std::path::Path;

use relnotes_operations::operations::WriteOperation;
use relnotes_operations::providers::{
    FileSystemChangelogWriter, FileSystemFragmentStore, FileSystemProjectProvider,
};
use relnotes_project::ConfigOverrides;

use crate::error::Result;

pub(crate) fn run(start_path: &Path, overrides: &ConfigOverrides) -> Result<()> {
    let operation = WriteOperation::new(
        FileSystemProjectProvider::new(),
        FileSystemFragmentStore::new(),
        FileSystemChangelogWriter::new(),
    );
    let output = operation.execute(start_path, overrides)?;

    println!("Updated {}", output.changelog_path.display());
    Ok(())
}
