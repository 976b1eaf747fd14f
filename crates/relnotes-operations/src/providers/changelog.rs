use std::path::Path;

use tracing::info;

use crate::Result;
use crate::traits::ChangelogWriter;

pub struct FileSystemChangelogWriter;

impl FileSystemChangelogWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemChangelogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogWriter for FileSystemChangelogWriter {
    fn merge_fragment(&self, changelog_path: &Path, fragment: &str) -> Result<()> {
        relnotes_changelog::merge_fragment(changelog_path, fragment)?;
        info!(path = %changelog_path.display(), "updated changelog");
        Ok(())
    }
}
