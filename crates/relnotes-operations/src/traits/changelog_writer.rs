use std::path::Path;

use crate::Result;

pub trait ChangelogWriter: Send + Sync {
    /// Inserts `fragment` after the insertion marker of the changelog.
    ///
    /// # Errors
    ///
    /// Returns an error if the changelog is missing, has no marker, or
    /// cannot be written.
    fn merge_fragment(&self, changelog_path: &Path, fragment: &str) -> Result<()>;
}
