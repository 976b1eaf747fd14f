use std::path::{Path, PathBuf};

use relnotes_core::Changeset;

use crate::Result;

pub trait ChangesetReader: Send + Sync {
    /// Lists changeset files ordered by file name. A missing directory
    /// yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be read.
    fn list_changesets(&self, changeset_dir: &Path) -> Result<Vec<PathBuf>>;

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    fn read_changeset(&self, path: &Path) -> Result<Changeset>;
}
