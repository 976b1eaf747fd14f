use std::path::Path;

use crate::Result;

/// Holds the composed fragment between `compose` and `write`.
pub trait FragmentStore: Send + Sync {
    /// # Errors
    ///
    /// Returns `OperationError::FragmentRead` if the fragment cannot be read.
    fn read_fragment(&self, path: &Path) -> Result<String>;

    /// Replaces the stored fragment, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::FragmentWrite` if the fragment cannot be written.
    fn write_fragment(&self, path: &Path, fragment: &str) -> Result<()>;
}
