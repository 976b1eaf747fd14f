use std::fs;
use std::path::Path;

use tracing::info;

use crate::Result;
use crate::error::OperationError;
use crate::traits::FragmentStore;

pub struct FileSystemFragmentStore;

impl FileSystemFragmentStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemFragmentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentStore for FileSystemFragmentStore {
    fn read_fragment(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| OperationError::FragmentRead {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_fragment(&self, path: &Path, fragment: &str) -> Result<()> {
        let write_err = |source| OperationError::FragmentWrite {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, fragment).map_err(write_err)?;

        info!(path = %path.display(), "wrote changelog fragment");
        Ok(())
    }
}
