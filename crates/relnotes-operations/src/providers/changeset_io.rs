use std::fs;
use std::path::{Path, PathBuf};

use relnotes_core::Changeset;
use relnotes_parse::parse_changeset;
use tracing::debug;

use crate::Result;
use crate::error::OperationError;
use crate::traits::ChangesetReader;

pub struct FileSystemChangesetReader;

impl FileSystemChangesetReader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemChangesetReader {
    fn default() -> Self {
        Self::new()
    }
}

fn is_changeset_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    !name.starts_with('.')
        && !name.eq_ignore_ascii_case("README.md")
        && path.extension().is_some_and(|ext| ext == "md")
}

impl ChangesetReader for FileSystemChangesetReader {
    fn list_changesets(&self, changeset_dir: &Path) -> Result<Vec<PathBuf>> {
        let list_err = |source| OperationError::ChangesetList {
            path: changeset_dir.to_path_buf(),
            source,
        };

        let entries = match fs::read_dir(changeset_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %changeset_dir.display(), "changeset directory does not exist");
                return Ok(Vec::new());
            }
            Err(source) => return Err(list_err(source)),
        };

        let mut changesets = Vec::new();
        for entry in entries {
            let path = entry.map_err(list_err)?.path();
            if path.is_file() && is_changeset_file(&path) {
                changesets.push(path);
            }
        }
        changesets.sort();

        Ok(changesets)
    }

    fn read_changeset(&self, path: &Path) -> Result<Changeset> {
        let content =
            fs::read_to_string(path).map_err(|source| OperationError::ChangesetFileRead {
                path: path.to_path_buf(),
                source,
            })?;

        parse_changeset(&content).map_err(|source| OperationError::ChangesetParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
