use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::Result;
use crate::error::ChangelogError;

pub const INSERT_MARKER: &str = "<!-- CHANGELOG:INSERT -->";

/// A changelog file loaded into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogDocument {
    path: PathBuf,
    content: String,
}

impl ChangelogDocument {
    /// # Errors
    ///
    /// Returns `ChangelogError::Read` if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ChangelogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn has_marker(&self) -> bool {
        self.content.contains(INSERT_MARKER)
    }

    /// Replaces the first marker with the marker, a blank line, and
    /// `fragment`. Older entries end up below the new one.
    ///
    /// # Errors
    ///
    /// Returns `ChangelogError::MissingMarker` if the document has no marker.
    /// The content is left untouched in that case.
    pub fn insert_fragment(&mut self, fragment: &str) -> Result<()> {
        if !self.has_marker() {
            return Err(ChangelogError::MissingMarker {
                path: self.path.clone(),
                marker: INSERT_MARKER,
            });
        }

        let replacement = format!("{INSERT_MARKER}\n\n{fragment}");
        self.content = self.content.replacen(INSERT_MARKER, &replacement, 1);
        Ok(())
    }

    /// Writes the content back through a temporary file in the same
    /// directory, so readers see either the old or the new file.
    ///
    /// # Errors
    ///
    /// Returns `ChangelogError::Write` if the temporary file cannot be
    /// created, written or moved into place.
    pub fn save(&self) -> Result<()> {
        let write_err = |source| ChangelogError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
        temp.write_all(self.content.as_bytes()).map_err(write_err)?;
        temp.as_file().sync_all().map_err(write_err)?;
        temp.persist(&self.path)
            .map_err(|err| write_err(err.error))?;

        debug!(path = %self.path.display(), bytes = self.content.len(), "wrote changelog");
        Ok(())
    }
}

/// Inserts `fragment` below the marker of the changelog at `path`.
///
/// # Errors
///
/// Fails if the file cannot be read, has no marker, or cannot be written.
/// The file on disk is not modified unless this returns `Ok`.
pub fn merge_fragment(path: &Path, fragment: &str) -> Result<()> {
    let mut document = ChangelogDocument::from_file(path)?;
    document.insert_fragment(fragment)?;
    document.save()
}
