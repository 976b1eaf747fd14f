use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("code fence opened on line {line} is never closed")]
    UnclosedFence { line: usize },
}

#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("failed to read changelog at '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write changelog at '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("changelog at '{path}' has no insertion marker '{marker}'")]
    MissingMarker { path: PathBuf, marker: &'static str },

    #[error("failed to normalize changelog fragment")]
    Normalize(#[from] NormalizeError),
}
