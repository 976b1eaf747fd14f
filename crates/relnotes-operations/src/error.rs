use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Project(#[from] relnotes_project::ProjectError),

    #[error(transparent)]
    Parse(#[from] relnotes_parse::FormatError),

    #[error(transparent)]
    Changelog(#[from] relnotes_changelog::ChangelogError),

    #[error("failed to read changeset file '{path}'")]
    ChangesetFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse changeset file '{path}'")]
    ChangesetParse {
        path: PathBuf,
        #[source]
        source: relnotes_parse::FormatError,
    },

    #[error("failed to list changeset files in '{path}'")]
    ChangesetList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read changelog fragment '{path}'")]
    FragmentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write changelog fragment '{path}'")]
    FragmentWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("changelog fragment '{path}' is empty; run `cargo relnotes compose` first")]
    EmptyFragment { path: PathBuf },
}

impl From<relnotes_changelog::NormalizeError> for OperationError {
    fn from(err: relnotes_changelog::NormalizeError) -> Self {
        Self::Changelog(err.into())
    }
}

pub type Result<T> = std::result::Result<T, OperationError>;
