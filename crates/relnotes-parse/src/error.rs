use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("changeset must start with a '---' line")]
    MissingOpeningDelimiter,

    #[error("front matter opened on line 1 is never closed by a '---' line")]
    MissingClosingDelimiter,

    #[error("front matter is empty")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("changeset must name at least one package")]
    NoReleases,

    #[error("front matter contains a blank package name")]
    BlankPackageName,

    #[error("changeset exceeds maximum size of {max_bytes} bytes")]
    InputTooLarge { max_bytes: usize },
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid front matter YAML")]
    Yaml(#[from] serde_yml::Error),

    #[error(transparent)]
    FrontMatter(#[from] FrontMatterError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
