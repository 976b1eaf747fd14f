//! Parsing of changeset files.
//!
//! A changeset is a markdown file with a YAML front matter block mapping
//! package names to bump types, followed by a free-text summary:
//!
//! ```text
//! ---
//! "my-crate": minor
//! ---
//! Add streaming support.
//! ```

mod error;
mod parse;

pub use error::{FormatError, FrontMatterError, ValidationError};
pub use parse::parse_changeset;
