mod config;
mod document;
mod error;
mod fragment;
mod normalize;
mod select;
mod summary;

pub use config::{FragmentSettings, MarkdownStyle, ProseWrap, QuoteStyle};
pub use document::{ChangelogDocument, INSERT_MARKER, merge_fragment};
pub use error::{ChangelogError, NormalizeError};
pub use fragment::{assemble_fragment, compose_fragment, format_date_header, render_fragment};
pub use normalize::normalize_markdown;
pub use select::select_releases;
pub use summary::{FormattedRelease, format_bullet, format_release, humanize_package_name};

pub type Result<T> = std::result::Result<T, ChangelogError>;
