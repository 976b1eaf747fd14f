mod config;
mod error;
mod manifest;
mod project;

pub const DEFAULT_CHANGESET_DIR: &str = ".changeset";
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";
pub const DEFAULT_FRAGMENT_FILE: &str = ".changeset/.changelogrc";

pub use config::{ConfigOverrides, RelnotesConfig, load_config};
pub use error::ProjectError;
pub use project::{CargoProject, ProjectKind, discover_project};

pub type Result<T> = std::result::Result<T, ProjectError>;
