mod compose;
mod plan;
mod release;
mod write;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use relnotes_project::ConfigOverrides;

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the release plan built from pending changesets
    Plan {
        #[command(flatten)]
        overrides: OverrideArgs,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render pending changesets into the fragment store
    Compose {
        #[command(flatten)]
        overrides: OverrideArgs,

        /// Date for the entry header, as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Print the fragment instead of storing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Insert the stored fragment into the changelog
    Write {
        #[command(flatten)]
        overrides: OverrideArgs,
    },
    /// Compose and insert into the changelog in one step, bypassing the fragment store
    Release {
        #[command(flatten)]
        overrides: OverrideArgs,

        /// Date for the entry header, as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

/// Settings that replace the values from `[*.metadata.relnotes]`.
#[derive(Args, Debug, Default)]
pub(crate) struct OverrideArgs {
    /// Package rendered first as the umbrella entry
    #[arg(long, value_name = "PACKAGE")]
    umbrella: Option<String>,

    /// Package left out of the changelog (repeatable)
    #[arg(long = "exclude", value_name = "PACKAGE")]
    excluded: Vec<String>,

    /// Changelog file, relative to the project root
    #[arg(long = "changelog", value_name = "FILE")]
    changelog_file: Option<PathBuf>,

    /// Fragment store file, relative to the project root
    #[arg(long = "fragment", value_name = "FILE")]
    fragment_file: Option<PathBuf>,
}

impl From<OverrideArgs> for ConfigOverrides {
    fn from(args: OverrideArgs) -> Self {
        Self {
            umbrella: args.umbrella,
            excluded: args.excluded,
            changelog_file: args.changelog_file,
            fragment_file: args.fragment_file,
        }
    }
}

impl Commands {
    pub(crate) fn execute(self, start_path: &Path) -> Result<()> {
        match self {
            Self::Plan { overrides, json } => plan::run(start_path, &overrides.into(), json),
            Self::Compose {
                overrides,
                date,
                dry_run,
            } => compose::run(start_path, overrides.into(), date, dry_run),
            Self::Write { overrides } => write::run(start_path, &overrides.into()),
            Self::Release { overrides, date } => release::run(start_path, overrides.into(), date),
        }
    }
}
