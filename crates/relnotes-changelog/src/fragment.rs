use chrono::{Datelike, NaiveDate};
use relnotes_core::ReleasePlan;
use tracing::debug;

use crate::config::{FragmentSettings, MarkdownStyle};
use crate::error::NormalizeError;
use crate::normalize::normalize_markdown;
use crate::select::select_releases;
use crate::summary::{FormattedRelease, format_release};

#[must_use]
pub fn format_date_header(date: NaiveDate) -> String {
    format!(
        "## {:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

fn release_block(release: &FormattedRelease) -> String {
    let mut block = format!("{}\n\n", release.display_name());

    // Bullets are concatenated as is. A pre-bulleted summary carries no
    // newline, so whatever follows it continues on the same line.
    for bullet in release.bullets().iter().flatten() {
        block.push_str(bullet);
    }

    block
}

/// Joins the date header and every release block with blank lines,
/// without normalizing.
#[must_use]
pub fn assemble_fragment(releases: &[FormattedRelease], date: NaiveDate) -> String {
    std::iter::once(format_date_header(date))
        .chain(releases.iter().map(release_block))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Assembles and normalizes the fragment for one run.
///
/// # Errors
///
/// Returns `NormalizeError` if the assembled markdown is malformed.
pub fn compose_fragment(
    releases: &[FormattedRelease],
    date: NaiveDate,
    style: &MarkdownStyle,
) -> Result<String, NormalizeError> {
    normalize_markdown(&assemble_fragment(releases, date), style)
}

/// Runs the whole pipeline for a plan: select, format, compose.
///
/// Returns `Ok(None)` when no release qualifies.
///
/// # Errors
///
/// Returns `NormalizeError` if the assembled markdown is malformed.
pub fn render_fragment(
    plan: &ReleasePlan,
    settings: &FragmentSettings,
    date: NaiveDate,
) -> Result<Option<String>, NormalizeError> {
    let selected = select_releases(plan, settings);
    debug!(
        planned = plan.releases.len(),
        selected = selected.len(),
        "selected releases for changelog"
    );

    if selected.is_empty() {
        return Ok(None);
    }

    let formatted: Vec<FormattedRelease> = selected
        .into_iter()
        .map(|release| format_release(release, &plan.changesets, settings))
        .collect();

    compose_fragment(&formatted, date, &settings.style).map(Some)
}
