use indexmap::IndexMap;
use serde::Deserialize;
use serde_with::{MapPreventDuplicates, serde_as};

use relnotes_core::{BumpType, Changeset, PackageBump};

use crate::error::{FormatError, FrontMatterError, ValidationError};

const DELIMITER: &str = "---";

const MAX_INPUT_SIZE: usize = 16 * 1024 * 1024;

#[serde_as]
#[derive(Deserialize)]
struct ReleasesMap {
    #[serde(flatten)]
    #[serde_as(as = "MapPreventDuplicates<_, _>")]
    releases: IndexMap<String, BumpType>,
}

struct FrontMatter<'a> {
    yaml: &'a str,
    body: &'a str,
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Splits on the first two lines that consist of `---` alone.
fn split_front_matter(content: &str) -> Result<FrontMatter<'_>, FrontMatterError> {
    let content = content.trim_start_matches('\u{feff}').trim_start();
    let mut lines = content.split_inclusive('\n');

    match lines.next() {
        Some(first) if is_delimiter(first) => {
            let yaml_start = first.len();
            let mut offset = yaml_start;

            for line in lines {
                if is_delimiter(line) {
                    let yaml = &content[yaml_start..offset];
                    if yaml.trim().is_empty() {
                        return Err(FrontMatterError::Empty);
                    }
                    return Ok(FrontMatter {
                        yaml,
                        body: &content[offset + line.len()..],
                    });
                }
                offset += line.len();
            }

            Err(FrontMatterError::MissingClosingDelimiter)
        }
        _ => Err(FrontMatterError::MissingOpeningDelimiter),
    }
}

/// Parses a changeset file into its package bumps and summary.
///
/// Package order follows the front matter. The summary is the trimmed body.
///
/// # Errors
///
/// Returns `FormatError` if the front matter is missing or malformed, names
/// a package twice, uses an unknown bump type, or names no package at all.
#[must_use = "parsing result should be handled"]
pub fn parse_changeset(content: &str) -> Result<Changeset, FormatError> {
    if content.len() > MAX_INPUT_SIZE {
        return Err(ValidationError::InputTooLarge {
            max_bytes: MAX_INPUT_SIZE,
        }
        .into());
    }

    let FrontMatter { yaml, body } = split_front_matter(content)?;
    let parsed: ReleasesMap = serde_yml::from_str(yaml)?;

    if parsed.releases.is_empty() {
        return Err(ValidationError::NoReleases.into());
    }
    if parsed.releases.keys().any(|name| name.trim().is_empty()) {
        return Err(ValidationError::BlankPackageName.into());
    }

    let releases = parsed
        .releases
        .into_iter()
        .map(|(name, bump_type)| PackageBump { name, bump_type })
        .collect();

    Ok(Changeset {
        summary: body.trim().to_string(),
        releases,
    })
}
