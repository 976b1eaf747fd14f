use relnotes_core::{ChangesetRecord, Release};

use crate::config::FragmentSettings;

/// Display-ready text for one release. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRelease {
    display_name: String,
    bullets: Vec<Option<String>>,
}

impl FormattedRelease {
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// One slot per contributing changeset; `None` where no record matched.
    #[must_use]
    pub fn bullets(&self) -> &[Option<String>] {
        &self.bullets
    }
}

/// Formats a release against the full changeset set of its plan.
///
/// Changesets that cannot be resolved keep an empty slot so that the bullet
/// list stays aligned with `release.changesets`.
#[must_use]
pub fn format_release(
    release: &Release,
    changesets: &[ChangesetRecord],
    settings: &FragmentSettings,
) -> FormattedRelease {
    let bullets = release
        .changesets
        .iter()
        .map(|id| {
            let summary = changesets
                .iter()
                .find(|record| &record.id == id)
                .map(|record| record.summary.as_str());
            format_bullet(summary)
        })
        .collect();

    FormattedRelease {
        display_name: display_name(release, settings),
        bullets,
    }
}

/// Turns a changeset summary into a markdown bullet.
///
/// Missing and empty summaries pass through untouched, as do summaries that
/// already start with `-`.
#[must_use]
pub fn format_bullet(summary: Option<&str>) -> Option<String> {
    let summary = summary?;
    if summary.is_empty() || summary.trim().starts_with('-') {
        return Some(summary.to_string());
    }
    Some(format!("- {summary} \n"))
}

fn display_name(release: &Release, settings: &FragmentSettings) -> String {
    let name = if settings.classify(&release.name).umbrella {
        format!("`{}@{}`", release.name, release.new_version)
    } else {
        format!(
            "**{}** `v{}`",
            humanize_package_name(&release.name, settings.package_prefix()),
            release.new_version
        )
    };

    trim_trailing_comma(&name).to_string()
}

fn trim_trailing_comma(s: &str) -> &str {
    s.trim_end().strip_suffix(',').unwrap_or(s)
}

/// Strips `prefix` and converts the rest to title-case words.
///
/// `@scope/package-two` with prefix `@scope/` becomes `Package Two`.
#[must_use]
pub fn humanize_package_name(name: &str, prefix: Option<&str>) -> String {
    let bare = prefix
        .and_then(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name);

    split_words(bare)
        .into_iter()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_words(s: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(pos, c)) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if let Some(begin) = start.take() {
                words.push(&s[begin..pos]);
            }
            continue;
        }

        match start {
            None => start = Some(pos),
            Some(begin) => {
                let prev = chars[i - 1].1;
                let next = chars.get(i + 1).map(|&(_, n)| n);
                if is_word_boundary(prev, c, next) {
                    words.push(&s[begin..pos]);
                    start = Some(pos);
                }
            }
        }
    }

    if let Some(begin) = start {
        words.push(&s[begin..]);
    }

    words
}

// `fooBar`, `v2`, `2d` and `XMLParser` all split.
fn is_word_boundary(prev: char, cur: char, next: Option<char>) -> bool {
    (prev.is_lowercase() && cur.is_uppercase())
        || (prev.is_alphabetic() && cur.is_numeric())
        || (prev.is_numeric() && cur.is_alphabetic())
        || (prev.is_uppercase() && cur.is_uppercase() && next.is_some_and(char::is_lowercase))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use relnotes_core::BumpType;
    use semver::Version;

    use super::*;

    fn release(name: &str, version: Version, changesets: &[&str]) -> Release {
        Release {
            name: name.to_string(),
            old_version: Version::new(0, 0, 1),
            new_version: version,
            bump_type: BumpType::Minor,
            changesets: changesets.iter().map(ToString::to_string).collect(),
        }
    }

    fn scoped_settings() -> FragmentSettings {
        FragmentSettings::default().with_umbrella("@scope/root")
    }

    #[test]
    fn sub_package_display_name() {
        let release = release("@scope/package-two", Version::new(1, 2, 0), &[]);

        let formatted = format_release(&release, &[], &scoped_settings());

        assert_eq!(formatted.display_name(), "**Package Two** `v1.2.0`");
    }

    #[test]
    fn umbrella_display_name_is_bare_tag() {
        let release = release("@scope/root", Version::new(2, 0, 0), &[]);

        let formatted = format_release(&release, &[], &scoped_settings());

        assert_eq!(formatted.display_name(), "`@scope/root@2.0.0`");
    }

    #[test]
    fn plain_summary_becomes_bullet() {
        assert_eq!(
            format_bullet(Some("fix bug")),
            Some("- fix bug \n".to_string())
        );
    }

    #[test]
    fn bulleted_summary_is_unchanged() {
        assert_eq!(
            format_bullet(Some("- already bulleted")),
            Some("- already bulleted".to_string())
        );
        assert_eq!(
            format_bullet(Some("  - indented bullet")),
            Some("  - indented bullet".to_string())
        );
    }

    #[test]
    fn empty_and_missing_summaries_pass_through() {
        assert_eq!(format_bullet(Some("")), Some(String::new()));
        assert_eq!(format_bullet(None), None);
    }

    #[test]
    fn bullets_follow_release_changeset_order() {
        let release = release("crate-a", Version::new(1, 0, 0), &["second", "gone", "first"]);
        let records = vec![
            ChangesetRecord::new("first", "First change"),
            ChangesetRecord::new("second", "- Second change"),
        ];

        let formatted = format_release(&release, &records, &FragmentSettings::default());

        assert_eq!(
            formatted.bullets(),
            [
                Some("- Second change".to_string()),
                None,
                Some("- First change \n".to_string()),
            ]
        );
    }

    #[test]
    fn humanize_strips_prefix() {
        assert_eq!(
            humanize_package_name("scope/package-name", Some("scope/")),
            "Package Name"
        );
        assert_eq!(
            humanize_package_name("relnotes-changelog", Some("relnotes-")),
            "Changelog"
        );
    }

    #[test]
    fn humanize_without_matching_prefix_keeps_whole_name() {
        assert_eq!(
            humanize_package_name("@scope/package-two", None),
            "Scope Package Two"
        );
        assert_eq!(
            humanize_package_name("other_crate", Some("@scope/")),
            "Other Crate"
        );
    }

    #[test]
    fn humanize_splits_case_and_digit_boundaries() {
        assert_eq!(humanize_package_name("httpClient2", None), "Http Client 2");
        assert_eq!(humanize_package_name("XMLParser", None), "XML Parser");
        assert_eq!(humanize_package_name("--foo__bar--", None), "Foo Bar");
    }

    #[test]
    fn trailing_comma_is_trimmed() {
        assert_eq!(trim_trailing_comma("`a@1.0.0`, "), "`a@1.0.0`");
        assert_eq!(trim_trailing_comma("`a@1.0.0` "), "`a@1.0.0` ");
    }
}
