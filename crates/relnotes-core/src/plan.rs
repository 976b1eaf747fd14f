use semver::Version;
use serde::Serialize;

use crate::types::BumpType;

/// A single pending changeset, identified by its file stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangesetRecord {
    pub id: String,
    pub summary: String,
}

impl ChangesetRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
        }
    }
}

/// A planned version bump for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    pub name: String,
    pub old_version: Version,
    pub new_version: Version,
    pub bump_type: BumpType,
    /// Ids of the changesets that contributed to this bump, in plan order.
    pub changesets: Vec<String>,
}

impl Release {
    #[must_use]
    pub fn has_changesets(&self) -> bool {
        !self.changesets.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReleasePlan {
    pub releases: Vec<Release>,
    pub changesets: Vec<ChangesetRecord>,
    /// Packages referenced by changesets but missing from the project.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unknown_packages: Vec<String>,
}

impl ReleasePlan {
    #[must_use]
    pub fn changeset(&self, id: &str) -> Option<&ChangesetRecord> {
        self.changesets.iter().find(|c| c.id == id)
    }

    /// Resolves a changeset id to its summary. Unknown ids resolve to `None`.
    #[must_use]
    pub fn summary(&self, id: &str) -> Option<&str> {
        self.changeset(id).map(|c| c.summary.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_release(name: &str, changesets: &[&str]) -> Release {
        Release {
            name: name.to_string(),
            old_version: Version::new(0, 1, 0),
            new_version: Version::new(0, 1, 1),
            bump_type: BumpType::Patch,
            changesets: changesets.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn summary_resolves_known_id() {
        let plan = ReleasePlan {
            releases: vec![make_release("crate-a", &["brave-fox"])],
            changesets: vec![ChangesetRecord::new("brave-fox", "Fix bug")],
            unknown_packages: Vec::new(),
        };

        assert_eq!(plan.summary("brave-fox"), Some("Fix bug"));
    }

    #[test]
    fn summary_for_unknown_id_is_none() {
        let plan = ReleasePlan::default();

        assert_eq!(plan.summary("missing"), None);
    }

    #[test]
    fn release_without_changesets_reports_empty() {
        assert!(!make_release("crate-a", &[]).has_changesets());
        assert!(make_release("crate-a", &["x"]).has_changesets());
    }

    #[test]
    fn serializes_versions_as_strings() {
        let plan = ReleasePlan {
            releases: vec![make_release("crate-a", &["x"])],
            changesets: vec![ChangesetRecord::new("x", "Fix")],
            unknown_packages: Vec::new(),
        };

        let json = serde_json::to_string(&plan).expect("serialize plan");

        assert!(json.contains(r#""new_version":"0.1.1""#));
        assert!(json.contains(r#""bump_type":"patch""#));
        assert!(!json.contains("unknown_packages"));
    }
}
