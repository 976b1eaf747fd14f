use indexmap::IndexMap;
use relnotes_core::{BumpType, Changeset, ChangesetRecord, PackageInfo, Release, ReleasePlan};
use relnotes_version::{bump_version, max_bump_type};

/// A parsed changeset paired with its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedChangeset {
    pub id: String,
    pub changeset: Changeset,
}

impl LoadedChangeset {
    #[must_use]
    pub fn new(id: impl Into<String>, changeset: Changeset) -> Self {
        Self {
            id: id.into(),
            changeset,
        }
    }
}

#[derive(Debug, Default)]
struct PackageBumps {
    bumps: Vec<BumpType>,
    changesets: Vec<String>,
}

/// Builds a release plan by aggregating changesets per package.
pub struct ReleasePlanner;

impl ReleasePlanner {
    /// Releases appear in the order their package is first mentioned.
    #[must_use]
    pub fn plan_releases(changesets: &[LoadedChangeset], packages: &[PackageInfo]) -> ReleasePlan {
        let mut releases = Vec::new();
        let mut unknown_packages = Vec::new();

        for (name, aggregated) in Self::aggregate(changesets) {
            let Some(bump_type) = max_bump_type(&aggregated.bumps) else {
                continue;
            };

            match packages.iter().find(|p| p.name == name) {
                Some(pkg) => releases.push(Release {
                    new_version: bump_version(&pkg.version, bump_type),
                    old_version: pkg.version.clone(),
                    name,
                    bump_type,
                    changesets: aggregated.changesets,
                }),
                None => unknown_packages.push(name),
            }
        }

        ReleasePlan {
            releases,
            changesets: changesets
                .iter()
                .map(|loaded| ChangesetRecord::new(&loaded.id, &loaded.changeset.summary))
                .collect(),
            unknown_packages,
        }
    }

    fn aggregate(changesets: &[LoadedChangeset]) -> IndexMap<String, PackageBumps> {
        let mut by_package: IndexMap<String, PackageBumps> = IndexMap::new();

        for loaded in changesets {
            for release in &loaded.changeset.releases {
                let entry = by_package.entry(release.name.clone()).or_default();
                entry.bumps.push(release.bump_type);
                entry.changesets.push(loaded.id.clone());
            }
        }

        by_package
    }
}
