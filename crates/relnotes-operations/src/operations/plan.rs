use std::path::{Path, PathBuf};

use relnotes_changelog::select_releases;
use relnotes_core::{Release, ReleasePlan};
use relnotes_project::{ConfigOverrides, RelnotesConfig};
use tracing::{debug, warn};

use super::release_planner::{LoadedChangeset, ReleasePlanner};
use crate::Result;
use crate::traits::{ChangesetReader, ProjectProvider};

#[derive(Debug, Clone)]
pub struct PlanOutput {
    pub project_root: PathBuf,
    pub config: RelnotesConfig,
    pub plan: ReleasePlan,
}

impl PlanOutput {
    /// Releases that belong in the changelog, umbrella first.
    #[must_use]
    pub fn selected(&self) -> Vec<&Release> {
        select_releases(&self.plan, self.config.fragment_settings())
    }
}

pub struct PlanOperation<P, R> {
    project_provider: P,
    changeset_reader: R,
}

impl<P, R> PlanOperation<P, R>
where
    P: ProjectProvider,
    R: ChangesetReader,
{
    pub fn new(project_provider: P, changeset_reader: R) -> Self {
        Self {
            project_provider,
            changeset_reader,
        }
    }

    /// Computes the release plan without touching any file.
    ///
    /// # Errors
    ///
    /// Returns an error if the project cannot be discovered, its configuration
    /// is invalid, or a changeset file cannot be read or parsed.
    pub fn execute(&self, start_path: &Path, overrides: &ConfigOverrides) -> Result<PlanOutput> {
        let project = self.project_provider.discover_project(start_path)?;
        let config = self
            .project_provider
            .load_config(&project)?
            .with_overrides(overrides.clone());

        let changeset_dir = config.changeset_dir_in(&project.root);
        let mut loaded = Vec::new();
        for path in self.changeset_reader.list_changesets(&changeset_dir)? {
            let changeset = self.changeset_reader.read_changeset(&path)?;
            loaded.push(LoadedChangeset::new(changeset_id(&path), changeset));
        }
        debug!(count = loaded.len(), dir = %changeset_dir.display(), "loaded changesets");

        let plan = ReleasePlanner::plan_releases(&loaded, &project.packages);
        for name in &plan.unknown_packages {
            warn!(package = %name, "changeset references a package outside the project");
        }

        let settings = config.fragment_settings();
        for name in settings.umbrella.iter().chain(&settings.excluded) {
            if project.package(name).is_none() {
                warn!(package = %name, "configured package is not part of the project");
            }
        }

        Ok(PlanOutput {
            project_root: project.root,
            config,
            plan,
        })
    }
}

fn changeset_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use relnotes_core::BumpType;

    use super::*;
    use crate::mocks::{MockChangesetReader, MockProjectProvider, make_changeset};

    #[test]
    fn empty_when_no_changesets() {
        let operation = PlanOperation::new(
            MockProjectProvider::single_package("my-crate", "1.0.0"),
            MockChangesetReader::new(),
        );

        let output = operation
            .execute(Path::new("/any"), &ConfigOverrides::default())
            .expect("plan should succeed");

        assert!(output.plan.is_empty());
        assert!(output.selected().is_empty());
    }

    #[test]
    fn changeset_ids_are_file_stems() {
        let reader = MockChangesetReader::new().with_changeset(
            PathBuf::from("/mock/project/.changeset/brave-fox.md"),
            make_changeset("my-crate", BumpType::Minor, "Add feature"),
        );
        let operation =
            PlanOperation::new(MockProjectProvider::single_package("my-crate", "1.0.0"), reader);

        let output = operation
            .execute(Path::new("/any"), &ConfigOverrides::default())
            .expect("plan should succeed");

        assert_eq!(output.plan.releases[0].changesets, ["brave-fox"]);
        assert_eq!(output.plan.summary("brave-fox"), Some("Add feature"));
        assert_eq!(output.plan.releases[0].new_version.to_string(), "1.1.0");
    }

    #[test]
    fn single_package_is_umbrella_by_default() {
        let reader = MockChangesetReader::new().with_changeset(
            PathBuf::from("/mock/project/.changeset/a.md"),
            make_changeset("my-crate", BumpType::Patch, "Fix"),
        );
        let operation =
            PlanOperation::new(MockProjectProvider::single_package("my-crate", "1.0.0"), reader);

        let output = operation
            .execute(Path::new("/any"), &ConfigOverrides::default())
            .expect("plan should succeed");

        assert!(output.config.fragment_settings().is_umbrella("my-crate"));
    }

    #[test]
    fn overrides_drive_selection() {
        let reader = MockChangesetReader::new().with_changesets(vec![
            (
                PathBuf::from("/mock/workspace/.changeset/a.md"),
                make_changeset("crate-a", BumpType::Patch, "A"),
            ),
            (
                PathBuf::from("/mock/workspace/.changeset/b.md"),
                make_changeset("crate-b", BumpType::Patch, "B"),
            ),
            (
                PathBuf::from("/mock/workspace/.changeset/c.md"),
                make_changeset("crate-c", BumpType::Patch, "C"),
            ),
        ]);
        let provider = MockProjectProvider::workspace(vec![
            ("crate-a", "1.0.0"),
            ("crate-b", "1.0.0"),
            ("crate-c", "1.0.0"),
        ]);
        let overrides = ConfigOverrides {
            umbrella: Some("crate-c".to_string()),
            excluded: vec!["crate-a".to_string()],
            ..ConfigOverrides::default()
        };

        let output = PlanOperation::new(provider, reader)
            .execute(Path::new("/any"), &overrides)
            .expect("plan should succeed");

        let names: Vec<_> = output.selected().into_iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["crate-c", "crate-b"]);
        assert_eq!(output.plan.releases.len(), 3);
    }

    #[test]
    fn unknown_packages_do_not_fail_planning() {
        let reader = MockChangesetReader::new().with_changeset(
            PathBuf::from("/mock/project/.changeset/x.md"),
            make_changeset("ghost", BumpType::Major, "Boo"),
        );
        let operation =
            PlanOperation::new(MockProjectProvider::single_package("my-crate", "1.0.0"), reader);

        let output = operation
            .execute(Path::new("/any"), &ConfigOverrides::default())
            .expect("plan should succeed");

        assert!(output.plan.releases.is_empty());
        assert_eq!(output.plan.unknown_packages, ["ghost"]);
    }

    #[test]
    fn reads_from_configured_changeset_dir() {
        let reader = Arc::new(MockChangesetReader::new());
        let operation = PlanOperation::new(
            MockProjectProvider::single_package("my-crate", "1.0.0"),
            Arc::clone(&reader),
        );

        operation
            .execute(Path::new("/any"), &ConfigOverrides::default())
            .expect("plan should succeed");

        assert_eq!(
            reader.listed_dirs(),
            [PathBuf::from("/mock/project/.changeset")]
        );
    }
}
