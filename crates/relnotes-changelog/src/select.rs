use relnotes_core::{Release, ReleasePlan};

use crate::config::FragmentSettings;

/// Picks the releases that belong in the changelog.
///
/// Releases without changesets and releases of excluded packages are
/// dropped. The umbrella release, if any, is moved to the front; every other
/// release keeps its position relative to the rest.
#[must_use]
pub fn select_releases<'a>(plan: &'a ReleasePlan, settings: &FragmentSettings) -> Vec<&'a Release> {
    let (umbrella, rest): (Vec<_>, Vec<_>) = plan
        .releases
        .iter()
        .filter(|release| release.has_changesets())
        .map(|release| (settings.classify(&release.name), release))
        .filter(|(package, _)| !package.excluded)
        .partition(|(package, _)| package.umbrella);

    umbrella
        .into_iter()
        .chain(rest)
        .map(|(_, release)| release)
        .collect()
}

#[cfg(test)]
mod tests {
    use relnotes_core::BumpType;
    use semver::Version;

    use super::*;

    fn release(name: &str, changesets: &[&str]) -> Release {
        Release {
            name: name.to_string(),
            old_version: Version::new(1, 0, 0),
            new_version: Version::new(1, 0, 1),
            bump_type: BumpType::Patch,
            changesets: changesets.iter().map(ToString::to_string).collect(),
        }
    }

    fn plan(releases: Vec<Release>) -> ReleasePlan {
        ReleasePlan {
            releases,
            ..ReleasePlan::default()
        }
    }

    fn names(selected: &[&Release]) -> Vec<String> {
        selected.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn drops_releases_without_changesets() {
        let plan = plan(vec![release("a", &["one"]), release("b", &[])]);

        let selected = select_releases(&plan, &FragmentSettings::default());

        assert_eq!(names(&selected), ["a"]);
    }

    #[test]
    fn drops_excluded_packages_even_with_changesets() {
        let plan = plan(vec![
            release("docs", &["one", "two"]),
            release("core", &["one"]),
        ]);
        let settings = FragmentSettings::default().with_excluded("docs");

        let selected = select_releases(&plan, &settings);

        assert_eq!(names(&selected), ["core"]);
    }

    #[test]
    fn umbrella_moves_first_and_others_keep_order() {
        let plan = plan(vec![
            release("zeta", &["1"]),
            release("alpha", &["2"]),
            release("root", &["3"]),
            release("mid", &["4"]),
        ]);
        let settings = FragmentSettings::default().with_umbrella("root");

        let selected = select_releases(&plan, &settings);

        assert_eq!(names(&selected), ["root", "zeta", "alpha", "mid"]);
    }

    #[test]
    fn umbrella_without_changesets_is_still_dropped() {
        let plan = plan(vec![release("core", &["1"]), release("root", &[])]);
        let settings = FragmentSettings::default().with_umbrella("root");

        let selected = select_releases(&plan, &settings);

        assert_eq!(names(&selected), ["core"]);
    }

    #[test]
    fn empty_plan_selects_nothing() {
        let plan = ReleasePlan::default();

        let selected = select_releases(&plan, &FragmentSettings::default());

        assert!(selected.is_empty());
    }
}
