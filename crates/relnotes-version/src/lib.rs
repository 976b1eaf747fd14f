use relnotes_core::BumpType;
use semver::{BuildMetadata, Prerelease, Version};

/// Applies a bump to `version`, dropping any pre-release and build metadata.
///
/// A pre-release of the target version is released as is:
/// `1.0.0-beta.2` patch-bumps to `1.0.0`, `1.1.0-rc.1` minor-bumps to `1.1.0`.
#[must_use]
pub fn bump_version(version: &Version, bump_type: BumpType) -> Version {
    let is_prerelease = !version.pre.is_empty();
    let mut next = Version {
        pre: Prerelease::EMPTY,
        build: BuildMetadata::EMPTY,
        ..version.clone()
    };

    match bump_type {
        BumpType::Major => {
            if !(is_prerelease && next.minor == 0 && next.patch == 0) {
                next.major += 1;
            }
            next.minor = 0;
            next.patch = 0;
        }
        BumpType::Minor => {
            if !(is_prerelease && next.patch == 0) {
                next.minor += 1;
            }
            next.patch = 0;
        }
        BumpType::Patch => {
            if !is_prerelease {
                next.patch += 1;
            }
        }
    }

    next
}

/// Returns the most significant bump, or `None` for an empty slice.
#[must_use]
pub fn max_bump_type(bumps: &[BumpType]) -> Option<BumpType> {
    bumps.iter().copied().max()
}
