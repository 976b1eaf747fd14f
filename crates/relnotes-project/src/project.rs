use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use relnotes_core::PackageInfo;
use semver::Version;

use crate::error::ProjectError;
use crate::manifest::{CargoManifest, Package, VersionField, read_manifest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    VirtualWorkspace,
    WorkspaceWithRoot,
    SinglePackage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoProject {
    pub root: PathBuf,
    pub kind: ProjectKind,
    /// Root package first (if any), then members in path order.
    pub packages: Vec<PackageInfo>,
}

impl CargoProject {
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("Cargo.toml")
    }

    #[must_use]
    pub fn package(&self, name: &str) -> Option<&PackageInfo> {
        self.packages.iter().find(|p| p.name == name)
    }

    /// The package whose manifest is the project root manifest.
    #[must_use]
    pub fn root_package(&self) -> Option<&PackageInfo> {
        match self.kind {
            ProjectKind::VirtualWorkspace => None,
            ProjectKind::WorkspaceWithRoot | ProjectKind::SinglePackage => {
                self.packages.iter().find(|p| p.path == self.root)
            }
        }
    }
}

/// Walks up from `start_dir` to the nearest workspace manifest, falling back
/// to the closest package manifest.
///
/// # Errors
///
/// Returns `ProjectError` if no project root can be found or if manifest parsing fails.
pub fn discover_project(start_dir: &Path) -> Result<CargoProject, ProjectError> {
    let start_dir = start_dir
        .canonicalize()
        .map_err(|source| ProjectError::ManifestRead {
            path: start_dir.to_path_buf(),
            source,
        })?;

    let (root, manifest) = find_project_root(&start_dir)?;
    let kind = project_kind(&manifest);
    let packages = collect_packages(&root, &manifest, kind)?;

    Ok(CargoProject {
        root,
        kind,
        packages,
    })
}

fn find_project_root(start_dir: &Path) -> Result<(PathBuf, CargoManifest), ProjectError> {
    let mut nearest_package: Option<(PathBuf, CargoManifest)> = None;

    for dir in start_dir.ancestors() {
        let manifest_path = dir.join("Cargo.toml");
        if !manifest_path.is_file() {
            continue;
        }

        let manifest = read_manifest(&manifest_path)?;
        if manifest.workspace.is_some() {
            return Ok((dir.to_path_buf(), manifest));
        }
        if manifest.package.is_some() && nearest_package.is_none() {
            nearest_package = Some((dir.to_path_buf(), manifest));
        }
    }

    nearest_package.ok_or_else(|| ProjectError::NotFound {
        start_dir: start_dir.to_path_buf(),
    })
}

fn project_kind(manifest: &CargoManifest) -> ProjectKind {
    match (&manifest.workspace, &manifest.package) {
        (Some(_), Some(_)) => ProjectKind::WorkspaceWithRoot,
        (None, Some(_)) => ProjectKind::SinglePackage,
        (Some(_) | None, None) => ProjectKind::VirtualWorkspace,
    }
}

fn collect_packages(
    root: &Path,
    manifest: &CargoManifest,
    kind: ProjectKind,
) -> Result<Vec<PackageInfo>, ProjectError> {
    let workspace_version = manifest
        .workspace
        .as_ref()
        .and_then(|ws| ws.package.as_ref())
        .and_then(|pkg| pkg.version.as_deref());

    let mut packages = Vec::new();

    if kind != ProjectKind::VirtualWorkspace {
        if let Some(pkg) = &manifest.package {
            packages.push(package_info(pkg, workspace_version, root)?);
        }
    }

    let Some(workspace) = &manifest.workspace else {
        return Ok(packages);
    };

    let excludes = compile_globs(workspace.exclude.as_deref().unwrap_or(&[]))?;

    for pattern in workspace.members.as_deref().unwrap_or(&[]) {
        let matcher = compile_glob(pattern)?;
        let mut member_dirs = Vec::new();
        collect_matching_dirs(root, root, &matcher, &excludes, &mut member_dirs)?;
        member_dirs.sort();

        for member_dir in member_dirs {
            let member_manifest_path = member_dir.join("Cargo.toml");
            if !member_manifest_path.is_file() {
                continue;
            }

            let member_manifest = read_manifest(&member_manifest_path)?;
            if let Some(pkg) = &member_manifest.package {
                if packages.iter().any(|p: &PackageInfo| p.path == member_dir) {
                    continue;
                }
                packages.push(package_info(pkg, workspace_version, &member_dir)?);
            }
        }
    }

    Ok(packages)
}

fn package_info(
    pkg: &Package,
    workspace_version: Option<&str>,
    dir: &Path,
) -> Result<PackageInfo, ProjectError> {
    let version = resolve_version(pkg.version.as_ref(), workspace_version, &dir.join("Cargo.toml"))?;
    Ok(PackageInfo {
        name: pkg.name.clone(),
        version,
        path: dir.to_path_buf(),
    })
}

fn resolve_version(
    version_field: Option<&VersionField>,
    workspace_version: Option<&str>,
    manifest_path: &Path,
) -> Result<Version, ProjectError> {
    let version_str = match version_field {
        Some(VersionField::Literal(v)) => v.as_str(),
        Some(VersionField::Inherited(inherited)) if inherited.workspace => workspace_version
            .ok_or_else(|| ProjectError::MissingField {
                path: manifest_path.to_path_buf(),
                field: "workspace.package.version",
            })?,
        Some(VersionField::Inherited(_)) | None => {
            return Err(ProjectError::MissingField {
                path: manifest_path.to_path_buf(),
                field: "package.version",
            });
        }
    };

    version_str
        .parse()
        .map_err(|source| ProjectError::InvalidVersion {
            path: manifest_path.to_path_buf(),
            version: version_str.to_string(),
            source,
        })
}

fn compile_glob(pattern: &str) -> Result<GlobMatcher, ProjectError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| ProjectError::GlobPattern {
            pattern: pattern.to_string(),
            source,
        })
}

fn compile_globs(patterns: &[String]) -> Result<Vec<GlobMatcher>, ProjectError> {
    patterns.iter().map(|p| compile_glob(p)).collect()
}

fn collect_matching_dirs(
    base: &Path,
    current: &Path,
    glob: &GlobMatcher,
    excludes: &[GlobMatcher],
    results: &mut Vec<PathBuf>,
) -> Result<(), ProjectError> {
    for entry in std::fs::read_dir(current)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }

        let relative = path.strip_prefix(base).unwrap_or(&path);
        if relative.starts_with("target") || excludes.iter().any(|ex| ex.is_match(relative)) {
            continue;
        }

        if glob.is_match(relative) {
            results.push(path.clone());
        }

        collect_matching_dirs(base, &path, glob, excludes, results)?;
    }

    Ok(())
}
