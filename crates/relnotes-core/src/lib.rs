mod plan;
mod types;

pub use plan::{ChangesetRecord, Release, ReleasePlan};
pub use types::{BumpType, ChangePackage, Changeset, PackageBump, PackageInfo};
