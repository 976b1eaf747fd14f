mod compose;
mod plan;
mod release;
mod release_planner;
mod write;

pub use compose::{ComposeInput, ComposeOperation, ComposeOutcome};
pub use plan::{PlanOperation, PlanOutput};
pub use release::{ReleaseOperation, ReleaseOutcome};
pub use release_planner::{LoadedChangeset, ReleasePlanner};
pub use write::{WriteOperation, WriteOutput};
