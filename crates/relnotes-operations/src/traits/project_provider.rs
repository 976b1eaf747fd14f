use std::path::Path;

use relnotes_project::{CargoProject, RelnotesConfig};

use crate::Result;

pub trait ProjectProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if no project can be found from the given path.
    fn discover_project(&self, start_path: &Path) -> Result<CargoProject>;

    /// # Errors
    ///
    /// Returns an error if the relnotes configuration cannot be loaded.
    fn load_config(&self, project: &CargoProject) -> Result<RelnotesConfig>;
}
