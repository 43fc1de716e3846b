pub mod check;
pub mod list;
pub mod play;
pub mod show;

use std::path::Path;

use fw_core::World;

/// World file used when `--world` is not given.
pub const DEFAULT_WORLD_FILE: &str = "suburbs.json";

/// Load a world file, turning any failure into a printable message.
fn load_world(path: &Path) -> Result<World, String> {
    let world = fw_core::load_world(path).map_err(|e| e.to_string())?;
    tracing::debug!(path = %path.display(), suburbs = world.len(), "world loaded");
    Ok(world)
}
