use std::path::Path;

use colored::Colorize;
use fw_engine::LocationView;

pub fn run(path: &Path, name: &str) -> Result<(), String> {
    let world = super::load_world(path)?;

    let location = world.lookup(name).map_err(|e| e.to_string())?;
    let view = LocationView::of(location);

    println!("  {}", view.name.bold());
    for line in view.to_string().lines().skip(1) {
        println!("  {line}");
    }

    Ok(())
}
