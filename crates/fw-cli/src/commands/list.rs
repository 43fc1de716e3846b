use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(path: &Path) -> Result<(), String> {
    let world = super::load_world(path)?;

    if world.is_empty() {
        println!("  No suburbs found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Exits", "Resources", "Centers", "Orders"]);

    for location in world.all() {
        let exits: Vec<_> = location
            .exits()
            .map(|(direction, target)| format!("{direction}: {target}"))
            .collect();
        let exits = if exits.is_empty() {
            "—".to_string()
        } else {
            exits.join(", ")
        };
        let resources = if location.resources.is_empty() {
            "—".to_string()
        } else {
            location.resources.to_string()
        };

        table.add_row(vec![
            location.name().to_string(),
            exits,
            resources,
            location.evacuation_centers().len().to_string(),
            location.evacuation_orders().len().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} suburbs", world.len());

    Ok(())
}
