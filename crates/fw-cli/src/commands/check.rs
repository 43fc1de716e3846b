use std::collections::BTreeMap;
use std::path::Path;

pub fn run(path: &Path) -> Result<(), String> {
    let world = super::load_world(path)?;

    println!("  All checks passed for '{}'.", path.display());
    println!(
        "  {} suburbs, {} connections",
        world.len(),
        world.connection_count()
    );

    let units = world
        .all()
        .fold(0u64, |acc, l| acc.saturating_add(l.resources.total()));
    println!("  {units} resource units stored");

    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for location in world.all() {
        for (item, count) in location.resources.iter() {
            let entry = totals.entry(item).or_insert(0);
            *entry = entry.saturating_add(count);
        }
    }
    for (item, total) in totals {
        println!("    {total:>6} {item}");
    }

    if world.is_empty() {
        println!("  warning: no suburbs defined, sessions cannot start");
    }

    Ok(())
}
