use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::direction::Direction;
use crate::error::{CoreError, CoreResult};
use crate::location::{EvacuationCenter, Location};
use crate::stock::Stock;
use crate::world::World;

/// One location as it appears in a world file.
#[derive(Debug, Deserialize)]
struct LocationRecord {
    name: String,
    #[serde(default)]
    resources: BTreeMap<String, u64>,
    #[serde(default)]
    evacuation_centers: Vec<EvacuationCenter>,
    #[serde(default)]
    evacuation_orders: Vec<String>,
    #[serde(default)]
    connections: BTreeMap<String, String>,
}

impl LocationRecord {
    fn into_location(self) -> CoreResult<Location> {
        let stock: Stock = self.resources.into_iter().collect();
        let mut location = Location::new(self.name).with_stock(stock);

        for center in self.evacuation_centers {
            location = location.with_center(center);
        }
        for order in self.evacuation_orders {
            location = location.with_order(order);
        }
        for (key, target) in self.connections {
            let direction =
                Direction::parse(&key).ok_or_else(|| CoreError::UnknownDirection {
                    location: location.name().to_string(),
                    direction: key.clone(),
                })?;
            location = location.with_connection(direction, target);
        }

        Ok(location)
    }
}

/// Parse a world definition from a JSON string.
///
/// The document must be an array of location records. Only `name` is
/// required; resources, evacuation centers, orders, and connections default
/// to empty. Zero resource counts are dropped and item names are lowercased.
pub fn parse_world(source: &str) -> CoreResult<World> {
    let records: Vec<LocationRecord> = serde_json::from_str(source)?;
    let locations = records
        .into_iter()
        .map(LocationRecord::into_location)
        .collect::<CoreResult<Vec<_>>>()?;
    let world = World::from_locations(locations)?;
    tracing::debug!(
        locations = world.len(),
        connections = world.connection_count(),
        "parsed world definition"
    );
    Ok(world)
}

/// Load and validate a world file from disk.
pub fn load_world(path: &Path) -> CoreResult<World> {
    let source = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CoreError::MissingFile(path.to_path_buf())
        } else {
            CoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    tracing::info!(path = %path.display(), "loading world file");
    parse_world(&source)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUBURBS: &str = r#"[
        {
            "name": "Headquarters",
            "resources": {"blankets": 3, "Water": 10, "rope": 0},
            "evacuation_centers": [
                {"address": "1 Main St", "pet_friendly": true, "catered": false, "overnight": true},
                {"address": "9 Hill Rd"}
            ],
            "evacuation_orders": ["Evacuate low-lying streets"],
            "connections": {"north": "Riverside"}
        },
        {"name": "Riverside", "connections": {"South": "Headquarters"}}
    ]"#;

    #[test]
    fn parse_full_records() {
        let world = parse_world(SUBURBS).unwrap();
        assert_eq!(world.len(), 2);

        let hq = world.lookup("Headquarters").unwrap();
        assert_eq!(hq.resources.count("blankets"), 3);
        assert_eq!(hq.resources.count("water"), 10);
        assert_eq!(hq.resources.len(), 2);
        assert_eq!(hq.evacuation_centers().len(), 2);
        assert!(hq.evacuation_centers()[0].pet_friendly);
        assert!(!hq.evacuation_centers()[1].overnight);
        assert_eq!(hq.evacuation_orders().len(), 1);
        assert_eq!(hq.exit(Direction::North), Some("Riverside"));

        let riverside = world.lookup("Riverside").unwrap();
        assert!(riverside.resources.is_empty());
        assert_eq!(riverside.exit(Direction::South), Some("Headquarters"));
    }

    #[test]
    fn empty_array_is_empty_world() {
        let world = parse_world("[]").unwrap();
        assert!(world.is_empty());
    }

    #[test]
    fn not_an_array_is_malformed() {
        assert!(matches!(
            parse_world(r#"{"name": "Headquarters"}"#),
            Err(CoreError::Malformed(_))
        ));
        assert!(matches!(parse_world("not json"), Err(CoreError::Malformed(_))));
    }

    #[test]
    fn missing_name_is_malformed() {
        assert!(matches!(
            parse_world(r#"[{"resources": {}}]"#),
            Err(CoreError::Malformed(_))
        ));
    }

    #[test]
    fn negative_count_is_malformed() {
        assert!(matches!(
            parse_world(r#"[{"name": "A", "resources": {"water": -1}}]"#),
            Err(CoreError::Malformed(_))
        ));
    }

    #[test]
    fn unknown_direction_rejected() {
        let err = parse_world(r#"[{"name": "A", "connections": {"up": "A"}}]"#).unwrap_err();
        assert!(matches!(err, CoreError::UnknownDirection { ref direction, .. } if direction == "up"));
    }

    #[test]
    fn dangling_connection_rejected() {
        let err = parse_world(r#"[{"name": "A", "connections": {"west": "B"}}]"#).unwrap_err();
        assert!(matches!(err, CoreError::DanglingConnection { .. }));
    }

    #[test]
    fn missing_file_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("suburbs.json");
        let err = load_world(&path).unwrap_err();
        assert!(matches!(err, CoreError::MissingFile(ref p) if p == &path));
        assert!(err.to_string().contains("missing world file"));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("suburbs.json");
        std::fs::write(&path, SUBURBS).unwrap();
        let world = load_world(&path).unwrap();
        assert!(world.contains("Riverside"));
    }
}
