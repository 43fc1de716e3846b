use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::location::Location;

/// The world model. Owns every location and indexes them by exact name.
#[derive(Debug, Clone, Default)]
pub struct World {
    locations: Vec<Location>,
    by_name: HashMap<String, usize>,
}

impl World {
    /// Build a world from locations in load order.
    ///
    /// Fails if two locations share a name or a connection targets a name
    /// that is not in the collection.
    pub fn from_locations(locations: Vec<Location>) -> CoreResult<Self> {
        let mut by_name = HashMap::with_capacity(locations.len());
        for (idx, loc) in locations.iter().enumerate() {
            if by_name.insert(loc.name().to_string(), idx).is_some() {
                return Err(CoreError::DuplicateName(loc.name().to_string()));
            }
        }

        for loc in &locations {
            for (direction, target) in loc.exits() {
                if !by_name.contains_key(target) {
                    return Err(CoreError::DanglingConnection {
                        from: loc.name().to_string(),
                        direction,
                        to: target.to_string(),
                    });
                }
            }
        }

        Ok(Self { locations, by_name })
    }

    /// Look up a location by exact name.
    pub fn lookup(&self, name: &str) -> CoreResult<&Location> {
        self.by_name
            .get(name)
            .and_then(|idx| self.locations.get(*idx))
            .ok_or_else(|| CoreError::LocationNotFound(name.to_string()))
    }

    /// Look up a location by exact name for mutation.
    pub fn lookup_mut(&mut self, name: &str) -> CoreResult<&mut Location> {
        match self.by_name.get(name) {
            Some(idx) => self
                .locations
                .get_mut(*idx)
                .ok_or_else(|| CoreError::LocationNotFound(name.to_string())),
            None => Err(CoreError::LocationNotFound(name.to_string())),
        }
    }

    /// Returns true if a location with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All locations in load order.
    pub fn all(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// The first location in load order.
    pub fn first(&self) -> Option<&Location> {
        self.locations.first()
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if the world has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Number of directed connections across all locations.
    pub fn connection_count(&self) -> usize {
        self.locations.iter().map(|l| l.exits().count()).sum()
    }

    /// Total units of `item` stored across all locations.
    pub fn total_of(&self, item: &str) -> u64 {
        self.locations
            .iter()
            .fold(0, |acc, l| acc.saturating_add(l.resources.count(item)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    fn two_suburbs() -> World {
        World::from_locations(vec![
            Location::new("Headquarters")
                .with_resource("blankets", 3)
                .with_connection(Direction::North, "Riverside"),
            Location::new("Riverside").with_connection(Direction::South, "Headquarters"),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_by_exact_name() {
        let world = two_suburbs();
        assert_eq!(world.lookup("Riverside").unwrap().name(), "Riverside");
        assert!(matches!(
            world.lookup("riverside"),
            Err(CoreError::LocationNotFound(_))
        ));
    }

    #[test]
    fn all_in_load_order() {
        let world = two_suburbs();
        let names: Vec<_> = world.all().map(|l| l.name()).collect();
        assert_eq!(names, vec!["Headquarters", "Riverside"]);
        assert_eq!(world.first().map(|l| l.name()), Some("Headquarters"));
        assert_eq!(world.len(), 2);
        assert_eq!(world.connection_count(), 2);
    }

    #[test]
    fn empty_world_is_valid() {
        let world = World::from_locations(Vec::new()).unwrap();
        assert!(world.is_empty());
        assert!(world.first().is_none());
    }

    #[test]
    fn duplicate_names_rejected() {
        let err = World::from_locations(vec![Location::new("A"), Location::new("A")]).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateName(name) if name == "A"));
    }

    #[test]
    fn dangling_connection_rejected() {
        let err = World::from_locations(vec![
            Location::new("A").with_connection(Direction::East, "Nowhere"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::DanglingConnection { direction: Direction::East, ref to, .. } if to == "Nowhere"
        ));
    }

    #[test]
    fn lookup_mut_edits_in_place() {
        let mut world = two_suburbs();
        world
            .lookup_mut("Headquarters")
            .unwrap()
            .resources
            .withdraw("blankets", 1)
            .unwrap();
        assert_eq!(world.total_of("blankets"), 2);
    }
}
