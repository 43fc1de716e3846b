use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::stock::Stock;

/// An evacuation center listed for a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvacuationCenter {
    /// Street address of the center.
    pub address: String,
    /// Pets are allowed.
    #[serde(default)]
    pub pet_friendly: bool,
    /// Meals are provided.
    #[serde(default)]
    pub catered: bool,
    /// Overnight stays are possible.
    #[serde(default)]
    pub overnight: bool,
}

impl EvacuationCenter {
    /// Create a center with no features.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            pet_friendly: false,
            catered: false,
            overnight: false,
        }
    }

    /// Labels for the features this center offers, in fixed order:
    /// pets, catering, overnight.
    pub fn features(&self) -> Vec<&'static str> {
        [
            (self.pet_friendly, "Pets allowed"),
            (self.catered, "Catered"),
            (self.overnight, "Overnight stay"),
        ]
        .into_iter()
        .filter_map(|(on, label)| on.then_some(label))
        .collect()
    }
}

/// A named place in the world ("suburb").
#[derive(Debug, Clone)]
pub struct Location {
    name: String,
    /// Resources currently stored here. Mutated by take/drop.
    pub resources: Stock,
    evacuation_centers: Vec<EvacuationCenter>,
    evacuation_orders: Vec<String>,
    connections: BTreeMap<Direction, String>,
}

impl Location {
    /// Create an empty location.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resources: Stock::new(),
            evacuation_centers: Vec::new(),
            evacuation_orders: Vec::new(),
            connections: BTreeMap::new(),
        }
    }

    /// Add `count` units of a resource.
    pub fn with_resource(mut self, item: &str, count: u64) -> Self {
        self.resources = self
            .resources
            .iter()
            .chain(std::iter::once((item, count)))
            .collect();
        self
    }

    /// Replace the resource stock.
    pub fn with_stock(mut self, stock: Stock) -> Self {
        self.resources = stock;
        self
    }

    /// Append an evacuation center.
    pub fn with_center(mut self, center: EvacuationCenter) -> Self {
        self.evacuation_centers.push(center);
        self
    }

    /// Append an evacuation order.
    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.evacuation_orders.push(order.into());
        self
    }

    /// Add an exit towards `target`.
    pub fn with_connection(mut self, direction: Direction, target: impl Into<String>) -> Self {
        self.connections.insert(direction, target.into());
        self
    }

    /// The location's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evacuation centers in load order.
    pub fn evacuation_centers(&self) -> &[EvacuationCenter] {
        &self.evacuation_centers
    }

    /// Active evacuation orders in load order.
    pub fn evacuation_orders(&self) -> &[String] {
        &self.evacuation_orders
    }

    /// Name of the location reached by going `direction`, if any.
    pub fn exit(&self, direction: Direction) -> Option<&str> {
        self.connections.get(&direction).map(String::as_str)
    }

    /// All exits in north, south, east, west order.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, &str)> {
        self.connections.iter().map(|(d, t)| (*d, t.as_str()))
    }
}
