//! Structured results of processing one command.

use std::fmt;

use fw_core::{Direction, Location, Stock};

use crate::command::{TransferAction, VERBS};

/// An evacuation center as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenterView {
    /// Street address.
    pub address: String,
    /// Feature labels in fixed order.
    pub features: Vec<&'static str>,
}

/// Snapshot of a location for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationView {
    /// Location name.
    pub name: String,
    /// `(item, count)` pairs sorted by item.
    pub resources: Vec<(String, u64)>,
    /// Evacuation centers in load order.
    pub centers: Vec<CenterView>,
    /// Evacuation orders in load order.
    pub orders: Vec<String>,
    /// Available exits in north, south, east, west order.
    pub directions: Vec<Direction>,
}

impl LocationView {
    /// Capture the current state of `location`.
    pub fn of(location: &Location) -> Self {
        Self {
            name: location.name().to_string(),
            resources: stock_pairs(&location.resources),
            centers: location
                .evacuation_centers()
                .iter()
                .map(|c| CenterView {
                    address: c.address.clone(),
                    features: c.features(),
                })
                .collect(),
            orders: location.evacuation_orders().to_vec(),
            directions: location.exits().map(|(d, _)| d).collect(),
        }
    }
}

impl fmt::Display for LocationView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Location: {}", self.name)?;

        if self.resources.is_empty() {
            writeln!(f, "Resources available: None")?;
        } else {
            writeln!(f, "Resources available: {}", join_pairs(&self.resources))?;
        }

        writeln!(f, "Evacuation Centers:")?;
        if self.centers.is_empty() {
            writeln!(f, "None")?;
        }
        for center in &self.centers {
            if center.features.is_empty() {
                writeln!(f, "- {}", center.address)?;
            } else {
                writeln!(f, "- {}: {}", center.address, center.features.join(", "))?;
            }
        }

        if self.orders.is_empty() {
            writeln!(f, "Active evacuation orders: None")?;
        } else {
            writeln!(f, "Active evacuation orders: {}", self.orders.join("; "))?;
        }

        if self.directions.is_empty() {
            write!(f, "Available directions: None")
        } else {
            let names: Vec<_> = self.directions.iter().map(Direction::name).collect();
            write!(f, "Available directions: {}", names.join(", "))
        }
    }
}

/// Snapshot of the player's inventory for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView {
    /// `(item, count)` pairs sorted by item.
    pub items: Vec<(String, u64)>,
}

impl InventoryView {
    /// Capture the current contents of `inventory`.
    pub fn of(inventory: &Stock) -> Self {
        Self {
            items: stock_pairs(inventory),
        }
    }
}

impl fmt::Display for InventoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            write!(f, "Current inventory: Empty")
        } else {
            write!(f, "Current inventory: {}", join_pairs(&self.items))
        }
    }
}

/// The result of one command. Every recoverable problem is a variant here;
/// the session always continues unless the outcome is [`Outcome::Exit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input.
    Nothing,
    /// The player moved.
    Moved {
        /// Name of the new location.
        to: String,
    },
    /// `go` without a compass direction.
    InvalidDirection,
    /// No exit that way.
    CannotMove,
    /// Units moved from the location into the inventory.
    Took {
        /// Item name.
        item: String,
        /// Units moved.
        quantity: u64,
    },
    /// Units moved from the inventory to the location.
    Dropped {
        /// Item name.
        item: String,
        /// Units moved.
        quantity: u64,
    },
    /// A guest attempted a transfer.
    AdminOnly {
        /// The attempted action.
        action: TransferAction,
    },
    /// `take` or `drop` without an item.
    MissingItem {
        /// The attempted action.
        action: TransferAction,
    },
    /// The location holds fewer units than requested.
    NotEnoughResources,
    /// The inventory holds fewer units than requested.
    NotEnoughInventory,
    /// The receiving side cannot hold that many more units.
    CapacityExceeded {
        /// Item name.
        item: String,
    },
    /// Description of the current location.
    Location(LocationView),
    /// Contents of the inventory.
    Inventory(InventoryView),
    /// Unrecognized verb.
    InvalidCommand,
    /// The session ended.
    Exit,
}

impl Outcome {
    /// Returns true if this outcome ends the session.
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nothing => Ok(()),
            Self::Moved { to } => write!(f, "Moved to {to}"),
            Self::InvalidDirection => write!(f, "Specify valid direction (north/south/east/west)"),
            Self::CannotMove => write!(f, "Cannot move in that direction"),
            Self::Took { item, quantity } => write!(f, "Took {quantity} {item}(s)"),
            Self::Dropped { item, quantity } => write!(f, "Dropped {quantity} {item}(s)"),
            Self::AdminOnly { action } => write!(f, "Only admins can {action} resources"),
            Self::MissingItem { action } => write!(f, "Specify item to {action}"),
            Self::NotEnoughResources => write!(f, "Not enough resources available"),
            Self::NotEnoughInventory => write!(f, "Not enough in inventory"),
            Self::CapacityExceeded { item } => write!(f, "Cannot hold any more {item}"),
            Self::Location(view) => write!(f, "{view}"),
            Self::Inventory(view) => write!(f, "{view}"),
            Self::InvalidCommand => write!(
                f,
                "Invalid command. Available commands: {}",
                VERBS.join(", ")
            ),
            Self::Exit => write!(f, "Exiting system..."),
        }
    }
}

fn stock_pairs(stock: &Stock) -> Vec<(String, u64)> {
    stock.iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn join_pairs(pairs: &[(String, u64)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join(", ")
}
