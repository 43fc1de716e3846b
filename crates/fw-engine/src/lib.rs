//! Session and command engine for Floodwatch.
//!
//! Holds one player's session against a [`fw_core::World`]: login and role
//! resolution, command parsing, and the handlers that move the player and
//! transfer resources between a suburb and the player's inventory.

pub mod command;
pub mod config;
pub mod error;
pub mod outcome;
pub mod player;
pub mod session;

pub use command::{Command, TransferAction, parse_command, parse_quantity};
pub use config::{ADMIN_USERNAME, EngineConfig};
pub use error::{EngineError, EngineResult};
pub use outcome::{CenterView, InventoryView, LocationView, Outcome};
pub use player::{Player, Role};
pub use session::{Session, SessionState};
