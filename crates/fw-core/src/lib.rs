//! Core types for Floodwatch: suburbs, resource stock, and the world model.
//!
//! This crate owns the in-memory graph of locations that a session plays
//! against. It is independent of the engine: you can construct a [`World`]
//! programmatically or load one from a JSON world file.

/// Compass directions used for connections between locations.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// World-file parsing and validation.
pub mod loader;
/// Locations, evacuation centers, and their records.
pub mod location;
/// Resource bags with the no-zero-entry invariant.
pub mod stock;
/// The world model that owns every location.
pub mod world;

/// Re-export the direction type.
pub use direction::Direction;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export loader entry points.
pub use loader::{load_world, parse_world};
/// Re-export location types.
pub use location::{EvacuationCenter, Location};
/// Re-export the resource bag.
pub use stock::{Stock, transfer};
/// Re-export the world model.
pub use world::World;
