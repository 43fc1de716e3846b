use std::path::PathBuf;

use crate::direction::Direction;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while loading or mutating a world.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The world file does not exist.
    #[error("missing world file: {}", .0.display())]
    MissingFile(PathBuf),

    /// The world file exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The world definition is not a valid collection of location records.
    #[error("invalid world definition: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two locations share the same name.
    #[error("duplicate location name: \"{0}\"")]
    DuplicateName(String),

    /// A connection points at a location that does not exist.
    #[error("location \"{from}\" connects {direction} to unknown location \"{to}\"")]
    DanglingConnection {
        /// Location holding the connection.
        from: String,
        /// Direction of the connection.
        direction: Direction,
        /// Unresolved target name.
        to: String,
    },

    /// A connection key is not one of north, south, east, or west.
    #[error("location \"{location}\" has unknown direction \"{direction}\"")]
    UnknownDirection {
        /// Location holding the connection.
        location: String,
        /// The offending key.
        direction: String,
    },

    /// No location with this name exists.
    #[error("location not found: \"{0}\"")]
    LocationNotFound(String),

    /// A withdrawal asked for more than the bag holds.
    #[error("insufficient stock of {item}: have {available}, need {requested}")]
    InsufficientStock {
        /// Item name.
        item: String,
        /// Units currently held.
        available: u64,
        /// Units requested.
        requested: u64,
    },

    /// A deposit would push a count past `u64::MAX`.
    #[error("stock of {0} would overflow")]
    StockOverflow(String),
}
