//! Error types for the session engine.

use fw_core::{CoreError, Direction};
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Fatal errors. Recoverable command problems are reported as
/// [`crate::Outcome`] values instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The world has no locations to start in.
    #[error("no starting location found: the world is empty")]
    NoStartingLocation,

    /// A connection names a location the world does not contain.
    #[error("{from} leads {direction} to unknown location \"{to}\"")]
    DanglingConnection {
        /// Location the player tried to leave.
        from: String,
        /// Direction taken.
        direction: Direction,
        /// Unresolved target name.
        to: String,
    },

    /// The session already ended with `exit`.
    #[error("session has terminated")]
    SessionTerminated,

    /// World model error.
    #[error("{0}")]
    Core(#[from] CoreError),
}
