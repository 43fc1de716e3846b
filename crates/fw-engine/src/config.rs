//! Configuration for a session.

/// Name of the preferred starting location.
pub const DEFAULT_START_LOCATION: &str = "Headquarters";

/// Shared secret that grants the admin role. Fixed at compile time.
pub const ADMIN_SECRET: &str = "flood2024";

/// Username that may be granted the admin role.
pub const ADMIN_USERNAME: &str = "admin";

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Location preferred as the starting point, if present in the world.
    pub start_location: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            start_location: DEFAULT_START_LOCATION.to_string(),
        }
    }
}

impl EngineConfig {
    /// Set the preferred starting location.
    pub fn with_start_location(mut self, name: impl Into<String>) -> Self {
        self.start_location = name.into();
        self
    }
}
