//! Player state management.

use std::fmt;

use fw_core::Stock;

use crate::config::{ADMIN_SECRET, ADMIN_USERNAME};

/// Authorization level, fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// May look around and move.
    Guest,
    /// May also take and drop resources.
    Admin,
}

impl Role {
    /// Resolve the role for a login attempt.
    ///
    /// Only the exact username `admin` with the exact secret is an admin.
    /// Everyone else, including `admin` with a wrong password, is a guest.
    pub fn resolve(username: &str, password: Option<&str>) -> Self {
        if username == ADMIN_USERNAME && password == Some(ADMIN_SECRET) {
            Self::Admin
        } else {
            Self::Guest
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guest => f.write_str("guest"),
            Self::Admin => f.write_str("admin"),
        }
    }
}

/// The player's state in a session.
#[derive(Debug, Clone)]
pub struct Player {
    identity: String,
    role: Role,
    /// Resources carried by the player.
    pub inventory: Stock,
    /// Name of the current location. Changed only by successful moves.
    pub location: String,
}

impl Player {
    /// Create a player with an empty inventory at `location`.
    pub fn new(identity: impl Into<String>, role: Role, location: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            role,
            inventory: Stock::new(),
            location: location.into(),
        }
    }

    /// Login name.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Session role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns true if the player may transfer resources.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_with_secret() {
        assert_eq!(Role::resolve("admin", Some("flood2024")), Role::Admin);
    }

    #[test]
    fn admin_with_wrong_password_is_guest() {
        assert_eq!(Role::resolve("admin", Some("letmein")), Role::Guest);
        assert_eq!(Role::resolve("admin", None), Role::Guest);
        assert_eq!(Role::resolve("Admin", Some("flood2024")), Role::Guest);
    }

    #[test]
    fn other_users_always_guest() {
        assert_eq!(Role::resolve("bob", Some("flood2024")), Role::Guest);
        assert_eq!(Role::resolve("", None), Role::Guest);
    }

    #[test]
    fn new_player() {
        let player = Player::new("bob", Role::Guest, "Headquarters");
        assert_eq!(player.identity(), "bob");
        assert_eq!(player.role(), Role::Guest);
        assert!(!player.is_admin());
        assert!(player.inventory.is_empty());
        assert_eq!(player.location, "Headquarters");
    }
}
