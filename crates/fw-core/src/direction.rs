use std::fmt;

use serde::{Deserialize, Serialize};

/// A compass direction for movement between locations.
///
/// Variant order is the display order for available exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
}

impl Direction {
    /// All directions in display order.
    pub const ALL: [Direction; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Parse a direction by its full name. Matching is case-insensitive;
    /// abbreviations are not accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" => Some(Self::North),
            "south" => Some(Self::South),
            "east" => Some(Self::East),
            "west" => Some(Self::West),
            _ => None,
        }
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_names() {
        assert_eq!(Direction::parse("north"), Some(Direction::North));
        assert_eq!(Direction::parse("WEST"), Some(Direction::West));
        assert_eq!(Direction::parse("East"), Some(Direction::East));
    }

    #[test]
    fn abbreviations_rejected() {
        assert_eq!(Direction::parse("n"), None);
        assert_eq!(Direction::parse("up"), None);
        assert_eq!(Direction::parse(""), None);
    }

    #[test]
    fn display_order() {
        let mut dirs = vec![Direction::West, Direction::North, Direction::East];
        dirs.sort();
        assert_eq!(dirs, vec![Direction::North, Direction::East, Direction::West]);
        assert_eq!(Direction::South.to_string(), "south");
    }
}
