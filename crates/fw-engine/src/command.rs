//! Command parsing for player input.

use std::fmt;

use fw_core::Direction;

/// Which side of a resource transfer a command asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferAction {
    /// Location to inventory.
    Take,
    /// Inventory to location.
    Drop,
}

impl fmt::Display for TransferAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Take => f.write_str("take"),
            Self::Drop => f.write_str("drop"),
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank input.
    Empty,
    /// Move one step. `None` when the direction is missing or not a compass
    /// direction.
    Go {
        /// The direction to move.
        direction: Option<Direction>,
    },
    /// Take resources from the current location.
    Take {
        /// Item name, lowercased. `None` when missing.
        item: Option<String>,
        /// Units to move, always at least 1.
        quantity: u64,
    },
    /// Drop resources at the current location.
    Drop {
        /// Item name, lowercased. `None` when missing.
        item: Option<String>,
        /// Units to move, always at least 1.
        quantity: u64,
    },
    /// Describe the current location.
    Look,
    /// Show the player's inventory.
    Inventory,
    /// End the session.
    Exit,
    /// Unrecognized verb.
    Unknown {
        /// The first token of the input.
        verb: String,
    },
}

/// The recognized verbs, in help order.
pub const VERBS: [&str; 6] = ["go", "take", "drop", "look", "inventory", "exit"];

/// Parse a line of player input.
///
/// The whole line is lowercased and split on whitespace. Tokens beyond the
/// ones a verb uses are ignored.
pub fn parse_command(input: &str) -> Command {
    let input = input.to_lowercase();
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some((verb, rest)) = words.split_first() else {
        return Command::Empty;
    };

    match *verb {
        "go" => Command::Go {
            direction: rest.first().and_then(|d| Direction::parse(d)),
        },
        "take" => Command::Take {
            item: rest.first().map(|s| s.to_string()),
            quantity: parse_quantity(rest.get(1).copied()),
        },
        "drop" => Command::Drop {
            item: rest.first().map(|s| s.to_string()),
            quantity: parse_quantity(rest.get(1).copied()),
        },
        "look" => Command::Look,
        "inventory" => Command::Inventory,
        "exit" => Command::Exit,
        other => Command::Unknown {
            verb: other.to_string(),
        },
    }
}

/// Interpret an optional quantity token.
///
/// A token made only of ASCII digits is read as a number; anything else,
/// including a missing token, means 1. Zero also means 1. Digit strings too
/// large to represent saturate at `u64::MAX`.
pub fn parse_quantity(token: Option<&str>) -> u64 {
    match token {
        Some(t) if !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()) => {
            match t.parse::<u64>() {
                Ok(0) => 1,
                Ok(n) => n,
                Err(_) => u64::MAX,
            }
        }
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("   \t "), Command::Empty);
    }

    #[test]
    fn go_with_direction() {
        assert_eq!(
            parse_command("go north"),
            Command::Go {
                direction: Some(Direction::North)
            }
        );
        assert_eq!(
            parse_command("GO  West"),
            Command::Go {
                direction: Some(Direction::West)
            }
        );
    }

    #[test]
    fn go_without_valid_direction() {
        assert_eq!(parse_command("go"), Command::Go { direction: None });
        assert_eq!(parse_command("go up"), Command::Go { direction: None });
        assert_eq!(parse_command("go n"), Command::Go { direction: None });
    }

    #[test]
    fn bare_direction_is_unknown() {
        assert_eq!(
            parse_command("north"),
            Command::Unknown {
                verb: "north".to_string()
            }
        );
    }

    #[test]
    fn take_with_quantity() {
        assert_eq!(
            parse_command("take Blankets 2"),
            Command::Take {
                item: Some("blankets".to_string()),
                quantity: 2
            }
        );
    }

    #[test]
    fn take_without_item() {
        assert_eq!(
            parse_command("take"),
            Command::Take {
                item: None,
                quantity: 1
            }
        );
    }

    #[test]
    fn drop_defaults_to_one() {
        assert_eq!(
            parse_command("drop water"),
            Command::Drop {
                item: Some("water".to_string()),
                quantity: 1
            }
        );
    }

    #[test]
    fn non_numeric_quantity_silently_becomes_one() {
        assert_eq!(
            parse_command("take water lots"),
            Command::Take {
                item: Some("water".to_string()),
                quantity: 1
            }
        );
        assert_eq!(parse_quantity(Some("-3")), 1);
        assert_eq!(parse_quantity(Some("2.5")), 1);
        assert_eq!(parse_quantity(Some("+4")), 1);
        assert_eq!(parse_quantity(Some("")), 1);
        assert_eq!(parse_quantity(None), 1);
    }

    #[test]
    fn zero_quantity_becomes_one() {
        assert_eq!(parse_quantity(Some("0")), 1);
        assert_eq!(parse_quantity(Some("000")), 1);
    }

    #[test]
    fn huge_quantity_saturates() {
        assert_eq!(parse_quantity(Some("99999999999999999999999")), u64::MAX);
        assert_eq!(parse_quantity(Some("007")), 7);
    }

    #[test]
    fn extra_tokens_ignored() {
        assert_eq!(
            parse_command("take water 3 please"),
            Command::Take {
                item: Some("water".to_string()),
                quantity: 3
            }
        );
        assert_eq!(parse_command("look around"), Command::Look);
    }

    #[test]
    fn simple_verbs() {
        assert_eq!(parse_command("LOOK"), Command::Look);
        assert_eq!(parse_command("inventory"), Command::Inventory);
        assert_eq!(parse_command("exit"), Command::Exit);
    }

    #[test]
    fn unknown_verb() {
        assert_eq!(
            parse_command("Dance wildly"),
            Command::Unknown {
                verb: "dance".to_string()
            }
        );
        assert_eq!(
            parse_command("inv"),
            Command::Unknown {
                verb: "inv".to_string()
            }
        );
    }
}
