use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use fw_core::World;
use fw_engine::{ADMIN_USERNAME, Command, EngineConfig, Outcome, Session};

pub fn run(path: &Path, user: Option<&str>) -> Result<(), String> {
    let world = super::load_world(path)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(world, user, &mut stdin.lock(), &mut stdout.lock())
}

fn run_with(
    world: World,
    user: Option<&str>,
    reader: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), String> {
    writeln!(out, "=== Flood Emergency Management System ===").map_err(|e| e.to_string())?;

    let Some((username, password)) = prompt_login(user, reader, out)? else {
        return Ok(());
    };

    let mut session = Session::login(
        world,
        &username,
        password.as_deref(),
        &EngineConfig::default(),
    )
    .map_err(|e| e.to_string())?;

    writeln!(out, "Starting at: {}", session.player().location).map_err(|e| e.to_string())?;

    loop {
        let view = session.execute(Command::Look).map_err(|e| e.to_string())?;
        writeln!(out, "\n{view}").map_err(|e| e.to_string())?;

        let Some(line) = prompt(reader, out, "\nEnter command: ")? else {
            break; // EOF
        };

        let outcome = session.process(&line).map_err(|e| e.to_string())?;
        if !matches!(outcome, Outcome::Nothing) {
            writeln!(out, "{}", paint(&outcome)).map_err(|e| e.to_string())?;
        }
        if outcome.is_exit() {
            break;
        }
    }

    Ok(())
}

/// Ask for a username, and a password when the username is `admin`.
/// Any username is accepted; role resolution happens in the engine.
/// Returns `None` if input ends first.
fn prompt_login(
    user: Option<&str>,
    reader: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<(String, Option<String>)>, String> {
    let username = match user {
        Some(u) => u.trim().to_string(),
        None => {
            let Some(u) = prompt(reader, out, "Username: ")? else {
                return Ok(None);
            };
            u
        }
    };

    let password = if username == ADMIN_USERNAME {
        let Some(password) = prompt(reader, out, "Password: ")? else {
            return Ok(None);
        };
        Some(password)
    } else {
        None
    };

    Ok(Some((username, password)))
}

/// Print `label`, read one line, and return it trimmed. `None` on EOF.
fn prompt(
    reader: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> Result<Option<String>, String> {
    write!(out, "{label}").map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) => Err(e.to_string()),
    }
}

fn paint(outcome: &Outcome) -> String {
    let text = outcome.to_string();
    match outcome {
        Outcome::Moved { .. } | Outcome::Took { .. } | Outcome::Dropped { .. } => {
            text.green().to_string()
        }
        Outcome::InvalidDirection
        | Outcome::CannotMove
        | Outcome::AdminOnly { .. }
        | Outcome::MissingItem { .. }
        | Outcome::NotEnoughResources
        | Outcome::NotEnoughInventory
        | Outcome::CapacityExceeded { .. }
        | Outcome::InvalidCommand => text.yellow().to_string(),
        Outcome::Exit => text.dimmed().to_string(),
        Outcome::Nothing | Outcome::Location(_) | Outcome::Inventory(_) => text,
    }
}
