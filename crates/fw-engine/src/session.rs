//! Session management: login, command dispatch, and the stateful handlers.

use fw_core::{CoreError, Direction, World, transfer};

use crate::command::{Command, TransferAction, parse_command};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::outcome::{InventoryView, LocationView, Outcome};
use crate::player::{Player, Role};

/// Lifecycle of a session once the player has logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting commands.
    Active,
    /// `exit` was processed. No further commands are accepted.
    Terminated,
}

/// One player's session against a world.
#[derive(Debug)]
pub struct Session {
    world: World,
    player: Player,
    state: SessionState,
}

impl Session {
    /// Log in and place the player at the starting location.
    ///
    /// The role is resolved with [`Role::resolve`]. The player starts at the
    /// configured start location if the world has one, otherwise at the first
    /// location in load order. An empty world is an error.
    pub fn login(
        world: World,
        username: &str,
        password: Option<&str>,
        config: &EngineConfig,
    ) -> EngineResult<Self> {
        let role = Role::resolve(username, password);
        let start = if world.contains(&config.start_location) {
            config.start_location.clone()
        } else {
            world
                .first()
                .map(|l| l.name().to_string())
                .ok_or(EngineError::NoStartingLocation)?
        };

        tracing::info!(user = username, %role, start = %start, "session started");
        let player = Player::new(username, role, start);
        Ok(Self {
            world,
            player,
            state: SessionState::Active,
        })
    }

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player's state.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns true once `exit` has been processed.
    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// Parse and execute one line of input.
    pub fn process(&mut self, input: &str) -> EngineResult<Outcome> {
        let command = parse_command(input);
        self.execute(command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> EngineResult<Outcome> {
        if self.is_terminated() {
            return Err(EngineError::SessionTerminated);
        }
        tracing::debug!(?command, location = %self.player.location, "executing command");

        match command {
            Command::Empty => Ok(Outcome::Nothing),
            Command::Go { direction } => self.do_go(direction),
            Command::Take { item, quantity } => {
                self.do_transfer(TransferAction::Take, item.as_deref(), quantity)
            }
            Command::Drop { item, quantity } => {
                self.do_transfer(TransferAction::Drop, item.as_deref(), quantity)
            }
            Command::Look => self.do_look().map(Outcome::Location),
            Command::Inventory => Ok(Outcome::Inventory(InventoryView::of(
                &self.player.inventory,
            ))),
            Command::Exit => {
                self.state = SessionState::Terminated;
                tracing::info!(user = self.player.identity(), "session terminated");
                Ok(Outcome::Exit)
            }
            Command::Unknown { .. } => Ok(Outcome::InvalidCommand),
        }
    }

    fn do_look(&self) -> EngineResult<LocationView> {
        let location = self.world.lookup(&self.player.location)?;
        Ok(LocationView::of(location))
    }

    fn do_go(&mut self, direction: Option<Direction>) -> EngineResult<Outcome> {
        let Some(direction) = direction else {
            return Ok(Outcome::InvalidDirection);
        };

        let current = self.world.lookup(&self.player.location)?;
        let Some(target) = current.exit(direction) else {
            return Ok(Outcome::CannotMove);
        };
        if !self.world.contains(target) {
            return Err(EngineError::DanglingConnection {
                from: current.name().to_string(),
                direction,
                to: target.to_string(),
            });
        }

        let target = target.to_string();
        tracing::debug!(from = %self.player.location, to = %target, %direction, "moved");
        self.player.location.clone_from(&target);
        Ok(Outcome::Moved { to: target })
    }

    fn do_transfer(
        &mut self,
        action: TransferAction,
        item: Option<&str>,
        quantity: u64,
    ) -> EngineResult<Outcome> {
        if !self.player.is_admin() {
            tracing::warn!(user = self.player.identity(), %action, "transfer denied");
            return Ok(Outcome::AdminOnly { action });
        }
        let Some(item) = item else {
            return Ok(Outcome::MissingItem { action });
        };

        let location = self.world.lookup_mut(&self.player.location)?;
        let result = match action {
            TransferAction::Take => transfer(
                &mut location.resources,
                &mut self.player.inventory,
                item,
                quantity,
            ),
            TransferAction::Drop => transfer(
                &mut self.player.inventory,
                &mut location.resources,
                item,
                quantity,
            ),
        };

        let item = item.to_lowercase();
        match result {
            Ok(()) => {
                tracing::debug!(%action, item = %item, quantity, "transferred");
                Ok(match action {
                    TransferAction::Take => Outcome::Took { item, quantity },
                    TransferAction::Drop => Outcome::Dropped { item, quantity },
                })
            }
            Err(CoreError::InsufficientStock { .. }) => Ok(match action {
                TransferAction::Take => Outcome::NotEnoughResources,
                TransferAction::Drop => Outcome::NotEnoughInventory,
            }),
            Err(CoreError::StockOverflow(_)) => Ok(Outcome::CapacityExceeded { item }),
            Err(e) => Err(e.into()),
        }
    }
}
