use alloc::boxed::Box;

use crate::{game::GameEngine, game::GameStatus, player::Player};

/// Outcome of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct SessionSummary {
    pub status: GameStatus,
    pub move_count: u32,
    pub accepted: usize,
    pub rejected: usize,
}

/// Feeds one player's commands into one engine, strictly in order.
pub struct Session {
    player: Box<dyn Player>,
    engine: GameEngine,
    accepted: usize,
    rejected: usize,
}

impl Session {
    pub fn new(player: Box<dyn Player>, engine: GameEngine) -> Self {
        Self {
            player,
            engine,
            accepted: 0,
            rejected: 0,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Run until the player has nothing more to say. Finished games do not
    /// stop the session; the player may still reset and play again.
    pub fn run(&mut self) -> anyhow::Result<SessionSummary> {
        loop {
            let state = self.engine.state();
            let Some(command) = self.player.next_command(&state)? else {
                break;
            };
            let accepted = self.engine.apply(&command);
            if accepted {
                self.accepted += 1;
            } else {
                self.rejected += 1;
                log::debug!("command '{}' had no effect", command);
            }
            self.player
                .handle_result(&command, accepted, &self.engine.state());
        }
        Ok(self.summary())
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            status: self.engine.status(),
            move_count: self.engine.move_count(),
            accepted: self.accepted,
            rejected: self.rejected,
        }
    }
}
