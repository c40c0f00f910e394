use crate::{command::Command, game::GameState};

/// Interface implemented by anything that drives a game: a person at a
/// terminal or a fixed script.
pub trait Player {
    /// Choose the next command given the current snapshot. `None` ends the
    /// session.
    fn next_command(&mut self, state: &GameState) -> anyhow::Result<Option<Command>>;

    /// Inform the player whether its last command was accepted.
    fn handle_result(&mut self, _command: &Command, _accepted: bool, _state: &GameState) {}
}
