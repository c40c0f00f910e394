use alloc::collections::VecDeque;

use crate::{command::Command, game::GameState, player::Player};

/// Player that replays a fixed list of commands, then stops.
pub struct ScriptedPlayer {
    commands: VecDeque<Command>,
}

impl ScriptedPlayer {
    pub fn new<I: IntoIterator<Item = Command>>(commands: I) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }

    /// Commands not yet played.
    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl Player for ScriptedPlayer {
    fn next_command(&mut self, _state: &GameState) -> anyhow::Result<Option<Command>> {
        Ok(self.commands.pop_front())
    }
}
