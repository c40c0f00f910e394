//! Commonly used types and utilities for ease of import.

pub use crate::{
    Command, GameEngine, GameState, GameStatus, Location, Player, PuzzleConfig, ScriptedPlayer,
    Session, Shore,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
