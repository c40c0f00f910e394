//! Player intents and their textual form.

use alloc::string::{String, ToString};
use core::fmt;

/// A request forwarded from the view layer into the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Put an entity on the boat.
    Board(String),
    /// Take an entity off the boat.
    Disembark(String),
    /// Board or disembark depending on where the entity is.
    Select(String),
    /// Row the boat to the other shore.
    Cross,
    /// Start over.
    Reset,
}

impl Command {
    /// Parse `board <id>`, `land <id>`, `select <id>`, `cross`, `reset`, or a
    /// bare entity id (treated as a selection).
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split_whitespace();
        let head = parts.next()?;
        let arg = parts.next();
        if parts.next().is_some() {
            return None;
        }
        let verb = head.to_ascii_lowercase();
        let cmd = match (verb.as_str(), arg) {
            ("board" | "embark" | "load", Some(id)) => Command::Board(id.to_string()),
            ("land" | "disembark" | "unload", Some(id)) => Command::Disembark(id.to_string()),
            ("select", Some(id)) => Command::Select(id.to_string()),
            ("cross" | "row" | "go", None) => Command::Cross,
            ("reset" | "restart", None) => Command::Reset,
            ("board" | "embark" | "load" | "land" | "disembark" | "unload" | "select", None) => {
                return None
            }
            (_, None) => Command::Select(head.to_string()),
            _ => return None,
        };
        Some(cmd)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Board(id) => write!(f, "board {}", id),
            Command::Disembark(id) => write!(f, "land {}", id),
            Command::Select(id) => write!(f, "select {}", id),
            Command::Cross => write!(f, "cross"),
            Command::Reset => write!(f, "reset"),
        }
    }
}
