#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod boat;
pub mod command;
mod common;
mod config;
mod entity;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
#[cfg(feature = "std")]
mod player_cli;
mod player_script;
pub mod prelude;
pub mod rules;
mod session;
#[cfg(feature = "std")]
pub mod ui;

pub use boat::*;
pub use command::Command;
pub use common::*;
pub use config::*;
pub use entity::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{format_record, init_logging, parse_level, LOG_ENV};
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use player_script::*;
pub use rules::Violation;
pub use session::*;
