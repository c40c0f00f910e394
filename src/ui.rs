#![cfg(feature = "std")]

//! Plain-text rendering of game snapshots.

use std::fmt::Write;

use crate::{
    common::Shore,
    config::PuzzleConfig,
    entity::Entity,
    game::{GameState, GameStatus},
};

fn token(e: &Entity) -> String {
    format!("{} {} [{}]", e.icon(), e.name(), e.id())
}

fn group<'a>(entities: impl Iterator<Item = &'a Entity>) -> String {
    let tokens: Vec<String> = entities.map(token).collect();
    if tokens.is_empty() {
        "-".to_string()
    } else {
        tokens.join(", ")
    }
}

/// Both shores and the boat, one per line.
pub fn render_board(state: &GameState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Left shore:  {}", group(state.on_shore(Shore::Left)));
    let _ = writeln!(
        out,
        "Boat ({}, {}/{}): {}",
        state.boat.location().label(),
        state.boat.passengers().len(),
        state.boat.capacity(),
        group(state.aboard())
    );
    let _ = writeln!(out, "Right shore: {}", group(state.on_shore(Shore::Right)));
    out
}

/// One-line status text.
pub fn status_line(state: &GameState) -> String {
    match state.status {
        GameStatus::Playing => format!("Moves: {}", state.move_count),
        GameStatus::Won => format!("You won in {} moves!", state.move_count),
        GameStatus::Lost => match &state.violation {
            Some(v) => format!(
                "Game over! Constraints violated: {} was left alone with {} on the {}.",
                name_of(state, &v.entity),
                name_of(state, &v.constrained),
                v.shore.label()
            ),
            None => "Game over! Constraints violated.".to_string(),
        },
    }
}

fn name_of<'a>(state: &'a GameState, id: &'a str) -> &'a str {
    state.entity(id).map(Entity::name).unwrap_or(id)
}

/// Rules of the configured puzzle, as a bulleted list.
pub fn rules_text(config: &PuzzleConfig) -> String {
    let mut out = String::from("Rules:\n");
    let _ = writeln!(out, "- Move all characters to the right shore to win.");
    for def in config.entities.iter().filter(|d| d.can_operate_boat) {
        let _ = writeln!(out, "- The {} can operate the boat.", def.name);
    }
    for def in &config.entities {
        for target in &def.constraints {
            let other = config
                .entities
                .iter()
                .find(|d| &d.id == target)
                .map(|d| d.name.as_str())
                .unwrap_or(target.as_str());
            let _ = writeln!(out, "- The {} can't be left alone with the {}.", def.name, other);
        }
    }
    let seats = if config.boat_capacity == 1 { "character" } else { "characters" };
    let _ = writeln!(out, "- The boat can carry up to {} {}.", config.boat_capacity, seats);
    out
}
