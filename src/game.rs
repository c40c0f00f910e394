use alloc::vec::Vec;

use crate::{
    boat::Boat,
    command::Command,
    common::{ConfigError, Location, Shore},
    config::PuzzleConfig,
    entity::Entity,
    rules::{self, Violation},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// `Won` and `Lost` only end through a reset.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Read-only snapshot handed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct GameState {
    pub entities: Vec<Entity>,
    pub boat: Boat,
    pub move_count: u32,
    pub status: GameStatus,
    pub violation: Option<Violation>,
}

impl GameState {
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn on_shore(&self, shore: Shore) -> impl Iterator<Item = &Entity> {
        rules::on_shore(&self.entities, shore)
    }

    /// Entities aboard, in boarding order.
    pub fn aboard(&self) -> impl Iterator<Item = &Entity> {
        self.boat
            .passengers()
            .iter()
            .filter_map(move |id| self.entity(id))
    }
}

/// Rules engine owning the puzzle state. Every mutation goes through
/// [`board`](Self::board), [`disembark`](Self::disembark),
/// [`cross_river`](Self::cross_river) or [`reset`](Self::reset); illegal
/// requests return `false` and change nothing.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: PuzzleConfig,
    entities: Vec<Entity>,
    boat: Boat,
    move_count: u32,
    status: GameStatus,
    violation: Option<Violation>,
}

impl Default for GameEngine {
    /// The standard Farmer, Wolf, Chicken and Grain puzzle.
    fn default() -> Self {
        Self::fresh(PuzzleConfig::default())
    }
}

impl GameEngine {
    /// Validate `config` and start a game with everyone on the left shore.
    pub fn new(config: PuzzleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    fn fresh(config: PuzzleConfig) -> Self {
        let entities = config.entities.iter().cloned().map(Entity::new).collect();
        let boat = Boat::new(config.boat_capacity);
        Self {
            config,
            entities,
            boat,
            move_count: 0,
            status: GameStatus::Playing,
            violation: None,
        }
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn boat(&self) -> &Boat {
        &self.boat
    }

    /// Number of successful crossings since the last reset.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The pair that ended the game, when it was lost.
    pub fn violation(&self) -> Option<&Violation> {
        self.violation.as_ref()
    }

    pub fn on_shore(&self, shore: Shore) -> impl Iterator<Item = &Entity> {
        rules::on_shore(&self.entities, shore)
    }

    /// Entities aboard, in boarding order.
    pub fn aboard(&self) -> impl Iterator<Item = &Entity> {
        self.boat
            .passengers()
            .iter()
            .filter_map(move |id| self.entity(id))
    }

    /// Whether an unsupervised unsafe pair currently stands on either shore.
    pub fn has_violation(&self) -> bool {
        rules::find_violation(&self.entities).is_some()
    }

    /// Whether every entity has landed on the right shore.
    pub fn is_won(&self) -> bool {
        rules::all_across(&self.entities)
    }

    fn entity_mut(&mut self, id: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id() == id)
    }

    /// Put `id` on the boat. The entity must stand on the shore the boat is
    /// moored at and there must be a free seat.
    pub fn board(&mut self, id: &str) -> bool {
        if self.status.is_over() || self.boat.is_full() {
            log::debug!("board {} rejected: game over or boat full", id);
            return false;
        }
        let mooring = Location::from(self.boat.location());
        let Some(entity) = self.entity_mut(id) else {
            log::debug!("board {} rejected: unknown entity", id);
            return false;
        };
        if entity.location() != mooring {
            log::debug!("board {} rejected: not at the boat's shore", id);
            return false;
        }
        entity.set_location(Location::Boat);
        self.boat.embark(id);
        log::debug!("{} boarded at the {}", id, self.boat.location().label());
        true
    }

    /// Land `id` on whichever shore the boat is moored at.
    pub fn disembark(&mut self, id: &str) -> bool {
        if self.status.is_over() {
            log::debug!("land {} rejected: game over", id);
            return false;
        }
        let mooring = Location::from(self.boat.location());
        let Some(entity) = self.entity_mut(id) else {
            log::debug!("land {} rejected: unknown entity", id);
            return false;
        };
        if entity.location() != Location::Boat {
            log::debug!("land {} rejected: not aboard", id);
            return false;
        }
        entity.set_location(mooring);
        self.boat.remove(id);
        log::debug!("{} landed on the {}", id, self.boat.location().label());
        if rules::all_across(&self.entities) {
            self.finish(GameStatus::Won);
        }
        true
    }

    /// Row the boat, with everyone aboard, to the opposite shore. Passengers
    /// stay aboard until they disembark.
    pub fn cross_river(&mut self) -> bool {
        if self.status.is_over() {
            log::debug!("cross rejected: game over");
            return false;
        }
        if self.boat.is_empty() {
            log::debug!("cross rejected: boat is empty");
            return false;
        }
        if !self.aboard().any(|e| e.can_operate_boat()) {
            log::debug!("cross rejected: nobody aboard can row");
            return false;
        }
        let shore = self.boat.cross();
        self.move_count += 1;
        log::debug!("boat crossed to the {} (move {})", shore.label(), self.move_count);
        self.evaluate();
        true
    }

    /// Post-crossing evaluation: a broken constraint loses before an
    /// all-across board wins.
    fn evaluate(&mut self) {
        if let Some(violation) = rules::find_violation(&self.entities) {
            log::info!(
                "{} left alone with {} on the {}",
                violation.entity,
                violation.constrained,
                violation.shore.label()
            );
            self.violation = Some(violation);
            self.finish(GameStatus::Lost);
        } else if rules::all_across(&self.entities) {
            self.finish(GameStatus::Won);
        }
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        log::info!("game {:?} after {} moves", status, self.move_count);
    }

    /// Board an entity on the boat's shore, or land one that is aboard.
    pub fn select(&mut self, id: &str) -> bool {
        let Some(location) = self.entity(id).map(Entity::location) else {
            return false;
        };
        if location == Location::Boat {
            self.disembark(id)
        } else if location.shore() == Some(self.boat.location()) {
            self.board(id)
        } else {
            log::debug!("select {} rejected: boat is on the other shore", id);
            false
        }
    }

    /// Dispatch a player command. `Reset` always succeeds.
    pub fn apply(&mut self, command: &Command) -> bool {
        match command {
            Command::Board(id) => self.board(id),
            Command::Disembark(id) => self.disembark(id),
            Command::Select(id) => self.select(id),
            Command::Cross => self.cross_river(),
            Command::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Put everyone back on the left shore with an empty boat.
    pub fn reset(&mut self) {
        let config = core::mem::take(&mut self.config);
        *self = Self::fresh(config);
        log::info!("game reset");
    }

    /// Owned snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            entities: self.entities.clone(),
            boat: self.boat.clone(),
            move_count: self.move_count,
            status: self.status,
            violation: self.violation.clone(),
        }
    }
}
