//! Common types for RiverQuest: positions on the river and configuration errors.

use alloc::string::String;

/// One of the two fixed banks of the river.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Shore {
    #[cfg_attr(feature = "std", serde(rename = "leftShore"))]
    Left,
    #[cfg_attr(feature = "std", serde(rename = "rightShore"))]
    Right,
}

impl Shore {
    /// The bank across the river.
    pub fn opposite(self) -> Self {
        match self {
            Shore::Left => Shore::Right,
            Shore::Right => Shore::Left,
        }
    }

    /// Human readable name used by the text interface.
    pub fn label(self) -> &'static str {
        match self {
            Shore::Left => "left shore",
            Shore::Right => "right shore",
        }
    }
}

/// Where an entity currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum Location {
    LeftShore,
    RightShore,
    Boat,
}

impl Location {
    /// The shore this location denotes, or `None` for the boat.
    pub fn shore(self) -> Option<Shore> {
        match self {
            Location::LeftShore => Some(Shore::Left),
            Location::RightShore => Some(Shore::Right),
            Location::Boat => None,
        }
    }
}

impl From<Shore> for Location {
    fn from(shore: Shore) -> Self {
        match shore {
            Shore::Left => Location::LeftShore,
            Shore::Right => Location::RightShore,
        }
    }
}

/// Errors returned when a puzzle configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The boat must carry at least one passenger.
    ZeroCapacity,
    /// The puzzle has nothing to transport.
    NoEntities,
    /// Two entities share the same id.
    DuplicateId(String),
    /// An entity lists itself among its constraints.
    SelfConstraint(String),
    /// A constraint names an id that no entity has.
    UnknownConstraint { entity: String, target: String },
    /// Nobody is able to row the boat.
    NoOperator,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroCapacity => write!(f, "Boat capacity must be at least 1"),
            ConfigError::NoEntities => write!(f, "Puzzle must contain at least one entity"),
            ConfigError::DuplicateId(id) => write!(f, "Entity id '{}' is used more than once", id),
            ConfigError::SelfConstraint(id) => {
                write!(f, "Entity '{}' cannot be constrained against itself", id)
            }
            ConfigError::UnknownConstraint { entity, target } => write!(
                f,
                "Entity '{}' is constrained against unknown entity '{}'",
                entity, target
            ),
            ConfigError::NoOperator => write!(f, "No entity is able to operate the boat"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
