use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;

use crate::common::ConfigError;
use crate::entity::EntityDef;

pub const DEFAULT_BOAT_CAPACITY: usize = 2;

/// The classic Farmer, Wolf, Chicken and Grain crossing.
pub fn standard_entities() -> Vec<EntityDef> {
    vec![
        EntityDef::new("farmer", "Farmer", "👨‍🌾").operator(),
        EntityDef::new("wolf", "Wolf", "🐺").constrains("chicken"),
        EntityDef::new("chicken", "Chicken", "🐔").constrains("grain"),
        EntityDef::new("grain", "Grain", "🌾"),
    ]
}

fn default_boat_capacity() -> usize {
    DEFAULT_BOAT_CAPACITY
}

/// Everything needed to start (and restart) a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct PuzzleConfig {
    pub entities: Vec<EntityDef>,
    #[cfg_attr(feature = "std", serde(default = "default_boat_capacity"))]
    pub boat_capacity: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            entities: standard_entities(),
            boat_capacity: default_boat_capacity(),
        }
    }
}

impl PuzzleConfig {
    pub fn new(entities: Vec<EntityDef>, boat_capacity: usize) -> Self {
        Self {
            entities,
            boat_capacity,
        }
    }

    /// Same entities, different boat.
    pub fn with_capacity(mut self, boat_capacity: usize) -> Self {
        self.boat_capacity = boat_capacity;
        self
    }

    /// Check the configuration describes a playable puzzle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.boat_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.entities.is_empty() {
            return Err(ConfigError::NoEntities);
        }
        let mut ids = BTreeSet::new();
        for def in &self.entities {
            if !ids.insert(def.id.as_str()) {
                return Err(ConfigError::DuplicateId(def.id.clone()));
            }
        }
        for def in &self.entities {
            if def.constraints.iter().any(|c| *c == def.id) {
                return Err(ConfigError::SelfConstraint(def.id.clone()));
            }
            if let Some(target) = def.constraints.iter().find(|c| !ids.contains(c.as_str())) {
                return Err(ConfigError::UnknownConstraint {
                    entity: def.id.clone(),
                    target: target.clone(),
                });
            }
        }
        if !self.entities.iter().any(|def| def.can_operate_boat) {
            return Err(ConfigError::NoOperator);
        }
        Ok(())
    }

    /// Validate, logging the reason when the configuration is rejected.
    #[cfg(feature = "std")]
    pub fn checked(self) -> anyhow::Result<Self> {
        if let Err(e) = self.validate() {
            log::warn!("rejected puzzle configuration: {}", e);
            return Err(e.into());
        }
        Ok(self)
    }

    /// Parse a JSON puzzle description without validating it, so callers can
    /// apply overrides first.
    #[cfg(feature = "std")]
    pub fn parse_json_str(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON puzzle description without validating it.
    #[cfg(feature = "std")]
    pub fn read_json_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
        Self::parse_json_str(&json)
    }

    /// Parse a JSON puzzle description and validate it.
    #[cfg(feature = "std")]
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        Self::parse_json_str(json)?.checked()
    }

    /// Load a JSON puzzle description from disk and validate it.
    #[cfg(feature = "std")]
    pub fn from_json_file(path: &std::path::Path) -> anyhow::Result<Self> {
        Self::read_json_file(path)?.checked()
    }
}
