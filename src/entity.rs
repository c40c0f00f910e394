//! Entity definitions and their position on the river.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::common::Location;

/// Static description of something that has to be ferried across.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct EntityDef {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[cfg_attr(feature = "std", serde(default))]
    pub can_operate_boat: bool,
    /// Ids this entity must not be left alone with.
    #[cfg_attr(feature = "std", serde(default))]
    pub constraints: Vec<String>,
}

impl EntityDef {
    /// Create a passive entity with no constraints.
    pub fn new(id: &str, name: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            can_operate_boat: false,
            constraints: Vec::new(),
        }
    }

    /// Mark the entity as able to row the boat.
    pub fn operator(mut self) -> Self {
        self.can_operate_boat = true;
        self
    }

    /// Declare that this entity is unsafe alone with `other`.
    pub fn constrains(mut self, other: &str) -> Self {
        self.constraints.push(other.to_string());
        self
    }
}

/// An entity placed somewhere on the river. Only `location` ever changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Entity {
    #[cfg_attr(feature = "std", serde(flatten))]
    def: EntityDef,
    location: Location,
}

impl Entity {
    /// Place `def` on the starting shore.
    pub fn new(def: EntityDef) -> Self {
        Self {
            def,
            location: Location::LeftShore,
        }
    }

    pub fn id(&self) -> &str {
        &self.def.id
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn icon(&self) -> &str {
        &self.def.icon
    }

    pub fn can_operate_boat(&self) -> bool {
        self.def.can_operate_boat
    }

    pub fn constraints(&self) -> &[String] {
        &self.def.constraints
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    /// Whether this entity declared a constraint against `other`.
    pub fn constrains(&self, other: &Entity) -> bool {
        self.def.constraints.iter().any(|c| c == other.id())
    }

    /// Symmetric check: either side declaring the pair makes it unsafe.
    pub fn conflicts_with(&self, other: &Entity) -> bool {
        self.constrains(other) || other.constrains(self)
    }
}
