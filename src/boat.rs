//! The ferry: which shore it is moored at and who is aboard.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::common::Shore;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Boat {
    location: Shore,
    passengers: Vec<String>,
    capacity: usize,
}

impl Boat {
    /// An empty boat moored at the left shore.
    pub fn new(capacity: usize) -> Self {
        Self {
            location: Shore::Left,
            passengers: Vec::new(),
            capacity,
        }
    }

    pub fn location(&self) -> Shore {
        self.location
    }

    /// Passenger ids in boarding order.
    pub fn passengers(&self) -> &[String] {
        &self.passengers
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.passengers.len() >= self.capacity
    }

    pub fn carries(&self, id: &str) -> bool {
        self.passengers.iter().any(|p| p == id)
    }

    pub(crate) fn embark(&mut self, id: &str) {
        self.passengers.push(id.to_string());
    }

    pub(crate) fn remove(&mut self, id: &str) {
        self.passengers.retain(|p| p != id);
    }

    /// Move to the opposite shore and return the new mooring.
    pub(crate) fn cross(&mut self) -> Shore {
        self.location = self.location.opposite();
        self.location
    }
}
