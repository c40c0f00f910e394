//! Constraint and win evaluation over a set of placed entities.
//!
//! Only entities standing on a shore count; anyone still aboard the boat is
//! ignored until they disembark.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::common::{Location, Shore};
use crate::entity::Entity;

/// An unsafe pair left together without an operator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Violation {
    pub shore: Shore,
    /// The entity whose constraint is broken.
    pub entity: String,
    /// The entity it must not be left with.
    pub constrained: String,
}

/// Entities standing on `shore`.
pub fn on_shore(entities: &[Entity], shore: Shore) -> impl Iterator<Item = &Entity> {
    let location = Location::from(shore);
    entities.iter().filter(move |e| e.location() == location)
}

/// First unsafe pair on `shore`, if any.
pub fn shore_violation(entities: &[Entity], shore: Shore) -> Option<Violation> {
    let present: Vec<&Entity> = on_shore(entities, shore).collect();
    if present.iter().any(|e| e.can_operate_boat()) {
        return None;
    }
    for (i, a) in present.iter().enumerate() {
        for b in &present[i + 1..] {
            if !a.conflicts_with(b) {
                continue;
            }
            let (entity, constrained) = if a.constrains(b) { (a, b) } else { (b, a) };
            return Some(Violation {
                shore,
                entity: entity.id().to_string(),
                constrained: constrained.id().to_string(),
            });
        }
    }
    None
}

/// First unsafe pair on either shore, left shore checked first.
pub fn find_violation(entities: &[Entity]) -> Option<Violation> {
    [Shore::Left, Shore::Right]
        .into_iter()
        .find_map(|shore| shore_violation(entities, shore))
}

/// True once every entity has landed on the right shore.
pub fn all_across(entities: &[Entity]) -> bool {
    entities.iter().all(|e| e.location() == Location::RightShore)
}
