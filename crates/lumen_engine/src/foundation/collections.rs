//! Identifier and handle types

use serde::{Deserialize, Serialize};
use std::fmt;

slotmap::new_key_type! {
    /// Generation-checked handle into a scene's entity arena
    pub struct EntityKey;
}

/// Unique, monotonically assigned entity identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of entity ids owned by a single scene
///
/// Ids start at zero and are never handed out twice by the same generator.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Create a generator starting at id 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let mut ids = IdGenerator::new();

        assert_eq!(ids.next_id(), EntityId(0));
        assert_eq!(ids.next_id(), EntityId(1));
        assert_eq!(ids.next_id(), EntityId(2));
        assert_eq!(ids.issued(), 3);
    }

    #[test]
    fn test_generators_are_independent() {
        let mut a = IdGenerator::new();
        let mut b = IdGenerator::new();
        a.next_id();
        a.next_id();

        assert_eq!(b.next_id(), EntityId(0));
    }
}
