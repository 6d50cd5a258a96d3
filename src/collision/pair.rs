use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::allocator::EntityId;

/// Unordered pair of two distinct bodies.
///
/// Members are stored sorted, so `BodyPair::new(a, b) == BodyPair::new(b, a)` and the
/// derived `Hash`/`Ord` agree with that equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyPair {
    first: EntityId,
    second: EntityId,
}

impl BodyPair {
    /// Returns `None` when both ids name the same body.
    pub fn new(a: EntityId, b: EntityId) -> Option<Self> {
        if a == b {
            return None;
        }
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        Some(Self { first, second })
    }

    /// Every pair that can be formed from `ids`, in list order.
    ///
    /// Duplicate ids are skipped so each pair appears once.
    pub fn all(ids: &[EntityId]) -> Vec<BodyPair> {
        let mut pairs = Vec::with_capacity(ids.len() * ids.len().saturating_sub(1) / 2);
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                if let Some(pair) = BodyPair::new(*a, *b) {
                    if !pairs.contains(&pair) {
                        pairs.push(pair);
                    }
                }
            }
        }
        pairs
    }

    pub fn first(&self) -> EntityId {
        self.first
    }

    pub fn second(&self) -> EntityId {
        self.second
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.first == id || self.second == id
    }

    /// The member that is not `id`, or `None` if `id` is not in the pair.
    pub fn other(&self, id: EntityId) -> Option<EntityId> {
        if self.first == id {
            Some(self.second)
        } else if self.second == id {
            Some(self.first)
        } else {
            None
        }
    }
}

impl fmt::Display for BodyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
