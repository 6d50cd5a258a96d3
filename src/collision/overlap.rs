use std::collections::BTreeSet;

use super::pair::BodyPair;
use crate::utils::allocator::EntityId;

/// Contact state of one pair of bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactState {
    NoContact,
    Touching,
}

/// Edge produced when a pair changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEvent {
    /// The pair started touching this tick; collision response is due.
    Began,
    /// The pair stopped touching this tick.
    Ended,
}

/// Cache of body pairs that are currently touching.
///
/// Pairs absent from the cache are in [`ContactState::NoContact`].
#[derive(Debug, Clone, Default)]
pub struct OverlapTracker {
    touching: BTreeSet<BodyPair>,
}

impl OverlapTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, pair: &BodyPair) -> ContactState {
        if self.touching.contains(pair) {
            ContactState::Touching
        } else {
            ContactState::NoContact
        }
    }

    /// Drops every cached pair that is not among `candidates` and returns them.
    pub fn purge_stale(&mut self, candidates: &BTreeSet<BodyPair>) -> Vec<BodyPair> {
        let stale: Vec<BodyPair> = self.touching.difference(candidates).copied().collect();
        for pair in &stale {
            self.touching.remove(pair);
        }
        stale
    }

    /// Drops every cached pair involving `id`.
    pub fn forget_body(&mut self, id: EntityId) -> Vec<BodyPair> {
        let stale: Vec<BodyPair> = self
            .touching
            .iter()
            .filter(|pair| pair.contains(id))
            .copied()
            .collect();
        for pair in &stale {
            self.touching.remove(pair);
        }
        stale
    }

    /// Records whether `pair` overlaps this tick and reports the resulting edge, if any.
    ///
    /// Continued contact and continued separation produce no event, so the
    /// response to a contact fires once.
    pub fn observe(&mut self, pair: BodyPair, overlapping: bool) -> Option<ContactEvent> {
        match (self.state(&pair), overlapping) {
            (ContactState::NoContact, true) => {
                self.touching.insert(pair);
                Some(ContactEvent::Began)
            }
            (ContactState::Touching, false) => {
                self.touching.remove(&pair);
                Some(ContactEvent::Ended)
            }
            (ContactState::Touching, true) | (ContactState::NoContact, false) => None,
        }
    }

    /// Bodies currently touching `id`.
    pub fn partners(&self, id: EntityId) -> impl Iterator<Item = EntityId> + '_ {
        self.touching.iter().filter_map(move |pair| pair.other(id))
    }

    /// Copy of the touching set, in pair order.
    pub fn snapshot(&self) -> Vec<BodyPair> {
        self.touching.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.touching.len()
    }

    pub fn is_empty(&self) -> bool {
        self.touching.is_empty()
    }

    pub fn clear(&mut self) {
        self.touching.clear();
    }
}
