//! Per-look, per-reaction counters.
//!
//! Counts live for the lifetime of the ledger. Entries are never pruned,
//! so a look that disappears from a later fetch keeps its counts.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::model::{LookId, ReactionKind};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct ReactionCounts {
    heart: u64,
    fire: u64,
}

impl ReactionCounts {
    fn slot(&mut self, kind: ReactionKind) -> &mut u64 {
        match kind {
            ReactionKind::Heart => &mut self.heart,
            ReactionKind::Fire => &mut self.fire,
        }
    }

    fn get(&self, kind: ReactionKind) -> u64 {
        match kind {
            ReactionKind::Heart => self.heart,
            ReactionKind::Fire => self.fire,
        }
    }
}

/// Thread-safe reaction counter map.
///
/// Missing entries read as zero. The only mutation is `increment`.
#[derive(Debug, Default)]
pub struct ReactionLedger {
    counts: Mutex<HashMap<LookId, ReactionCounts>>,
}

impl ReactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one reaction and return the post-increment count.
    pub fn increment(&self, id: LookId, kind: ReactionKind) -> u64 {
        let mut counts = self.counts.lock();
        let slot = counts.entry(id).or_default().slot(kind);
        *slot = slot.saturating_add(1);
        *slot
    }

    pub fn count_of(&self, id: LookId, kind: ReactionKind) -> u64 {
        self.counts
            .lock()
            .get(&id)
            .map_or(0, |counts| counts.get(kind))
    }

    /// Heart and fire counts read under a single lock.
    pub fn counts_for(&self, id: LookId) -> (u64, u64) {
        let counts = self.counts.lock().get(&id).copied().unwrap_or_default();
        (counts.heart, counts.fire)
    }

    /// Number of looks with at least one recorded reaction.
    pub fn tracked_looks(&self) -> usize {
        self.counts.lock().len()
    }
}
