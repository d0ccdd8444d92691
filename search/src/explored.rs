//! Explored set (closed set) keyed by state fingerprint.
//!
//! Stands in for a decrease-key priority queue: the frontier keeps every
//! pushed entry, and this table decides on pop whether an entry is stale.
//! Uses a `BTreeMap` so any iteration at serialization boundaries is
//! deterministic.

use std::collections::BTreeMap;

use sweep_kernel::proof::hash::ContentHash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ExploredEntry {
    /// Lowest g with which the state was ever pushed or closed.
    best_g: i64,
    /// g at which the state was last expanded, if it has been.
    closed_g: Option<i64>,
}

/// Fingerprint → best known g, with closed marks.
#[derive(Debug, Default)]
pub struct ExploredSet {
    entries: BTreeMap<ContentHash, ExploredEntry>,
    closed: usize,
}

impl ExploredSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowest g recorded for this state, open or closed.
    #[must_use]
    pub fn best_known_g(&self, fingerprint: &ContentHash) -> Option<i64> {
        self.entries.get(fingerprint).map(|e| e.best_g)
    }

    /// Record that the state was reached with cost `g`.
    ///
    /// Keeps the minimum. Returns `true` if `g` improved on (or is the
    /// first) record.
    pub fn record(&mut self, fingerprint: &ContentHash, g: i64) -> bool {
        match self.entries.get_mut(fingerprint) {
            Some(entry) if g < entry.best_g => {
                entry.best_g = g;
                true
            }
            Some(_) => false,
            None => {
                self.entries.insert(
                    fingerprint.clone(),
                    ExploredEntry {
                        best_g: g,
                        closed_g: None,
                    },
                );
                true
            }
        }
    }

    /// g at which the state was expanded, if it has been.
    #[must_use]
    pub fn closed_g(&self, fingerprint: &ContentHash) -> Option<i64> {
        self.entries.get(fingerprint).and_then(|e| e.closed_g)
    }

    /// Whether an entry popped with cost `g` is stale: the state is already
    /// closed with a g no worse than this one, or a cheaper entry for it
    /// has been pushed since.
    #[must_use]
    pub fn is_stale(&self, fingerprint: &ContentHash, g: i64) -> bool {
        self.entries.get(fingerprint).is_some_and(|entry| {
            entry.best_g < g || entry.closed_g.is_some_and(|closed| closed <= g)
        })
    }

    /// Mark the state closed with cost `g`.
    ///
    /// Returns the previous closed g when this re-opens an already closed
    /// state (only possible with an inconsistent heuristic).
    pub fn close(&mut self, fingerprint: &ContentHash, g: i64) -> Option<i64> {
        let entry = self
            .entries
            .entry(fingerprint.clone())
            .or_insert(ExploredEntry {
                best_g: g,
                closed_g: None,
            });
        entry.best_g = entry.best_g.min(g);
        let previous = entry.closed_g.replace(g);
        if previous.is_none() {
            self.closed += 1;
        }
        previous
    }

    /// Number of states ever recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of states expanded at least once.
    #[must_use]
    pub fn closed_count(&self) -> usize {
        self.closed
    }
}
