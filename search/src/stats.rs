//! Run counters.

/// Aggregate counters for one search run.
///
/// Counters are deterministic for identical inputs, so they are part of
/// the reproducibility surface alongside the path itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatsV1 {
    /// Nodes whose successors were generated.
    pub expansions: u64,
    /// Nodes allocated in the arena (root included).
    pub nodes_created: u64,
    /// Frontier pops discarded because the state was already closed with
    /// a g no worse than the popped entry, or because a cheaper entry for
    /// the state was pushed after this one.
    pub stale_pops_skipped: u64,
    /// Successors dropped because their state was already recorded with a
    /// g no worse than the proposed one.
    pub duplicates_suppressed: u64,
    /// Closed states expanded again with a cheaper g.
    pub states_reopened: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

impl SearchStatsV1 {
    /// JSON object with sorted keys and integer values.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "duplicates_suppressed": self.duplicates_suppressed,
            "expansions": self.expansions,
            "frontier_high_water": self.frontier_high_water,
            "nodes_created": self.nodes_created,
            "stale_pops_skipped": self.stale_pops_skipped,
            "states_reopened": self.states_reopened,
        })
    }
}
