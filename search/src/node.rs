//! Search nodes and the frontier ordering key.

use sweep_kernel::proof::hash::ContentHash;

/// Index of a node in the driver's append-only arena.
///
/// Parents are referenced by index, never by ownership, so nodes form no
/// ownership cycles and stay alive until the run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An immutable search node.
///
/// `f_cost` is fixed at construction as `g_cost + h_cost` (saturating). A
/// cheaper route to the same state produces a new node rather than
/// updating this one.
#[derive(Debug, Clone)]
pub struct SearchNodeV1<S, A> {
    node_id: NodeId,
    parent_id: Option<NodeId>,
    state: S,
    state_fingerprint: ContentHash,
    producing_action: Option<A>,
    depth: u32,
    g_cost: i64,
    h_cost: i64,
    f_cost: i64,
}

impl<S, A> SearchNodeV1<S, A> {
    /// The root node: no parent, no action, `g = 0`.
    #[must_use]
    pub fn root(node_id: NodeId, state: S, state_fingerprint: ContentHash, h_cost: i64) -> Self {
        Self {
            node_id,
            parent_id: None,
            state,
            state_fingerprint,
            producing_action: None,
            depth: 0,
            g_cost: 0,
            h_cost,
            f_cost: h_cost,
        }
    }

    /// A node reached from `parent` via `action`.
    #[must_use]
    pub fn child(
        node_id: NodeId,
        parent: &Self,
        state: S,
        state_fingerprint: ContentHash,
        action: A,
        g_cost: i64,
        h_cost: i64,
    ) -> Self {
        Self {
            node_id,
            parent_id: Some(parent.node_id),
            state,
            state_fingerprint,
            producing_action: Some(action),
            depth: parent.depth.saturating_add(1),
            g_cost,
            h_cost,
            f_cost: g_cost.saturating_add(h_cost),
        }
    }

    #[must_use]
    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    #[must_use]
    pub fn parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[must_use]
    pub fn state_fingerprint(&self) -> &ContentHash {
        &self.state_fingerprint
    }

    /// The action that produced this node (`None` for the root).
    #[must_use]
    pub fn producing_action(&self) -> Option<&A> {
        self.producing_action.as_ref()
    }

    /// Tree depth (root = 0).
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Accumulated path cost from the root.
    #[must_use]
    pub fn g_cost(&self) -> i64 {
        self.g_cost
    }

    /// Heuristic estimate of the remaining cost.
    #[must_use]
    pub fn h_cost(&self) -> i64 {
        self.h_cost
    }

    /// `g_cost + h_cost`, the frontier ordering key.
    #[must_use]
    pub fn f_cost(&self) -> i64 {
        self.f_cost
    }
}

/// The frontier ordering key: `(f_cost, sequence)`.
///
/// Lower `f_cost` first; among equal `f_cost`, the entry inserted first
/// wins. `sequence` is assigned by the frontier on push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: i64,
    pub sequence: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.sequence.cmp(&other.sequence))
    }
}
