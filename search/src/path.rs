//! Solution paths.

/// One step of a solution: the state reached, the action that reached it,
/// and its costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep<S, A> {
    pub state: S,
    /// `None` for the initial state.
    pub action: Option<A>,
    pub g: i64,
    pub h: i64,
    pub f: i64,
}

/// Ordered steps from the initial state to a goal state.
///
/// Never empty: a search whose initial state is already a goal yields a
/// single step with no action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionPath<S, A> {
    steps: Vec<PathStep<S, A>>,
}

impl<S, A> SolutionPath<S, A> {
    /// Wrap reconstructed steps. Returns `None` for an empty list.
    #[must_use]
    pub fn new(steps: Vec<PathStep<S, A>>) -> Option<Self> {
        if steps.is_empty() {
            None
        } else {
            Some(Self { steps })
        }
    }

    /// Wrap steps reconstructed from a goal node, which always yields at
    /// least the root step.
    pub(crate) fn from_reconstructed(steps: Vec<PathStep<S, A>>) -> Self {
        debug_assert!(!steps.is_empty());
        Self { steps }
    }

    #[must_use]
    pub fn steps(&self) -> &[PathStep<S, A>] {
        &self.steps
    }

    #[must_use]
    pub fn into_steps(self) -> Vec<PathStep<S, A>> {
        self.steps
    }

    /// Number of steps, including the initial state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Actions taken, in order. Empty when the initial state is a goal.
    #[must_use]
    pub fn actions(&self) -> Vec<&A> {
        self.steps.iter().filter_map(|s| s.action.as_ref()).collect()
    }

    /// g of the final step.
    #[must_use]
    pub fn total_cost(&self) -> i64 {
        self.steps.last().map_or(0, |s| s.g)
    }

    #[must_use]
    pub fn initial_state(&self) -> &S {
        &self.steps[0].state
    }

    #[must_use]
    pub fn final_state(&self) -> &S {
        &self.steps[self.steps.len() - 1].state
    }
}
