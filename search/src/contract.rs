//! Search domain contract.

use std::fmt::Debug;
use std::marker::PhantomData;

use sweep_kernel::carrier::identity::StateIdentity;

use crate::error::DomainError;

/// One result of expanding a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub step_cost: i64,
}

impl<S, A> Successor<S, A> {
    #[must_use]
    pub fn new(state: S, action: A, step_cost: i64) -> Self {
        Self {
            state,
            action,
            step_cost,
        }
    }
}

/// Trait for state spaces the A* driver can search.
///
/// # Contract
///
/// - `successors` must be deterministic: same state → same successors in
///   the same order. The order decides which of several equal-cost paths
///   is returned.
/// - Step costs must be non-negative. A zero-cost successor equal to its
///   parent is rejected by the driver.
/// - `heuristic` must be non-negative. For the returned path to be optimal
///   it must also be admissible (never overestimate the remaining cost)
///   and consistent. Admissibility is not checked at runtime.
pub trait SearchDomainV1 {
    type State: Clone + Eq + Debug + StateIdentity;
    type Action: Clone + Debug;

    /// Stable identifier used in logs and reports.
    fn domain_id(&self) -> &str;

    /// Enumerate the successors of `state` in a fixed order.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] when `state` cannot be expanded consistently,
    /// e.g. it references a location the world does not know.
    fn successors(
        &self,
        state: &Self::State,
    ) -> Result<Vec<Successor<Self::State, Self::Action>>, DomainError>;

    /// Check that `state` belongs to this domain. The driver calls it on
    /// the initial state before the first goal test.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] for a state the domain cannot account for.
    fn validate_state(&self, _state: &Self::State) -> Result<(), DomainError> {
        Ok(())
    }

    /// Test whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Lower-bound estimate of the remaining cost from `state`.
    fn heuristic(&self, state: &Self::State) -> i64;
}

/// A domain assembled from plain closures.
///
/// `successors` returns `(next_state, action, step_cost)` tuples.
pub struct FnDomain<S, A, FS, FG, FH> {
    successors: FS,
    is_goal: FG,
    heuristic: FH,
    _marker: PhantomData<fn(&S) -> A>,
}

impl<S, A, FS, FG, FH> FnDomain<S, A, FS, FG, FH>
where
    FS: Fn(&S) -> Vec<(S, A, i64)>,
    FG: Fn(&S) -> bool,
    FH: Fn(&S) -> i64,
{
    #[must_use]
    pub fn new(successors: FS, is_goal: FG, heuristic: FH) -> Self {
        Self {
            successors,
            is_goal,
            heuristic,
            _marker: PhantomData,
        }
    }
}

impl<S, A, FS, FG, FH> SearchDomainV1 for FnDomain<S, A, FS, FG, FH>
where
    S: Clone + Eq + Debug + StateIdentity,
    A: Clone + Debug,
    FS: Fn(&S) -> Vec<(S, A, i64)>,
    FG: Fn(&S) -> bool,
    FH: Fn(&S) -> i64,
{
    type State = S;
    type Action = A;

    #[allow(clippy::unnecessary_literal_bound)]
    fn domain_id(&self) -> &str {
        "closure"
    }

    fn successors(&self, state: &S) -> Result<Vec<Successor<S, A>>, DomainError> {
        Ok((self.successors)(state)
            .into_iter()
            .map(|(next, action, cost)| Successor::new(next, action, cost))
            .collect())
    }

    fn is_goal(&self, state: &S) -> bool {
        (self.is_goal)(state)
    }

    fn heuristic(&self, state: &S) -> i64 {
        (self.heuristic)(state)
    }
}
