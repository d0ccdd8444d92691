//! Search entry point and expansion loop.

use std::fmt::Debug;

use sweep_kernel::carrier::identity::StateIdentity;
use tracing::{debug, trace};

use crate::contract::{FnDomain, SearchDomainV1, Successor};
use crate::error::{DomainError, SearchError};
use crate::explored::ExploredSet;
use crate::frontier::BestFirstFrontier;
use crate::node::{NodeId, SearchNodeV1};
use crate::path::{PathStep, SolutionPath};
use crate::policy::SearchPolicyV1;
use crate::stats::SearchStatsV1;

/// How a search run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcomeV1<S, A> {
    /// A goal was popped; the path runs from the initial state to it.
    Solved(SolutionPath<S, A>),
    /// The frontier emptied without reaching a goal.
    NoSolution,
    /// The expansion budget ran out before a goal was popped.
    Aborted { expansions: u64 },
}

impl<S, A> SearchOutcomeV1<S, A> {
    /// Stable snake-case tag for logs and reports.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Solved(_) => "solved",
            Self::NoSolution => "no_solution",
            Self::Aborted { .. } => "aborted",
        }
    }
}

/// Result of a search run: the outcome plus run counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<S, A> {
    pub outcome: SearchOutcomeV1<S, A>,
    pub stats: SearchStatsV1,
}

impl<S, A> SearchResult<S, A> {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, SearchOutcomeV1::Solved(_))
    }

    /// The solution path, if the run was solved.
    #[must_use]
    pub fn path(&self) -> Option<&SolutionPath<S, A>> {
        match &self.outcome {
            SearchOutcomeV1::Solved(path) => Some(path),
            _ => None,
        }
    }
}

/// Run A* from `initial` over `domain`.
///
/// Every node created during the run lives in an append-only arena until
/// the run ends, so any of them can still serve as a parent during path
/// reconstruction. Each call owns its own frontier, explored set, and
/// arena.
///
/// With non-negative step costs and an admissible, consistent heuristic,
/// the first goal popped has minimum g. Ties on f are broken by frontier
/// insertion order, which follows successor generation order, so repeated
/// runs return identical paths.
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] if `policy` fails pre-flight validation.
/// - [`SearchError::InvalidDomain`] if `initial` fails
///   [`SearchDomainV1::validate_state`], or on the first negative step cost,
///   zero-cost self loop, negative heuristic, cost overflow, or error
///   reported by [`SearchDomainV1::successors`].
pub fn search<D>(
    initial: D::State,
    domain: &D,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<D::State, D::Action>, SearchError>
where
    D: SearchDomainV1 + ?Sized,
{
    policy.validate()?;

    let mut arena: Vec<SearchNodeV1<D::State, D::Action>> = Vec::new();
    let mut frontier = BestFirstFrontier::new();
    let mut explored = ExploredSet::new();
    let mut stats = SearchStatsV1::default();

    domain.validate_state(&initial)?;
    let root_h = checked_heuristic(domain, &initial)?;
    let root_fp = initial.fingerprint();
    let root = SearchNodeV1::root(NodeId::new(0), initial, root_fp.clone(), root_h);
    explored.record(&root_fp, 0);
    frontier.push(root.node_id(), root.f_cost());
    arena.push(root);
    stats.nodes_created = 1;

    debug!(domain = domain.domain_id(), root_h, "search started");

    let outcome = loop {
        let Some((key, current_id)) = frontier.pop() else {
            break SearchOutcomeV1::NoSolution;
        };
        let current = &arena[current_id.index()];
        let current_g = current.g_cost();
        let current_fp = current.state_fingerprint().clone();

        if explored.is_stale(&current_fp, current_g) {
            stats.stale_pops_skipped += 1;
            trace!(node = current_id.index(), g = current_g, "stale pop skipped");
            continue;
        }
        if explored.close(&current_fp, current_g).is_some() {
            stats.states_reopened += 1;
        }

        if domain.is_goal(current.state()) {
            debug!(
                node = current_id.index(),
                cost = current_g,
                expansions = stats.expansions,
                "goal reached"
            );
            break SearchOutcomeV1::Solved(reconstruct_path(&arena, current_id));
        }

        if policy.is_exhausted(stats.expansions) {
            break SearchOutcomeV1::Aborted {
                expansions: stats.expansions,
            };
        }

        let successors = domain.successors(current.state())?;
        stats.expansions += 1;
        debug!(
            node = current_id.index(),
            f = key.f_cost,
            g = current_g,
            successors = successors.len(),
            "expanding"
        );

        for successor in successors {
            let Successor {
                state,
                action,
                step_cost,
            } = successor;
            let child_fp = state.fingerprint();
            let next_g = checked_step(current_g, step_cost, &action, child_fp == current_fp)?;

            if explored
                .best_known_g(&child_fp)
                .is_some_and(|best| best <= next_g)
            {
                stats.duplicates_suppressed += 1;
                continue;
            }

            let h = checked_heuristic(domain, &state)?;
            explored.record(&child_fp, next_g);
            let child_id = NodeId::new(arena.len());
            let child = SearchNodeV1::child(
                child_id,
                &arena[current_id.index()],
                state,
                child_fp,
                action,
                next_g,
                h,
            );
            frontier.push(child_id, child.f_cost());
            arena.push(child);
            stats.nodes_created += 1;
        }
    };

    stats.frontier_high_water = frontier.high_water();
    debug!(
        outcome = outcome.kind(),
        expansions = stats.expansions,
        nodes = stats.nodes_created,
        closed = explored.closed_count(),
        "search finished"
    );

    Ok(SearchResult { outcome, stats })
}

/// Run A* from `initial` with plain closures and no budget.
///
/// `successors` returns `(next_state, action, step_cost)` tuples.
///
/// # Errors
///
/// Same as [`search`].
pub fn search_fn<S, A, FS, FG, FH>(
    initial: S,
    successors: FS,
    is_goal: FG,
    heuristic: FH,
) -> Result<SearchResult<S, A>, SearchError>
where
    S: Clone + Eq + Debug + StateIdentity,
    A: Clone + Debug,
    FS: Fn(&S) -> Vec<(S, A, i64)>,
    FG: Fn(&S) -> bool,
    FH: Fn(&S) -> i64,
{
    let domain = FnDomain::new(successors, is_goal, heuristic);
    search(initial, &domain, &SearchPolicyV1::default())
}

/// Reconstruct the path from the root to `goal_id` by following parent
/// indices, then reversing.
#[must_use]
pub fn reconstruct_path<S: Clone, A: Clone>(
    arena: &[SearchNodeV1<S, A>],
    goal_id: NodeId,
) -> SolutionPath<S, A> {
    let mut steps = Vec::new();
    let mut cursor = Some(goal_id);

    while let Some(id) = cursor {
        let node = &arena[id.index()];
        steps.push(PathStep {
            state: node.state().clone(),
            action: node.producing_action().cloned(),
            g: node.g_cost(),
            h: node.h_cost(),
            f: node.f_cost(),
        });
        cursor = node.parent_id();
    }

    steps.reverse();
    SolutionPath::from_reconstructed(steps)
}

fn checked_heuristic<D>(domain: &D, state: &D::State) -> Result<i64, DomainError>
where
    D: SearchDomainV1 + ?Sized,
{
    let h = domain.heuristic(state);
    if h < 0 {
        return Err(DomainError::NegativeHeuristic { h });
    }
    Ok(h)
}

fn checked_step<A: Debug>(
    g: i64,
    step_cost: i64,
    action: &A,
    is_self_loop: bool,
) -> Result<i64, DomainError> {
    if step_cost < 0 {
        return Err(DomainError::NegativeStepCost {
            action: format!("{action:?}"),
            cost: step_cost,
        });
    }
    if step_cost == 0 && is_self_loop {
        return Err(DomainError::ZeroCostSelfLoop {
            action: format!("{action:?}"),
        });
    }
    g.checked_add(step_cost)
        .ok_or(DomainError::CostOverflow { g, step_cost })
}
