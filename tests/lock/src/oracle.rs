//! Exhaustive optimal-cost oracle.
//!
//! Enumerates every state reachable from the initial state, then relaxes
//! all edges Bellman-Ford style until no distance improves. Shares no code
//! with the A* driver beyond the domain contract, so it can check the
//! driver's optimality claim.

use std::collections::BTreeMap;

use sweep_kernel::carrier::identity::StateIdentity;
use sweep_kernel::proof::hash::ContentHash;
use sweep_search::contract::SearchDomainV1;

/// The reachable state graph of a domain.
pub struct StateGraph<S> {
    pub states: Vec<S>,
    /// `(from, to, cost)` by state index.
    pub edges: Vec<(usize, usize, i64)>,
}

/// Enumerate all states reachable from `initial`.
///
/// # Panics
///
/// Panics if the domain reports an error while expanding.
pub fn reachable<D: SearchDomainV1>(domain: &D, initial: D::State) -> StateGraph<D::State> {
    let mut index: BTreeMap<ContentHash, usize> = BTreeMap::new();
    let mut states = vec![initial.clone()];
    let mut edges = Vec::new();
    index.insert(initial.fingerprint(), 0);

    let mut cursor = 0;
    while cursor < states.len() {
        let successors = domain
            .successors(&states[cursor])
            .expect("oracle: domain expansion failed");
        for succ in successors {
            let fp = succ.state.fingerprint();
            let to = match index.get(&fp) {
                Some(&i) => i,
                None => {
                    states.push(succ.state);
                    index.insert(fp, states.len() - 1);
                    states.len() - 1
                }
            };
            edges.push((cursor, to, succ.step_cost));
        }
        cursor += 1;
    }
    StateGraph { states, edges }
}

/// Minimum cost from `initial` to any goal state, or `None` if no goal is
/// reachable.
///
/// # Panics
///
/// Panics if the domain reports an error while expanding.
#[must_use]
pub fn cheapest_goal_cost<D: SearchDomainV1>(domain: &D, initial: D::State) -> Option<i64> {
    let graph = reachable(domain, initial);
    let mut dist: Vec<Option<i64>> = vec![None; graph.states.len()];
    dist[0] = Some(0);

    loop {
        let mut changed = false;
        for &(from, to, cost) in &graph.edges {
            let Some(base) = dist[from] else { continue };
            let candidate = base + cost;
            match dist[to] {
                Some(known) if known <= candidate => {}
                _ => {
                    dist[to] = Some(candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    graph
        .states
        .iter()
        .zip(&dist)
        .filter(|(state, _)| domain.is_goal(state))
        .filter_map(|(_, d)| *d)
        .min()
}
