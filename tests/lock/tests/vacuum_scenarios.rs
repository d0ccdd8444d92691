//! The four classic two-room scenarios, end to end through `search`.
//!
//! Proves, for each scenario:
//! 1. The returned action sequence and total cost
//! 2. The final state is a goal and no earlier state is
//! 3. Per-step g, h, f bookkeeping (f = g + h, g strictly increasing)

use sweep_harness::worlds::vacuum::{VacuumAction, VacuumWorld};
use sweep_kernel::carrier::location::Location;
use sweep_kernel::carrier::room_state::RoomStateV1;
use sweep_search::policy::SearchPolicyV1;
use sweep_search::search::{search, SearchOutcomeV1};
use sweep_search::SolutionPath;

use VacuumAction::{MoveLeft, MoveRight, Suck};

fn solve(agent: &str, dirty: &[&str]) -> SolutionPath<RoomStateV1, VacuumAction> {
    let world = VacuumWorld::two_room();
    let dirty: Vec<Location> = dirty.iter().map(|d| Location::from(*d)).collect();
    let initial = world
        .initial_state(&Location::from(agent), &dirty)
        .expect("valid scenario");
    let result = search(initial, &world, &SearchPolicyV1::default()).expect("search succeeds");
    match result.outcome {
        SearchOutcomeV1::Solved(path) => path,
        other => panic!("expected a solution, got {}", other.kind()),
    }
}

fn assert_goal_only_at_end(path: &SolutionPath<RoomStateV1, VacuumAction>) {
    let steps = path.steps();
    assert!(
        path.final_state().is_goal(),
        "final state must be all clean: {:?}",
        path.final_state()
    );
    for step in &steps[..steps.len() - 1] {
        assert!(!step.state.is_goal(), "intermediate state is a goal: {:?}", step.state);
    }
}

fn assert_costs_consistent(path: &SolutionPath<RoomStateV1, VacuumAction>) {
    for window in path.steps().windows(2) {
        assert_eq!(window[1].g, window[0].g + 1, "every vacuum action costs 1");
    }
    for step in path.steps() {
        assert_eq!(step.f, step.g + step.h, "f must equal g + h");
        let dirty = i64::try_from(step.state.dirty_count()).unwrap();
        assert_eq!(step.h, dirty, "h must count dirty rooms");
    }
}

#[test]
fn scenario_both_dirty_agent_at_a() {
    let path = solve("A", &["A", "B"]);
    assert_eq!(path.actions(), vec![&Suck, &MoveRight, &Suck]);
    assert_eq!(path.total_cost(), 3);
    assert_goal_only_at_end(&path);
    assert_costs_consistent(&path);
}

#[test]
fn scenario_agent_at_b_only_a_dirty() {
    let path = solve("B", &["A"]);
    assert_eq!(path.actions(), vec![&MoveLeft, &Suck]);
    assert_eq!(path.total_cost(), 2);
    assert_eq!(path.final_state().agent().as_str(), "A");
    assert_goal_only_at_end(&path);
    assert_costs_consistent(&path);
}

#[test]
fn scenario_agent_at_a_only_b_dirty() {
    let path = solve("A", &["B"]);
    assert_eq!(path.actions(), vec![&MoveRight, &Suck]);
    assert_eq!(path.total_cost(), 2);
    assert_goal_only_at_end(&path);
    assert_costs_consistent(&path);
}

#[test]
fn scenario_all_clean_is_single_step() {
    let path = solve("A", &[]);
    assert_eq!(path.len(), 1);
    assert!(path.actions().is_empty());
    assert_eq!(path.total_cost(), 0);
    assert!(path.initial_state().is_goal());
}

#[test]
fn scenario_both_dirty_stats() {
    let world = VacuumWorld::two_room();
    let initial = world
        .initial_state(&Location::from("A"), &[Location::from("A"), Location::from("B")])
        .unwrap();
    let result = search(initial, &world, &SearchPolicyV1::default()).unwrap();
    assert_eq!(result.stats.expansions, 5);
    assert_eq!(result.stats.stale_pops_skipped, 0);
    assert_eq!(result.stats.states_reopened, 0);
}
