//! In-process determinism.
//!
//! Proves:
//! 1. Repeated runs return identical paths, stats, and report bytes
//! 2. State construction order never reaches the search or the report

use sweep_harness::config::ProblemFile;
use sweep_harness::runner::{demo_problems, run_problem, run_world};
use sweep_harness::worlds::vacuum::VacuumWorld;
use sweep_kernel::carrier::identity::StateIdentity;
use sweep_kernel::carrier::location::Location;
use sweep_kernel::carrier::room_state::{RoomStateV1, Status};
use sweep_search::policy::SearchPolicyV1;

const RUNS: usize = 10;

#[test]
fn demo_runs_are_byte_identical() {
    for (title, problem) in demo_problems() {
        let first = run_problem(&problem).unwrap();
        for _ in 1..RUNS {
            let again = run_problem(&problem).unwrap();
            assert_eq!(again.actions, first.actions, "{title}: actions differ");
            assert_eq!(again.stats, first.stats, "{title}: stats differ");
            assert_eq!(again.report.bytes, first.report.bytes, "{title}: report differs");
            assert_eq!(again.rendered, first.rendered, "{title}: rendering differs");
        }
    }
}

#[test]
fn route_runs_are_byte_identical() {
    let problem = ProblemFile::from_toml_str(
        "[problem]\nworld = \"route\"\nfrom = \"Taman Kuliner G\"\nto = \"Pecel Lele D\"\n",
    )
    .unwrap();
    let first = run_problem(&problem).unwrap();
    assert!(first.is_solved());
    for _ in 1..RUNS {
        let again = run_problem(&problem).unwrap();
        assert_eq!(again.report.digest, first.report.digest);
    }
}

#[test]
fn room_insertion_order_does_not_matter() {
    let rooms = [
        (Location::from("A"), Status::Dirty),
        (Location::from("B"), Status::Clean),
        (Location::from("C"), Status::Dirty),
    ];
    let mut reversed = rooms.clone();
    reversed.reverse();

    let forward = RoomStateV1::new(Location::from("B"), rooms).unwrap();
    let backward = RoomStateV1::new(Location::from("B"), reversed).unwrap();
    assert_eq!(forward, backward);
    assert_eq!(forward.fingerprint(), backward.fingerprint());

    let world = VacuumWorld::new(["A", "B", "C"].map(Location::from)).unwrap();
    let policy = SearchPolicyV1::default();
    let a = run_world(&world, forward, &policy, serde_json::Value::Null).unwrap();
    let b = run_world(&world, backward, &policy, serde_json::Value::Null).unwrap();
    assert_eq!(a.report.bytes, b.report.bytes);
}
