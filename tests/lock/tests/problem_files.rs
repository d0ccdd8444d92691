//! Problem files on disk, loaded and run through the harness.

use std::path::PathBuf;

use sweep_harness::config::{ConfigError, ProblemFile};
use sweep_harness::runner::{run_problem, RunError};

fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).expect("write problem file");
    path
}

#[test]
fn vacuum_file_solves_three_room_corridor() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "corridor.toml",
        r#"
[search]
max_expansions = 1000

[problem]
world = "vacuum"
locations = ["A", "B", "C"]
agent = "B"
dirty = ["A", "C"]
"#,
    );
    let run = run_problem(&ProblemFile::load(&path).unwrap()).unwrap();
    assert!(run.is_solved());
    // Clean both ends: left first because MoveLeft is generated before MoveRight.
    assert_eq!(
        run.actions,
        ["MoveLeft", "Suck", "MoveRight", "MoveRight", "Suck"]
    );
    assert_eq!(run.total_cost, Some(5));
}

#[test]
fn custom_route_file_without_path_is_no_solution() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "split.toml",
        r#"
[problem]
world = "route"
from = "West"
to = "East"
metres_per_unit = 800

[[problem.nodes]]
name = "West"
x = 0.0
y = 0.0

[[problem.nodes]]
name = "Middle"
x = 1.0
y = 0.0

[[problem.nodes]]
name = "East"
x = 2.0
y = 0.0

[[problem.roads]]
a = "West"
b = "Middle"
metres = 800
"#,
    );
    let run = run_problem(&ProblemFile::load(&path).unwrap()).unwrap();
    assert_eq!(run.outcome, "no_solution");
    assert_eq!(run.total_cost, None);
    assert!(run.report.value["path"].is_null());
}

#[test]
fn budget_in_file_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "tight.toml",
        "[search]\nmax_expansions = 2\n\n[problem]\nworld = \"route\"\nfrom = \"Taman Kuliner G\"\nto = \"Pecel Lele D\"\n",
    );
    let run = run_problem(&ProblemFile::load(&path).unwrap()).unwrap();
    assert_eq!(run.outcome, "aborted");
    assert_eq!(run.stats.expansions, 2);
}

#[test]
fn malformed_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "broken.toml", "[problem\nworld = ");
    assert!(matches!(
        ProblemFile::load(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn bad_road_surfaces_through_runner() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "negative.toml",
        r#"
[problem]
world = "route"
from = "P"
to = "Q"
metres_per_unit = 1

[[problem.nodes]]
name = "P"
x = 0.0
y = 0.0

[[problem.nodes]]
name = "Q"
x = 1.0
y = 0.0

[[problem.roads]]
a = "P"
b = "Q"
metres = -10
"#,
    );
    let file = ProblemFile::load(&path).unwrap();
    assert!(matches!(
        run_problem(&file),
        Err(RunError::Config(ConfigError::Route(_)))
    ));
}

fn two_node_map(metres: i64) -> String {
    format!(
        r#"
[problem]
world = "route"
from = "P"
to = "Q"
metres_per_unit = 1

[[problem.nodes]]
name = "P"
x = 0.0
y = 0.0

[[problem.nodes]]
name = "Q"
x = 3.0
y = 4.0

[[problem.roads]]
a = "P"
b = "Q"
metres = {metres}
"#
    )
}

#[test]
fn different_custom_maps_have_different_problem_digests() {
    let dir = tempfile::tempdir().unwrap();
    let short = write(&dir, "short.toml", &two_node_map(600));
    let long = write(&dir, "long.toml", &two_node_map(9000));

    let short = run_problem(&ProblemFile::load(&short).unwrap()).unwrap();
    let long = run_problem(&ProblemFile::load(&long).unwrap()).unwrap();
    assert_eq!(short.total_cost, Some(600));
    assert_eq!(long.total_cost, Some(9000));
    assert_ne!(
        short.report.value["problem_digest"],
        long.report.value["problem_digest"]
    );
    assert_eq!(
        short.report.value["problem"]["map"]["roads"][0]["metres"],
        600
    );
}

#[test]
fn custom_map_without_scale_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let body = two_node_map(600).replace("metres_per_unit = 1\n", "");
    let path = write(&dir, "unscaled.toml", &body);
    assert!(matches!(
        run_problem(&ProblemFile::load(&path).unwrap()),
        Err(RunError::Config(ConfigError::MissingScale))
    ));
}
