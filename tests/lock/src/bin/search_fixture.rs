//! Binary that runs the demo scenarios and one culinary route through the
//! harness runner and prints deterministic output lines for
//! cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: `<case>.<key>=<value>` lines (see source for format).

use sweep_harness::config::{ProblemFile, ProblemSpec, RouteProblem, SearchSection};
use sweep_harness::runner::{demo_problems, run_problem};

fn main() {
    let mut cases: Vec<ProblemFile> = demo_problems().into_iter().map(|(_, file)| file).collect();
    cases.push(ProblemFile {
        search: SearchSection::default(),
        problem: ProblemSpec::Route(RouteProblem {
            from: "Warung Sate A".into(),
            to: "Nasi Goreng F".into(),
            metres_per_unit: None,
            nodes: Vec::new(),
            roads: Vec::new(),
        }),
    });

    for (i, file) in cases.iter().enumerate() {
        let run = run_problem(file).expect("fixture run failed");
        let case = format!("case_{i}");
        println!("{case}.world={}", run.world_id);
        println!("{case}.outcome={}", run.outcome);
        println!(
            "{case}.total_cost={}",
            run.total_cost.map_or_else(|| "none".to_string(), |c| c.to_string())
        );
        println!("{case}.actions={}", run.actions.join(","));
        println!("{case}.expansions={}", run.stats.expansions);
        println!("{case}.nodes_created={}", run.stats.nodes_created);
        println!("{case}.report_digest={}", run.report.digest.as_str());
    }
}
