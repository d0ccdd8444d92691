//! Harness runner: problem in, rendered path and report out.
//!
//! # Pipeline
//!
//! ```text
//! ProblemFile → ProblemSpec::build() → search() → render_path()
//!                                             → build_report() → RunReport
//! ```
//!
//! The runner owns no search logic; it delegates to `sweep_search`.

use std::fmt::Display;

use sweep_kernel::proof::canon::CanonError;
use sweep_search::contract::SearchDomainV1;
use sweep_search::error::SearchError;
use sweep_search::policy::SearchPolicyV1;
use sweep_search::search::{search, SearchOutcomeV1};
use sweep_search::stats::SearchStatsV1;
use tracing::{info, warn};

use crate::config::{ConfigError, Problem, ProblemFile, ProblemSpec, VacuumProblem};
use crate::render::{render_path, summarize_path, StateLabel};
use crate::report::{build_report, ReportState, SearchReportV1};

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("report encoding failed: {0}")]
    Report(#[from] CanonError),
}

/// Everything a caller needs to present one run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub world_id: String,
    /// `solved`, `no_solution`, or `aborted`.
    pub outcome: &'static str,
    pub total_cost: Option<i64>,
    /// Actions of the solution path, rendered with `Display`.
    pub actions: Vec<String>,
    pub stats: SearchStatsV1,
    /// Boxes-and-arrows depiction, or a one-line status for unsolved runs.
    pub rendered: String,
    /// One-line outcome summary.
    pub summary: String,
    pub report: SearchReportV1,
}

impl RunReport {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome == "solved"
    }
}

/// Build and search the problem described by `file`.
///
/// # Errors
///
/// Returns [`RunError::Config`] if the world cannot be built,
/// [`RunError::Search`] for an invalid policy or domain, and
/// [`RunError::Report`] if the report cannot be encoded.
pub fn run_problem(file: &ProblemFile) -> Result<RunReport, RunError> {
    let policy = file.policy();
    let description = file.problem.describe();
    match file.problem.build()? {
        Problem::Vacuum { world, initial } => run_world(&world, initial, &policy, description),
        Problem::Route { world, start } => run_world(&world, start, &policy, description),
    }
}

/// Search `domain` from `initial` and package the result.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the search fails and
/// [`RunError::Report`] if the report cannot be encoded.
pub fn run_world<D>(
    domain: &D,
    initial: D::State,
    policy: &SearchPolicyV1,
    problem: serde_json::Value,
) -> Result<RunReport, RunError>
where
    D: SearchDomainV1 + ?Sized,
    D::State: StateLabel + ReportState,
    D::Action: Display,
{
    let world_id = domain.domain_id().to_string();
    let result = search(initial, domain, policy)?;
    let report = build_report(&world_id, problem, &result)?;

    let (total_cost, actions, rendered, summary) = match &result.outcome {
        SearchOutcomeV1::Solved(path) => {
            let summary = summarize_path(path);
            info!(
                world = %world_id,
                cost = path.total_cost(),
                steps = path.len(),
                expansions = result.stats.expansions,
                "solved"
            );
            (
                Some(path.total_cost()),
                path.actions().iter().map(ToString::to_string).collect(),
                render_path(path),
                summary,
            )
        }
        SearchOutcomeV1::NoSolution => {
            info!(
                world = %world_id,
                expansions = result.stats.expansions,
                "no solution"
            );
            let line = "no solution: every reachable state was explored".to_string();
            (None, Vec::new(), format!("{line}\n"), line)
        }
        SearchOutcomeV1::Aborted { expansions } => {
            warn!(world = %world_id, expansions, "search aborted by expansion budget");
            let line = format!("aborted after {expansions} expansions");
            (None, Vec::new(), format!("{line}\n"), line)
        }
    };

    Ok(RunReport {
        world_id,
        outcome: result.outcome.kind(),
        total_cost,
        actions,
        stats: result.stats,
        rendered,
        summary,
        report,
    })
}

/// The four classic two-room scenarios, titled.
#[must_use]
pub fn demo_problems() -> Vec<(&'static str, ProblemFile)> {
    let vacuum = |agent: &str, dirty: &[&str]| ProblemFile {
        search: crate::config::SearchSection::default(),
        problem: ProblemSpec::Vacuum(VacuumProblem {
            locations: vec!["A".into(), "B".into()],
            agent: agent.into(),
            dirty: dirty.iter().map(|d| (*d).to_string()).collect(),
        }),
    };
    vec![
        ("agent at A, both rooms dirty", vacuum("A", &["A", "B"])),
        ("agent at B, A dirty, B clean", vacuum("B", &["A"])),
        ("agent at A, A clean, B dirty", vacuum("A", &["B"])),
        ("agent at A, both rooms clean", vacuum("A", &[])),
    ]
}
