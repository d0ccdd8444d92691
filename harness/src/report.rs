//! Canonical JSON search reports.
//!
//! A report captures the problem (with its `ProblemConfig` digest), the
//! outcome, the path if any, and the run counters. Its bytes are canonical
//! JSON, and its digest is the `SearchReport`-domain content hash of those
//! bytes. Two runs over the same problem produce byte-identical reports.

use std::fmt::Display;

use sweep_kernel::carrier::location::Location;
use sweep_kernel::carrier::room_state::RoomStateV1;
use sweep_kernel::proof::canon::{canonical_json_bytes, CanonError};
use sweep_kernel::proof::hash::{canonical_hash, ContentHash};
use sweep_kernel::proof::hash_domain::HashDomain;
use sweep_search::search::{SearchOutcomeV1, SearchResult};

/// Report format version.
pub const REPORT_SCHEMA_VERSION: &str = "search_report.v1";

/// JSON form of a state inside a report. Must contain integers only.
pub trait ReportState {
    fn report_value(&self) -> serde_json::Value;
}

impl ReportState for RoomStateV1 {
    fn report_value(&self) -> serde_json::Value {
        let rooms: serde_json::Map<String, serde_json::Value> = self
            .rooms()
            .map(|(room, status)| (room.to_string(), status.as_str().into()))
            .collect();
        serde_json::json!({
            "agent": self.agent().as_str(),
            "rooms": rooms,
        })
    }
}

impl ReportState for Location {
    fn report_value(&self) -> serde_json::Value {
        self.as_str().into()
    }
}

/// A finished report: the JSON value, its canonical bytes, and their digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReportV1 {
    pub value: serde_json::Value,
    pub bytes: Vec<u8>,
    pub digest: ContentHash,
}

impl SearchReportV1 {
    /// Canonical bytes as UTF-8 text.
    #[must_use]
    pub fn as_json_str(&self) -> &str {
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }
}

/// Build a report for one run.
///
/// # Errors
///
/// Returns [`CanonError`] if a state or problem description contains a
/// non-integer number.
pub fn build_report<S, A>(
    world_id: &str,
    problem: serde_json::Value,
    result: &SearchResult<S, A>,
) -> Result<SearchReportV1, CanonError>
where
    S: ReportState,
    A: Display,
{
    let (path, total_cost, aborted_after) = match &result.outcome {
        SearchOutcomeV1::Solved(path) => {
            let steps: Vec<serde_json::Value> = path
                .steps()
                .iter()
                .enumerate()
                .map(|(i, step)| {
                    serde_json::json!({
                        "index": i,
                        "state": step.state.report_value(),
                        "action": step.action.as_ref().map(ToString::to_string),
                        "g": step.g,
                        "h": step.h,
                        "f": step.f,
                    })
                })
                .collect();
            (
                serde_json::Value::Array(steps),
                serde_json::Value::from(path.total_cost()),
                serde_json::Value::Null,
            )
        }
        SearchOutcomeV1::NoSolution => (
            serde_json::Value::Null,
            serde_json::Value::Null,
            serde_json::Value::Null,
        ),
        SearchOutcomeV1::Aborted { expansions } => (
            serde_json::Value::Null,
            serde_json::Value::Null,
            serde_json::Value::from(*expansions),
        ),
    };

    let problem_bytes = canonical_json_bytes(&problem)?;
    let problem_digest = canonical_hash(HashDomain::ProblemConfig, &problem_bytes);

    let value = serde_json::json!({
        "schema_version": REPORT_SCHEMA_VERSION,
        "world": world_id,
        "problem": problem,
        "problem_digest": problem_digest.as_str(),
        "outcome": result.outcome.kind(),
        "aborted_after": aborted_after,
        "path": path,
        "total_cost": total_cost,
        "stats": result.stats.to_json_value(),
    });
    let bytes = canonical_json_bytes(&value)?;
    let digest = canonical_hash(HashDomain::SearchReport, &bytes);
    Ok(SearchReportV1 {
        value,
        bytes,
        digest,
    })
}
