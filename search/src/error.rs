//! Typed search errors.
//!
//! `SearchError` is fatal: the run stops at the first malformed input and
//! no partial result is returned. Exhausting the frontier or the expansion
//! budget is not an error; those are [`crate::search::SearchOutcomeV1`]
//! variants.

use sweep_kernel::carrier::location::Location;
use sweep_kernel::carrier::room_state::StateError;

/// A domain produced input the search cannot account for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A successor refers to a location the state does not contain.
    #[error("successor references unknown location {location}")]
    UnknownLocation { location: Location },
    /// A successor state could not be built.
    #[error("malformed successor state: {detail}")]
    MalformedState { detail: String },
    /// Step costs must be non-negative.
    #[error("negative step cost {cost} for action {action}")]
    NegativeStepCost { action: String, cost: i64 },
    /// A zero-cost successor equal to its own parent can never make progress.
    #[error("zero-cost self loop via action {action}")]
    ZeroCostSelfLoop { action: String },
    /// Heuristic estimates must be non-negative.
    #[error("negative heuristic estimate {h}")]
    NegativeHeuristic { h: i64 },
    /// Accumulated path cost does not fit in `i64`.
    #[error("path cost overflow: {g} + {step_cost}")]
    CostOverflow { g: i64, step_cost: i64 },
}

impl From<StateError> for DomainError {
    fn from(err: StateError) -> Self {
        match err {
            StateError::UnknownLocation { location } => Self::UnknownLocation { location },
            other @ (StateError::NoRooms | StateError::DuplicateRoom { .. }) => {
                Self::MalformedState {
                    detail: other.to_string(),
                }
            }
        }
    }
}

/// Typed failure of a search run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The domain supplied a malformed successor, cost, or heuristic.
    #[error("invalid domain: {0}")]
    InvalidDomain(#[from] DomainError),
    /// Pre-flight policy validation failed; no search steps were taken.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
