//! Search policy: budgets applied by the driver.

use crate::error::SearchError;

/// Search budget configuration.
///
/// The budget is observed from inside the loop; exceeding it ends the run
/// with [`crate::search::SearchOutcomeV1::Aborted`], which is distinct from
/// an exhausted frontier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Hard cap on node expansions. `None` means unlimited.
    pub max_expansions: Option<u64>,
}

impl SearchPolicyV1 {
    /// A policy with an expansion cap.
    #[must_use]
    pub fn with_max_expansions(max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }

    /// Validate the policy before any search step is taken.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero expansion cap,
    /// which would abort every non-trivial search before it starts.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Whether `expansions` already used up the budget.
    #[must_use]
    pub fn is_exhausted(&self, expansions: u64) -> bool {
        self.max_expansions.is_some_and(|max| expansions >= max)
    }
}
