//! Attempt budgets for the heuristic strategies.
//!
//! The bottleneck and forced strategies insert candidate edges one at a time
//! and re-measure connectivity after each. [`AttemptBudget`] caps how many
//! insertions a strategy may spend; it is the only bound on worst-case work
//! in the pipeline. Exhaustion is not an error: the strategy simply stops and
//! the orchestrator falls through.

use std::time::{Duration, Instant};

/// Default insertion budget for bottleneck targeting.
pub const DEFAULT_STRATEGIC_BUDGET: usize = 5;

/// Default insertion budget for the forced fallback.
pub const DEFAULT_FORCED_BUDGET: usize = 10;

/// Counts insertions against a fixed limit.
///
/// Create one per strategy invocation and call
/// [`try_consume`](AttemptBudget::try_consume) before every insertion. The
/// budget is intentionally non-`Clone` so that each strategy run owns
/// exactly one.
///
/// # Example
///
/// ```
/// use ruvector_augment::budget::AttemptBudget;
///
/// let mut budget = AttemptBudget::new(2);
/// assert!(budget.try_consume());
/// assert!(budget.try_consume());
/// assert!(!budget.try_consume());
/// assert!(budget.is_exhausted());
/// ```
#[derive(Debug)]
pub struct AttemptBudget {
    /// Monotonic clock snapshot taken when the budget was created.
    start_time: Instant,
    /// Maximum number of insertions.
    limit: usize,
    /// Insertions consumed so far.
    used: usize,
}

impl AttemptBudget {
    /// Create a budget allowing `limit` insertions.
    pub fn new(limit: usize) -> Self {
        Self {
            start_time: Instant::now(),
            limit,
            used: 0,
        }
    }

    /// Claim one insertion. Returns `false` once the limit is reached, in
    /// which case nothing is consumed.
    pub fn try_consume(&mut self) -> bool {
        if self.used >= self.limit {
            return false;
        }
        self.used += 1;
        true
    }

    /// Whether no further insertion is allowed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.used >= self.limit
    }

    /// Insertions consumed so far.
    #[inline]
    pub fn used(&self) -> usize {
        self.used
    }

    /// Insertions still available.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.limit - self.used
    }

    /// The configured limit.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Wall-clock duration since the budget was created.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Wall-clock microseconds since the budget was created.
    #[inline]
    pub fn elapsed_us(&self) -> u64 {
        self.start_time.elapsed().as_micros() as u64
    }
}
