use crate::aa::{AAError, AbortReason};
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A handle used to cancel a running search from another thread.
///
/// Cloned handles share the same state.
#[derive(Debug, Clone, Default)]
pub struct Interrupter {
    flag: Arc<AtomicBool>,
}

impl Interrupter {
    /// Requests the searches sharing this handle to stop.
    pub fn interrupt(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns `true` iff an interruption has been requested.
    pub fn is_interrupted(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// The limits given to an exhaustive search.
///
/// A search that exceeds its budget fails with [`AAError::ComputationAborted`] instead of returning a truncated result.
///
/// # Example
///
/// ```
/// # use argtrust::utils::SearchBudget;
/// # use std::time::Duration;
/// let budget = SearchBudget::unlimited()
///     .with_timeout(Duration::from_secs(60))
///     .with_max_candidates(1 << 20);
/// let interrupter = budget.interrupter();
/// std::thread::spawn(move || interrupter.interrupt());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchBudget {
    timeout: Option<Duration>,
    max_candidates: Option<usize>,
    interrupter: Interrupter,
}

impl SearchBudget {
    /// Builds a budget with no limit.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Sets the maximal wall-clock time of a search.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the maximal number of candidate sets a search may visit.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = Some(max_candidates);
        self
    }

    /// Replaces the interruption handle of this budget.
    pub fn with_interrupter(mut self, interrupter: Interrupter) -> Self {
        self.interrupter = interrupter;
        self
    }

    /// Returns a handle that can be used to interrupt the searches using this budget.
    pub fn interrupter(&self) -> Interrupter {
        self.interrupter.clone()
    }

    pub(crate) fn start(&self) -> SearchMonitor<'_> {
        SearchMonitor {
            budget: self,
            started_at: Instant::now(),
            n_candidates: 0,
        }
    }
}

/// Tracks the consumption of a [`SearchBudget`] during a single search.
pub(crate) struct SearchMonitor<'a> {
    budget: &'a SearchBudget,
    started_at: Instant,
    n_candidates: usize,
}

impl SearchMonitor<'_> {
    /// Registers a new candidate, failing if the budget is exhausted.
    pub(crate) fn visit(&mut self) -> Result<(), AAError> {
        if self.budget.interrupter.is_interrupted() {
            return Err(self.abort(AbortReason::Interrupted));
        }
        if let Some(max) = self.budget.max_candidates {
            if self.n_candidates >= max {
                return Err(self.abort(AbortReason::CandidateLimit(max)));
            }
        }
        if let Some(timeout) = self.budget.timeout {
            if self.started_at.elapsed() > timeout {
                return Err(self.abort(AbortReason::Timeout(timeout)));
            }
        }
        self.n_candidates += 1;
        Ok(())
    }

    fn abort(&self, reason: AbortReason) -> AAError {
        debug!(
            "aborting search after {} candidate(s) and {:?}: {}",
            self.n_candidates,
            self.started_at.elapsed(),
            reason
        );
        AAError::ComputationAborted(reason)
    }

    pub(crate) fn n_candidates(&self) -> usize {
        self.n_candidates
    }
}
