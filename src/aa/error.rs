use std::time::Duration;
use thiserror::Error;

/// The reason why an exhaustive search stopped before its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The search was cancelled through an [`Interrupter`](crate::utils::Interrupter).
    Interrupted,
    /// The wall-clock budget given to the search was exceeded.
    Timeout(Duration),
    /// The maximal number of candidate sets allowed to be visited was reached.
    CandidateLimit(usize),
}

impl std::fmt::Display for AbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbortReason::Interrupted => write!(f, "interrupted"),
            AbortReason::Timeout(d) => write!(f, "timeout of {:?} exceeded", d),
            AbortReason::CandidateLimit(n) => write!(f, "limit of {} candidate sets reached", n),
        }
    }
}

/// The errors raised by the operations on argumentation frameworks.
///
/// None of them is recoverable by retrying: all the computations are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AAError {
    /// An attack references an argument that is not declared in the framework.
    #[error("invalid framework: {0}")]
    InvalidFramework(String),
    /// An argument or a set of arguments does not belong to the framework it is used with.
    #[error("precondition violated: {0}")]
    Precondition(String),
    /// The grounded extension iteration did not stabilize.
    ///
    /// This denotes a defect in the characteristic function, never a property of the input.
    #[error("grounded extension computation did not converge after {iterations} iterations")]
    NonConvergence {
        /// the number of applications of the characteristic function
        iterations: usize,
    },
    /// An exhaustive search was stopped before it could prove its result complete.
    ///
    /// This is distinct from an empty result, which is a legitimate answer.
    #[error("computation aborted: {0}")]
    ComputationAborted(AbortReason),
}
