// Engine error taxonomy
//
// Classification-time failures are deliberately few: empty input is rejected
// up front, a missing artifact is surfaced (never papered over with a
// fabricated label), and feedback-log failures stay off the response path.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Input text was empty or whitespace-only.
    #[error("text must not be empty")]
    InvalidInput,

    /// No classifier artifact is loaded and no rule matched.
    #[error("no classifier artifact is available")]
    ModelUnavailable,

    /// The feedback store rejected a write.
    #[error("feedback store failure: {0}")]
    Feedback(String),
}
