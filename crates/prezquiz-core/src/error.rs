//! Quiz error types.
//!
//! Every fatal error is detected at construction time — catalog build,
//! range validation, config validation. A running session never fails:
//! malformed answers score as incorrect rather than erroring.

use thiserror::Error;

/// Errors that can occur while setting up a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The dataset does not form a contiguous, duplicate-free order sequence.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// A requested range falls outside `[1, N]` or is inverted.
    #[error("invalid range [{start}, {end}]: must satisfy 1 <= start <= end <= {max}")]
    InvalidRange { start: u32, end: u32, max: u32 },

    /// Conflicting session flags (repeat and end-early are mutually exclusive).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl QuizError {
    /// Returns `true` if this error concerns the dataset rather than user flags.
    pub fn is_dataset_error(&self) -> bool {
        matches!(self, QuizError::InvalidCatalog(_))
    }
}
