//! Errors raised when a control cannot be built or driven

use thiserror::Error;

/// Errors that can occur while constructing or operating a control
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    #[error("option list is empty")]
    EmptyOptions,

    #[error("inverted bounds: min {min} is greater than max {max}")]
    InvertedBounds { min: i32, max: i32 },

    #[error("skip step must be positive, got {0}")]
    InvalidSkipStep(u32),

    #[error("option index {index} out of range (options: {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Convenience alias for control results
pub type Result<T> = std::result::Result<T, ControlError>;
