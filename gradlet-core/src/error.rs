use thiserror::Error;

/// Custom error type for the gradlet framework.
///
/// Numeric domain problems (division by a zero-valued node, fractional powers
/// of negative bases, ...) are deliberately *not* represented here: they flow
/// through `value` and `grad` as IEEE-754 NaN/infinity.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum GradletError {
    #[error("Arity mismatch: expected {expected} inputs, got {actual} during operation {operation}")]
    ArityMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Invalid network architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Operation {operation} requires a non-empty input")]
    EmptyInput { operation: String },

    #[error("In-place modification error during {operation}: {reason}")]
    InplaceModification { operation: String, reason: String },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Graph rendering failed: {0}")]
    Render(String),
}
