use thiserror::Error;

/// Errors surfaced at the engine boundary.
///
/// All errors are synchronous and returned to the caller immediately; the
/// engine never retries and never leaves its state partially updated.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum EngineError {
    #[error("grid size must be greater than zero")]
    InvalidSize,
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("`{operation}` is not allowed while the simulation is running")]
    IllegalStateTransition { operation: &'static str },
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
