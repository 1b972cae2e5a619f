//! Error types for sqlfrag

use thiserror::Error;

/// Result type alias for fragment operations
pub type FragmentResult<T> = Result<T, FragmentError>;

/// Errors raised when a fragment or dialect is built from bad input.
///
/// Flattening and rendering never fail; every error here is a caller
/// contract violation detected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    /// Literal and value sequences do not satisfy `literals == values + 1`
    #[error("Length mismatch: {literals} literals for {values} values (expected {expected})")]
    LengthMismatch {
        literals: usize,
        values: usize,
        expected: usize,
    },

    /// Invalid dialect configuration
    #[error("Config error: {0}")]
    Config(String),
}

impl FragmentError {
    /// Create a length mismatch error for the given sequence lengths
    pub fn length_mismatch(literals: usize, values: usize) -> Self {
        Self::LengthMismatch {
            literals,
            values,
            expected: values + 1,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a length mismatch error
    pub fn is_length_mismatch(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. })
    }
}
