//! Error types for adaptive interval binning
//!
//! Provides a unified error type for all smart-binning crates.

use thiserror::Error;

/// Core error type for binning operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a partition with too few bins
    pub fn too_few_bins(actual: usize) -> Self {
        Self::InvalidInput(format!(
            "at least 2 bins (3 boundaries) are required, got {actual} bin(s)"
        ))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN values
    pub fn not_a_number(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN values"))
    }

    /// Check whether this error reports invalid input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
