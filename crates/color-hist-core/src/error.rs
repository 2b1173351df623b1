//! Error types for color histogram analysis
//!
//! Provides a unified error type for all color-hist crates.

use thiserror::Error;

/// Core error type for color histogram operations
///
/// All failures are deterministic input-validation errors raised
/// synchronously at construction time; nothing here is transient,
/// so no retry policy applies.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// No data available for the requested operation
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A selected channel has zero variance across the sample set
    #[error("Degenerate range: channel {channel} has zero variance (all values equal {value})")]
    DegenerateRange { channel: usize, value: f64 },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput(context.to_string())
    }

    /// Create an error for an invalid bin count
    pub fn invalid_bins(num_bins: usize) -> Self {
        Self::InvalidParameter(format!("num_bins {num_bins} must be at least 1"))
    }

    /// Create an error for an invalid clip factor
    pub fn invalid_alpha(alpha: f64) -> Self {
        Self::InvalidParameter(format!("alpha {alpha} must be finite and non-negative"))
    }

    /// Create an error for an unsupported dimension count
    pub fn invalid_dims(dims: usize) -> Self {
        Self::InvalidParameter(format!("dimension count {dims} must be 1, 2, or 3"))
    }
}
