//! Error types for moment and interval estimation
//!
//! Provides a unified error type for all moments crates.

use thiserror::Error;

/// Core error type for moment and interval computations
#[derive(Error, Debug)]
pub enum Error {
    /// A frequency-table key could not be read as a number
    #[error("Parse error: frequency key {key:?} is not a number")]
    Parse { key: String },

    /// A parameter lies outside the domain of the requested computation
    #[error("Domain error: {0}")]
    Domain(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected total weight of at least {expected}, got {actual}")]
    InsufficientData { expected: f64, actual: f64 },

    /// A statistic or parameter required by a computation was never produced
    #[error("Missing data: {0}")]
    MissingData(String),

    /// A dataset could not be located in a catalog
    #[error("Selection error: {0}")]
    Selection(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed dataset document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a confidence level outside (0, 1)
    pub fn invalid_confidence(level: f64) -> Self {
        Self::Domain(format!("confidence level {level} must be in (0, 1)"))
    }

    /// Create an error for a probability outside (0, 1)
    pub fn invalid_probability(p: f64) -> Self {
        Self::Domain(format!("probability {p} must be in (0, 1)"))
    }

    /// Create an error for non-positive degrees of freedom
    pub fn invalid_degrees_of_freedom(df: f64) -> Self {
        Self::Domain(format!("degrees of freedom {df} must be positive"))
    }

    /// Create an error for computations that divide by `n - 1`
    pub fn sample_too_small(n: f64) -> Self {
        Self::Domain(format!("sample size {n} must be greater than 1"))
    }

    /// Create an error for a value that was required but never computed
    pub fn missing(what: &str) -> Self {
        Self::MissingData(format!("{what} is not available"))
    }

    /// Create an error for an empty or zero-weight sample
    pub fn empty_sample(total_weight: f64) -> Self {
        Self::InsufficientData {
            expected: f64::MIN_POSITIVE,
            actual: total_weight,
        }
    }

    /// Returns `true` for errors caused by a value outside a computation's domain
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    /// Returns `true` for errors caused by a missing prerequisite
    pub fn is_missing_data(&self) -> bool {
        matches!(self, Self::MissingData(_))
    }
}
