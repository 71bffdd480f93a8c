//! Core types for weighted sample moments
//!
//! This crate provides the building blocks shared by the other moments crates:
//!
//! - [`WeightedObservation`] and [`WeightedSample`]: the canonical
//!   `(value, weight)` representation of a dataset, built from raw values or
//!   from a frequency table
//! - [`SampleMoments`]: streaming weighted mean and variance with bias
//!   conversion helpers
//! - [`math::distributions`]: normal, Student's t and chi-squared quantiles
//! - [`Error`] / [`Result`]: the error type used throughout the workspace
//!
//! # Example
//!
//! ```rust
//! use moments_core::{SampleMoments, WeightedSample};
//!
//! let sample = WeightedSample::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
//! let moments = SampleMoments::from_sample(&sample).unwrap();
//!
//! assert_eq!(moments.mean, 5.0);
//! assert_eq!(moments.biased_variance, 4.0);
//! ```

pub mod error;
pub mod math;
pub mod moments;
pub mod observation;

// Re-export core types
pub use error::{Error, Result};
pub use math::{chi_squared_quantile, normal_quantile, students_t_quantile};
pub use moments::{bias_variance, running_mean, unbias_variance, SampleMoments};
pub use observation::{WeightedObservation, WeightedSample};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
