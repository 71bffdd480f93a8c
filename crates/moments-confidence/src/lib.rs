//! Classical confidence intervals
//!
//! This crate provides two-sided confidence intervals built from sample
//! moments and distribution quantiles:
//!
//! - **Mean, known variance**: normal critical value ([`MeanCI::known_variance`])
//! - **Mean, unknown variance**: Student's t critical value with `n - 1`
//!   degrees of freedom ([`MeanCI::unknown_variance`])
//! - **Variance**: chi-squared quantiles with `n - 1` degrees of freedom
//!   ([`VarianceCI`])
//!
//! Every interval requires a confidence level in (0, 1) and a sample size
//! greater than 1; violations are reported as domain errors.
//!
//! # Examples
//!
//! ```rust
//! use moments_confidence::{mean_interval_unknown_variance, variance_interval};
//!
//! let mean_ci = mean_interval_unknown_variance(8.0, 5.0, 32.0 / 7.0, 0.95).unwrap();
//! assert!(mean_ci.contains(5.0));
//!
//! let var_ci = variance_interval(8.0, 32.0 / 7.0, 0.95).unwrap();
//! println!("{var_ci}");
//! ```

mod mean;
mod types;
mod variance;

pub use mean::{
    mean_interval_known_variance, mean_interval_unknown_variance, MeanCI, VarianceAssumption,
};
pub use types::{ConfidenceInterval, ConfidenceLevel};
pub use variance::{variance_interval, VarianceCI};

use moments_core::{Error, Result};

/// Intervals divide by `n` and use `n - 1` degrees of freedom
pub(crate) fn check_sample_size(sample_size: f64) -> Result<()> {
    if !(sample_size > 1.0) || !sample_size.is_finite() {
        return Err(Error::sample_too_small(sample_size));
    }
    Ok(())
}

pub(crate) fn check_variance(variance: f64) -> Result<()> {
    if !(variance >= 0.0) || !variance.is_finite() {
        return Err(Error::Domain(format!(
            "variance {variance} must be finite and non-negative"
        )));
    }
    Ok(())
}
