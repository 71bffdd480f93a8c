//! Confidence interval for the variance
//!
//! With `s²` the unbiased sample variance and `k = n - 1`, the statistic
//! `k s² / σ²` follows a chi-squared distribution with `k` degrees of freedom,
//! giving the interval
//!
//! ```text
//! ( k s² / χ²(k, (1 + c) / 2),  k s² / χ²(k, (1 - c) / 2) )
//! ```
//!
//! The upper chi-squared quantile produces the lower bound and the lower
//! quantile the upper bound. The interval is not symmetric around `s²`.

use crate::{check_sample_size, check_variance, ConfidenceInterval, ConfidenceLevel};
use moments_core::{chi_squared_quantile, Result};
use tracing::debug;

/// Chi-squared confidence interval estimator for the variance
#[derive(Debug, Clone, Copy)]
pub struct VarianceCI {
    level: ConfidenceLevel,
}

impl VarianceCI {
    pub fn new(level: ConfidenceLevel) -> Self {
        Self { level }
    }

    pub fn confidence_level(&self) -> f64 {
        self.level.value()
    }

    /// Compute the interval from the unbiased sample variance
    pub fn confidence_interval(
        &self,
        sample_size: f64,
        unbiased_variance: f64,
    ) -> Result<ConfidenceInterval> {
        check_sample_size(sample_size)?;
        check_variance(unbiased_variance)?;

        let df = sample_size - 1.0;
        let chi_upper = chi_squared_quantile(df, self.level.upper_probability())?;
        let chi_lower = chi_squared_quantile(df, self.level.lower_probability())?;
        let scaled = unbiased_variance * df;

        debug!(
            sample_size, unbiased_variance, chi_lower, chi_upper,
            "variance confidence interval"
        );

        Ok(ConfidenceInterval::new(
            scaled / chi_upper,
            scaled / chi_lower,
            unbiased_variance,
            self.level.value(),
        ))
    }
}

/// Variance interval: `(s²(n-1)/χ²(n-1, (1+c)/2), s²(n-1)/χ²(n-1, (1-c)/2))`
pub fn variance_interval(
    sample_size: f64,
    unbiased_variance: f64,
    confidence: f64,
) -> Result<ConfidenceInterval> {
    VarianceCI::new(ConfidenceLevel::new(confidence)?)
        .confidence_interval(sample_size, unbiased_variance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_values() {
        let s2 = 32.0 / 7.0;
        let ci = variance_interval(8.0, s2, 0.95).unwrap();

        // 7 * s2 = 32
        assert_relative_eq!(ci.lower, 32.0 / 16.012764274629, epsilon = 1e-7);
        assert_relative_eq!(ci.upper, 32.0 / 1.689869180677, epsilon = 1e-6);
        assert_eq!(ci.estimate, s2);
        assert!(ci.contains(s2));
    }

    #[test]
    fn test_bounds_are_ordered() {
        for &c in &[0.5, 0.8, 0.9, 0.95, 0.99] {
            let ci = variance_interval(12.0, 3.0, c).unwrap();
            assert!(ci.lower < ci.upper, "c = {c}: {ci}");
            assert!(ci.lower > 0.0);
        }
    }

    #[test]
    fn test_widens_with_confidence() {
        let narrow = variance_interval(10.0, 2.0, 0.90).unwrap();
        let wide = variance_interval(10.0, 2.0, 0.99).unwrap();
        assert!(wide.lower < narrow.lower);
        assert!(wide.upper > narrow.upper);
    }

    #[test]
    fn test_domain_errors() {
        assert!(variance_interval(1.0, 2.0, 0.95).unwrap_err().is_domain());
        assert!(variance_interval(10.0, 2.0, 1.2).unwrap_err().is_domain());
        assert!(variance_interval(10.0, -2.0, 0.95).unwrap_err().is_domain());
        assert!(variance_interval(f64::INFINITY, 2.0, 0.95)
            .unwrap_err()
            .is_domain());
    }
}
