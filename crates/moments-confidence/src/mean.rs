//! Confidence intervals for the mean
//!
//! Both intervals are symmetric around the sample mean with half-width
//! `sqrt(variance / n) * q`, where `q` is the `(1 + c) / 2` quantile of the
//! standard normal (variance known a priori) or of Student's t with `n - 1`
//! degrees of freedom (variance estimated from the sample).

use crate::{check_sample_size, check_variance, ConfidenceInterval, ConfidenceLevel};
use moments_core::{normal_quantile, students_t_quantile, Error, Result};
use tracing::debug;

/// Which distribution supplies the critical value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarianceAssumption {
    /// Population variance is known; normal critical value
    Known,
    /// Variance is the unbiased sample estimate; Student's t critical value
    Unknown,
}

/// Two-sided confidence interval estimator for the mean
#[derive(Debug, Clone, Copy)]
pub struct MeanCI {
    level: ConfidenceLevel,
    assumption: VarianceAssumption,
}

impl MeanCI {
    /// Interval for the mean when the population variance is known
    pub fn known_variance(level: ConfidenceLevel) -> Self {
        Self {
            level,
            assumption: VarianceAssumption::Known,
        }
    }

    /// Interval for the mean when only the sample variance is available
    pub fn unknown_variance(level: ConfidenceLevel) -> Self {
        Self {
            level,
            assumption: VarianceAssumption::Unknown,
        }
    }

    pub fn assumption(&self) -> VarianceAssumption {
        self.assumption
    }

    pub fn confidence_level(&self) -> f64 {
        self.level.value()
    }

    /// Critical value for a sample of size `n`
    pub fn critical_value(&self, sample_size: f64) -> Result<f64> {
        let p = self.level.upper_probability();
        match self.assumption {
            VarianceAssumption::Known => normal_quantile(p),
            VarianceAssumption::Unknown => students_t_quantile(sample_size - 1.0, p),
        }
    }

    /// Compute the interval
    ///
    /// For [`VarianceAssumption::Unknown`] `variance` must be the unbiased
    /// sample variance.
    pub fn confidence_interval(
        &self,
        sample_size: f64,
        mean: f64,
        variance: f64,
    ) -> Result<ConfidenceInterval> {
        check_sample_size(sample_size)?;
        check_variance(variance)?;
        if !mean.is_finite() {
            return Err(Error::Domain(format!("mean {mean} is not finite")));
        }

        let critical_value = self.critical_value(sample_size)?;
        let margin = (variance / sample_size).sqrt() * critical_value;

        debug!(
            assumption = ?self.assumption,
            sample_size, mean, variance, critical_value, margin,
            "mean confidence interval"
        );

        Ok(ConfidenceInterval::new(
            mean - margin,
            mean + margin,
            mean,
            self.level.value(),
        ))
    }
}

/// Mean interval with known variance: `mean ± sqrt(variance/n) * z((c+1)/2)`
pub fn mean_interval_known_variance(
    sample_size: f64,
    mean: f64,
    variance: f64,
    confidence: f64,
) -> Result<ConfidenceInterval> {
    MeanCI::known_variance(ConfidenceLevel::new(confidence)?)
        .confidence_interval(sample_size, mean, variance)
}

/// Mean interval with unknown variance: `mean ± sqrt(s²/n) * t(n-1, (c+1)/2)`
pub fn mean_interval_unknown_variance(
    sample_size: f64,
    mean: f64,
    unbiased_variance: f64,
    confidence: f64,
) -> Result<ConfidenceInterval> {
    MeanCI::unknown_variance(ConfidenceLevel::new(confidence)?)
        .confidence_interval(sample_size, mean, unbiased_variance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const UNBIASED: f64 = 32.0 / 7.0;

    #[test]
    fn test_known_variance_reference() {
        let ci = mean_interval_known_variance(8.0, 5.0, 4.5714285714, 0.95).unwrap();
        let expected_margin = (4.5714285714f64 / 8.0).sqrt() * 1.959963984540054;

        assert_relative_eq!(ci.margin_of_error(), expected_margin, epsilon = 1e-9);
        assert_relative_eq!(ci.lower, 5.0 - expected_margin, epsilon = 1e-9);
        assert_relative_eq!(ci.upper, 5.0 + expected_margin, epsilon = 1e-9);
        assert_relative_eq!(ci.lower, 3.5184, epsilon = 1e-3);
        assert_relative_eq!(ci.upper, 6.4816, epsilon = 1e-3);
        assert_eq!(ci.estimate, 5.0);
        assert_eq!(ci.confidence_level, 0.95);
    }

    #[test]
    fn test_unknown_variance_reference() {
        let ci = mean_interval_unknown_variance(8.0, 5.0, UNBIASED, 0.95).unwrap();
        let expected_margin = (UNBIASED / 8.0).sqrt() * 2.364624251592785;
        assert_relative_eq!(ci.lower, 5.0 - expected_margin, epsilon = 1e-8);
        assert_relative_eq!(ci.upper, 5.0 + expected_margin, epsilon = 1e-8);
    }

    #[test]
    fn test_t_wider_than_normal() {
        let level = ConfidenceLevel::NINETY_FIVE;
        let normal = MeanCI::known_variance(level)
            .confidence_interval(5.0, 3.0, 2.5)
            .unwrap();
        let t = MeanCI::unknown_variance(level)
            .confidence_interval(5.0, 3.0, 2.5)
            .unwrap();

        assert!(t.width() > normal.width());
        assert!(normal.contains(3.0));
        assert!(t.contains(3.0));
    }

    #[test]
    fn test_confidence_levels() {
        let widths: Vec<f64> = [0.80, 0.90, 0.95, 0.99]
            .iter()
            .map(|&c| {
                mean_interval_unknown_variance(20.0, 10.0, 4.0, c)
                    .unwrap()
                    .width()
            })
            .collect();
        assert!(widths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_zero_variance_is_degenerate() {
        let ci = mean_interval_known_variance(10.0, 1.5, 0.0, 0.9).unwrap();
        assert_eq!(ci.bounds(), (1.5, 1.5));
    }

    #[test]
    fn test_domain_errors() {
        assert!(mean_interval_known_variance(8.0, 5.0, 4.0, 1.0)
            .unwrap_err()
            .is_domain());
        assert!(mean_interval_known_variance(8.0, 5.0, 4.0, 0.0)
            .unwrap_err()
            .is_domain());
        assert!(mean_interval_unknown_variance(1.0, 5.0, 4.0, 0.95)
            .unwrap_err()
            .is_domain());
        assert!(mean_interval_unknown_variance(0.5, 5.0, 4.0, 0.95)
            .unwrap_err()
            .is_domain());
        assert!(mean_interval_known_variance(8.0, 5.0, -1.0, 0.95)
            .unwrap_err()
            .is_domain());
        assert!(mean_interval_known_variance(8.0, f64::NAN, 1.0, 0.95)
            .unwrap_err()
            .is_domain());
    }
}
