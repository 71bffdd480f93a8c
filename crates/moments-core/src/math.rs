//! Distribution quantiles for confidence intervals
//!
//! Inverse CDFs of the standard normal, Student's t and chi-squared
//! distributions. All functions validate their arguments and return
//! [`Error::Domain`](crate::Error::Domain) instead of NaN or panicking.

/// Distribution-related mathematical functions
pub mod distributions {
    use crate::{Error, Result};
    use statrs::distribution::{ChiSquared, ContinuousCDF, Normal, StudentsT};

    /// Bisection stops once the bracket is this narrow relative to its midpoint
    const TOLERANCE: f64 = 1e-12;
    const MAX_BISECTIONS: usize = 1100;
    const MAX_EXPANSIONS: usize = 1100;

    fn check_probability(p: f64) -> Result<()> {
        if !(p > 0.0 && p < 1.0) {
            return Err(Error::invalid_probability(p));
        }
        Ok(())
    }

    fn check_degrees_of_freedom(df: f64) -> Result<()> {
        if !(df > 0.0) || !df.is_finite() {
            return Err(Error::invalid_degrees_of_freedom(df));
        }
        Ok(())
    }

    /// Invert a continuous, non-decreasing CDF supported on `[0, inf)`
    ///
    /// The bracket `[0, high]` is doubled until it encloses `p`, then bisected
    /// to a relative width of [`TOLERANCE`].
    fn invert_cdf<F>(cdf: F, p: f64, mut high: f64) -> Result<f64>
    where
        F: Fn(f64) -> f64,
    {
        let mut low = 0.0;
        let mut expansions = 0;
        while cdf(high) < p {
            low = high;
            high *= 2.0;
            expansions += 1;
            if expansions > MAX_EXPANSIONS || !high.is_finite() {
                return Err(Error::Domain(format!("quantile {p} could not be bracketed")));
            }
        }

        for _ in 0..MAX_BISECTIONS {
            let mid = 0.5 * (low + high);
            if cdf(mid) < p {
                low = mid;
            } else {
                high = mid;
            }
            if high - low <= TOLERANCE * mid.max(f64::MIN_POSITIVE) {
                break;
            }
        }
        Ok(0.5 * (low + high))
    }

    /// Inverse CDF of the standard normal distribution
    pub fn normal_quantile(p: f64) -> Result<f64> {
        check_probability(p)?;
        let normal = Normal::new(0.0, 1.0).map_err(|e| {
            Error::Domain(format!("Failed to create normal distribution: {e}"))
        })?;
        Ok(normal.inverse_cdf(p))
    }

    /// Inverse CDF of Student's t distribution with `df` degrees of freedom
    pub fn students_t_quantile(df: f64, p: f64) -> Result<f64> {
        check_degrees_of_freedom(df)?;
        check_probability(p)?;
        let t_dist = StudentsT::new(0.0, 1.0, df).map_err(|e| {
            Error::Domain(format!("Failed to create t-distribution: {e}"))
        })?;
        Ok(t_dist.inverse_cdf(p))
    }

    /// Inverse CDF of the chi-squared distribution with `df` degrees of freedom
    ///
    /// Solved by bisection over the CDF; the generic `inverse_cdf` of
    /// `ChiSquared` is only accurate to a few digits.
    pub fn chi_squared_quantile(df: f64, p: f64) -> Result<f64> {
        check_degrees_of_freedom(df)?;
        check_probability(p)?;
        let chi = ChiSquared::new(df).map_err(|e| {
            Error::Domain(format!("Failed to create chi-squared distribution: {e}"))
        })?;
        invert_cdf(|x| chi.cdf(x), p, df.max(1.0))
    }

}

pub use distributions::{chi_squared_quantile, normal_quantile, students_t_quantile};
