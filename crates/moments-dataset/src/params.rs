//! Known parameters and derived statistics
//!
//! Every field is optional: a value is either known (supplied or computed) or
//! absent, and consumers check presence explicitly.

use moments_core::{bias_variance, unbias_variance, Error, Result, SampleMoments};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Relative disagreement tolerated between two supplied forms of one spread
const CONSISTENCY_TOLERANCE: f64 = 1e-9;

/// Reject a supplied variance or standard deviation that is negative or not finite
fn check_spread(name: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !(v >= 0.0) || !v.is_finite() => Err(Error::Domain(format!(
            "{name} {v} must be finite and non-negative"
        ))),
        _ => Ok(()),
    }
}

fn agree(a: f64, b: f64) -> bool {
    (a - b).abs() <= CONSISTENCY_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Fill an absent variance from its standard deviation
fn fill_variance(variance: &mut Option<f64>, standard_deviation: Option<f64>) {
    if variance.is_none() {
        *variance = standard_deviation.map(|sd| sd * sd);
    }
}

/// Values known a priori, plus the realized sample size once data is read
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_deviation: Option<f64>,
}

impl DerivedParameters {
    /// Fill `variance` from `standard_deviation` or the other way round
    ///
    /// A negative or non-finite spread is a domain error. When both are
    /// supplied and disagree, the variance is kept and a warning is logged.
    pub fn normalize(&mut self) -> Result<()> {
        check_spread("variance", self.variance)?;
        check_spread("standard deviation", self.standard_deviation)?;

        match (self.variance, self.standard_deviation) {
            (Some(variance), None) => self.standard_deviation = Some(variance.sqrt()),
            (None, Some(sd)) => self.variance = Some(sd * sd),
            (Some(variance), Some(sd)) if !agree(variance, sd * sd) => {
                warn!(variance, standard_deviation = sd, "supplied spreads disagree");
            }
            _ => {}
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.sample_size.is_none()
            && self.mean.is_none()
            && self.variance.is_none()
            && self.standard_deviation.is_none()
    }
}

/// Statistics computed from (or attached to) a sample
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStatistics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biased_variance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unbiased_variance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biased_standard_deviation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unbiased_standard_deviation: Option<f64>,
}

impl DerivedStatistics {
    /// Record the directly computed moments: the mean and the biased variance
    ///
    /// Everything derived from a previous variance is cleared.
    pub fn record_moments(&mut self, moments: &SampleMoments) {
        self.mean = Some(moments.mean);
        self.biased_variance = Some(moments.biased_variance);
        self.unbiased_variance = None;
        self.biased_standard_deviation = None;
        self.unbiased_standard_deviation = None;
    }

    /// Fill every missing spread from the ones that are present
    ///
    /// A variance given only through its standard deviation is squared first.
    /// The missing variance is then bias-converted from the other one, which
    /// needs `n > 1`; otherwise it stays absent and a warning is logged.
    /// Standard deviations are replaced only where their variance is known.
    pub fn complete(&mut self, sample_size: Option<f64>) -> Result<()> {
        check_spread("biased variance", self.biased_variance)?;
        check_spread("unbiased variance", self.unbiased_variance)?;
        check_spread("biased standard deviation", self.biased_standard_deviation)?;
        check_spread("unbiased standard deviation", self.unbiased_standard_deviation)?;

        fill_variance(&mut self.biased_variance, self.biased_standard_deviation);
        fill_variance(&mut self.unbiased_variance, self.unbiased_standard_deviation);

        match (self.biased_variance, self.unbiased_variance, sample_size) {
            (Some(biased), None, Some(n)) => match unbias_variance(biased, n) {
                Ok(unbiased) => self.unbiased_variance = Some(unbiased),
                Err(e) => warn!(error = %e, "unbiased variance left undefined"),
            },
            (None, Some(unbiased), Some(n)) => match bias_variance(unbiased, n) {
                Ok(biased) => self.biased_variance = Some(biased),
                Err(e) => warn!(error = %e, "biased variance left undefined"),
            },
            (Some(biased), Some(unbiased), Some(n)) => {
                if let Ok(expected) = unbias_variance(biased, n) {
                    if !agree(expected, unbiased) {
                        warn!(
                            biased,
                            unbiased,
                            sample_size = n,
                            "supplied variances disagree with the sample size"
                        );
                    }
                }
            }
            (Some(_), None, None) | (None, Some(_), None) => {
                warn!("sample size unknown; variance bias conversion skipped");
            }
            _ => {}
        }

        if let Some(biased) = self.biased_variance {
            self.biased_standard_deviation = Some(biased.sqrt());
        }
        if let Some(unbiased) = self.unbiased_variance {
            self.unbiased_standard_deviation = Some(unbiased.sqrt());
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_none()
            && self.biased_variance.is_none()
            && self.unbiased_variance.is_none()
            && self.biased_standard_deviation.is_none()
            && self.unbiased_standard_deviation.is_none()
    }
}
