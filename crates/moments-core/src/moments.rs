//! Weighted sample moments
//!
//! Means are accumulated with the running update
//! `mean += w * (x - mean) / W`, where `W` is the weight seen so far. The
//! biased variance is the same running mean taken over the squared deviations
//! from the final mean, so large or skewed samples never build up a large
//! intermediate sum.

use crate::{Error, Result, WeightedObservation, WeightedSample};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Running weighted mean of `(value, weight)` pairs
///
/// Zero-weight pairs leave the mean untouched. Returns the mean together with
/// the total weight.
pub fn running_mean<I>(pairs: I) -> (f64, f64)
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut mean = 0.0;
    let mut count = 0.0;
    for (value, weight) in pairs {
        if weight == 0.0 {
            continue;
        }
        count += weight;
        mean += weight * (value - mean) / count;
    }
    (mean, count)
}

/// Convert a biased (population) variance to its unbiased counterpart
pub fn unbias_variance(biased: f64, sample_size: f64) -> Result<f64> {
    if !(sample_size > 1.0) {
        return Err(Error::sample_too_small(sample_size));
    }
    Ok(biased * sample_size / (sample_size - 1.0))
}

/// Convert an unbiased variance back to the biased (population) form
pub fn bias_variance(unbiased: f64, sample_size: f64) -> Result<f64> {
    if !(sample_size > 1.0) {
        return Err(Error::sample_too_small(sample_size));
    }
    Ok(unbiased * (sample_size - 1.0) / sample_size)
}

/// First two moments of a weighted sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleMoments {
    /// Total weight `n`
    pub sample_size: f64,
    pub mean: f64,
    /// Weighted mean of squared deviations from `mean`
    pub biased_variance: f64,
}

impl SampleMoments {
    /// Accumulate the moments of a sample
    ///
    /// Fails with [`Error::InsufficientData`] when the sample carries no
    /// positive weight.
    pub fn from_sample(sample: &WeightedSample) -> Result<Self> {
        Self::from_observations(sample.observations())
    }

    pub fn from_observations(observations: &[WeightedObservation]) -> Result<Self> {
        let (mean, sample_size) =
            running_mean(observations.iter().map(|obs| (obs.value, obs.weight)));
        if !(sample_size > 0.0) {
            return Err(Error::empty_sample(sample_size));
        }

        let (biased_variance, _) = running_mean(
            observations
                .iter()
                .map(|obs| ((obs.value - mean).powi(2), obs.weight)),
        );

        debug!(
            entries = observations.len(),
            sample_size, mean, biased_variance, "accumulated sample moments"
        );

        Ok(Self {
            sample_size,
            mean,
            biased_variance,
        })
    }

    /// `biased_variance * n / (n - 1)`; undefined for `n <= 1`
    pub fn unbiased_variance(&self) -> Result<f64> {
        unbias_variance(self.biased_variance, self.sample_size)
    }

    pub fn biased_standard_deviation(&self) -> f64 {
        self.biased_variance.sqrt()
    }

    pub fn unbiased_standard_deviation(&self) -> Result<f64> {
        Ok(self.unbiased_variance()?.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn moments(values: &[f64]) -> SampleMoments {
        SampleMoments::from_sample(&WeightedSample::from_values(values).unwrap()).unwrap()
    }

    #[test]
    fn test_classic_example() {
        let m = moments(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(m.sample_size, 8.0);
        assert_relative_eq!(m.mean, 5.0, epsilon = 1e-12);
        assert_relative_eq!(m.biased_variance, 4.0, epsilon = 1e-12);
        assert_relative_eq!(m.unbiased_variance().unwrap(), 32.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(m.biased_standard_deviation(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(
            m.unbiased_standard_deviation().unwrap(),
            (32.0f64 / 7.0).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_weighted_matches_repeated() {
        let weighted = WeightedSample::from_observations(vec![
            WeightedObservation::new(1.0, 2.0).unwrap(),
            WeightedObservation::new(2.0, 2.0).unwrap(),
            WeightedObservation::new(3.0, 2.0).unwrap(),
        ]);
        let w = SampleMoments::from_sample(&weighted).unwrap();
        let r = moments(&[1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);

        assert_eq!(w.sample_size, 6.0);
        assert_relative_eq!(w.mean, 2.0, epsilon = 1e-12);
        assert_relative_eq!(w.biased_variance, 2.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(w.unbiased_variance().unwrap(), 0.8, epsilon = 1e-12);
        assert_relative_eq!(w.mean, r.mean, epsilon = 1e-12);
        assert_relative_eq!(w.biased_variance, r.biased_variance, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_weights_are_ignored() {
        let sample = WeightedSample::from_observations(vec![
            WeightedObservation::new(100.0, 0.0).unwrap(),
            WeightedObservation::new(1.0, 1.0).unwrap(),
            WeightedObservation::new(3.0, 1.0).unwrap(),
            WeightedObservation::new(-50.0, 0.0).unwrap(),
        ]);
        let m = SampleMoments::from_sample(&sample).unwrap();
        assert_eq!(m.sample_size, 2.0);
        assert_relative_eq!(m.mean, 2.0);
        assert_relative_eq!(m.biased_variance, 1.0);
    }

    #[test]
    fn test_single_observation() {
        let m = moments(&[42.0]);
        assert_eq!(m.mean, 42.0);
        assert_eq!(m.biased_variance, 0.0);
        assert!(m.unbiased_variance().unwrap_err().is_domain());
        assert!(m.unbiased_standard_deviation().is_err());
    }

    #[test]
    fn test_empty_sample() {
        let empty = WeightedSample::default();
        assert!(matches!(
            SampleMoments::from_sample(&empty),
            Err(Error::InsufficientData { .. })
        ));

        let all_zero = WeightedSample::from_observations(vec![
            WeightedObservation::new(1.0, 0.0).unwrap(),
        ]);
        assert!(SampleMoments::from_sample(&all_zero).is_err());
    }

    #[test]
    fn test_large_offset_stays_accurate() {
        let values: Vec<f64> = (0..1000).map(|i| 1e9 + (i % 4) as f64).collect();
        let m = moments(&values);
        assert_relative_eq!(m.mean, 1e9 + 1.5, epsilon = 1e-4);
        assert_relative_eq!(m.biased_variance, 1.25, epsilon = 1e-4);
    }

    #[test]
    fn test_bias_conversion() {
        assert_relative_eq!(unbias_variance(4.0, 8.0).unwrap(), 32.0 / 7.0);
        assert_relative_eq!(bias_variance(32.0 / 7.0, 8.0).unwrap(), 4.0, epsilon = 1e-12);
        assert!(unbias_variance(1.0, 1.0).is_err());
        assert!(bias_variance(1.0, 0.5).is_err());
        assert!(unbias_variance(1.0, f64::NAN).is_err());
    }
}
