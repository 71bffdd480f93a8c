//! Weighted observations and the samples built from them
//!
//! A [`WeightedSample`] is the canonical form every statistic in this crate
//! consumes. It is built either from raw values (each carrying weight 1) or
//! from a frequency table mapping a numeric label to its count.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// One distinct value together with the number (or relative frequency) of
/// times it occurs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedObservation {
    pub value: f64,
    pub weight: f64,
}

impl WeightedObservation {
    /// Create an observation, rejecting negative or non-finite weights
    pub fn new(value: f64, weight: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::Domain(format!("observation value {value} is not finite")));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::Domain(format!(
                "weight {weight} of value {value} must be finite and non-negative"
            )));
        }
        Ok(Self { value, weight })
    }

    /// An observation that occurs exactly once
    pub fn single(value: f64) -> Result<Self> {
        Self::new(value, 1.0)
    }
}

impl From<WeightedObservation> for (f64, f64) {
    fn from(obs: WeightedObservation) -> Self {
        (obs.value, obs.weight)
    }
}

/// Ordered sequence of weighted observations
///
/// Order never affects the statistics; it is kept so that the streaming
/// accumulator visits observations in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedSample {
    observations: Vec<WeightedObservation>,
}

impl WeightedSample {
    /// Build a sample from raw values, one unit of weight each
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let observations = values
            .iter()
            .map(|&value| WeightedObservation::single(value))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { observations })
    }

    /// Build a sample from a frequency table keyed by numeric labels
    ///
    /// Keys are parsed as `f64` after trimming surrounding whitespace; a key
    /// that does not parse yields [`Error::Parse`].
    pub fn from_frequency_table<'a, I>(table: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a String, &'a f64)>,
    {
        let observations = table
            .into_iter()
            .map(|(key, &frequency)| {
                let value = key.trim().parse::<f64>().map_err(|_| Error::Parse {
                    key: key.clone(),
                })?;
                WeightedObservation::new(value, frequency)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { observations })
    }

    /// Build a sample from already validated observations
    pub fn from_observations(observations: Vec<WeightedObservation>) -> Self {
        Self { observations }
    }

    /// Number of distinct entries (not the total weight)
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[WeightedObservation] {
        &self.observations
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeightedObservation> + '_ {
        self.observations.iter()
    }

    /// Sum of all weights; this is the sample size `n`
    pub fn total_weight(&self) -> f64 {
        self.observations.iter().map(|obs| obs.weight).sum()
    }
}

impl FromIterator<WeightedObservation> for WeightedSample {
    fn from_iter<T: IntoIterator<Item = WeightedObservation>>(iter: T) -> Self {
        Self {
            observations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WeightedSample {
    type Item = &'a WeightedObservation;
    type IntoIter = std::slice::Iter<'a, WeightedObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}
