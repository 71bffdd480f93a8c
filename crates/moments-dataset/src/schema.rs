//! JSON dataset schema
//!
//! ```json
//! {
//!   "variationalSeries": { "1": 2, "2": 2, "3": 2 },
//!   "params": { "variance": 0.7 },
//!   "confidence": 0.95,
//!   "meanConfidenceIntervalWithKnownVariance": true,
//!   "meanConfidenceIntervalWithUnknownVariance": true,
//!   "varianceConfidenceInterval": false
//! }
//! ```

use crate::{DerivedParameters, DerivedStatistics};
use moments_core::{Result, WeightedSample};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// The form in which a dataset carries its observations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleData<'a> {
    /// Raw observations, each with weight 1
    Values(&'a [f64]),
    /// Numeric label → frequency
    VariationalSeries(&'a BTreeMap<String, f64>),
    /// Parameters are supplied directly; nothing to compute from
    Absent,
}

/// Which intervals to report, and at what confidence level
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub mean_confidence_interval_with_known_variance: bool,
    #[serde(default)]
    pub mean_confidence_interval_with_unknown_variance: bool,
    #[serde(default)]
    pub variance_confidence_interval: bool,
}

/// A sample dataset as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleDataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variational_series: Option<BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "DerivedParameters::is_empty")]
    pub params: DerivedParameters,
    /// Statistics carried over from elsewhere; recomputed when data is present
    #[serde(default, skip_serializing_if = "DerivedStatistics::is_empty")]
    pub statistics: DerivedStatistics,
    #[serde(flatten)]
    pub request: ConfidenceRequest,
}

impl SampleDataset {
    /// The observation form present in this dataset
    ///
    /// Raw values take precedence when both forms are present.
    pub fn sample_data(&self) -> SampleData<'_> {
        match (&self.values, &self.variational_series) {
            (Some(values), series) => {
                if series.is_some() {
                    warn!("dataset has both `values` and `variationalSeries`; using `values`");
                }
                SampleData::Values(values)
            }
            (None, Some(series)) => SampleData::VariationalSeries(series),
            (None, None) => SampleData::Absent,
        }
    }

    /// Normalize the observations into weighted form
    ///
    /// Returns `Ok(None)` when the dataset carries no observations.
    pub fn weighted_sample(&self) -> Result<Option<WeightedSample>> {
        match self.sample_data() {
            SampleData::Values(values) => WeightedSample::from_values(values).map(Some),
            SampleData::VariationalSeries(series) => {
                WeightedSample::from_frequency_table(series).map(Some)
            }
            SampleData::Absent => Ok(None),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
