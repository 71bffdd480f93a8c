//! Interval reports
//!
//! A [`Report`] gathers the resolved parameters and statistics of a dataset
//! together with every interval the dataset requests. Intervals are
//! evaluated independently: one that fails records its error and the others
//! are still computed.

use crate::{resolve, ConfidenceRequest, DerivedParameters, DerivedStatistics, SampleDataset};
use moments_confidence::{ConfidenceInterval, ConfidenceLevel, MeanCI, VarianceCI};
use moments_core::{Error, Result};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::{debug, info};

/// The three supported interval types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IntervalKind {
    MeanKnownVariance,
    MeanUnknownVariance,
    Variance,
}

impl IntervalKind {
    pub const ALL: [IntervalKind; 3] = [
        IntervalKind::MeanKnownVariance,
        IntervalKind::MeanUnknownVariance,
        IntervalKind::Variance,
    ];

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            IntervalKind::MeanKnownVariance => "Mean confidence interval (with known variance)",
            IntervalKind::MeanUnknownVariance => {
                "Mean confidence interval (with unknown variance)"
            }
            IntervalKind::Variance => "Variance confidence interval",
        }
    }
}

impl ConfidenceRequest {
    pub fn is_requested(&self, kind: IntervalKind) -> bool {
        match kind {
            IntervalKind::MeanKnownVariance => self.mean_confidence_interval_with_known_variance,
            IntervalKind::MeanUnknownVariance => {
                self.mean_confidence_interval_with_unknown_variance
            }
            IntervalKind::Variance => self.variance_confidence_interval,
        }
    }

    /// Requested interval kinds, in report order
    pub fn requested(&self) -> impl Iterator<Item = IntervalKind> + '_ {
        IntervalKind::ALL
            .into_iter()
            .filter(move |&kind| self.is_requested(kind))
    }
}

/// Compute one interval from resolved parameters and statistics
///
/// Prerequisites are checked in order: confidence level, sample size, then the
/// statistic or parameter the interval is built from. An absent value is a
/// [`Error::MissingData`], never a zero.
pub fn compute_interval(
    kind: IntervalKind,
    confidence: Option<f64>,
    params: &DerivedParameters,
    statistics: &DerivedStatistics,
) -> Result<ConfidenceInterval> {
    let confidence = confidence.ok_or_else(|| Error::missing("confidence level"))?;
    let level = ConfidenceLevel::new(confidence)?;
    let sample_size = params
        .sample_size
        .ok_or_else(|| Error::missing("sample size"))?;
    if !(sample_size > 1.0) {
        return Err(Error::sample_too_small(sample_size));
    }

    match kind {
        IntervalKind::MeanKnownVariance => {
            let mean = statistics.mean.ok_or_else(|| Error::missing("sample mean"))?;
            let variance = params
                .variance
                .ok_or_else(|| Error::missing("known variance"))?;
            MeanCI::known_variance(level).confidence_interval(sample_size, mean, variance)
        }
        IntervalKind::MeanUnknownVariance => {
            let mean = statistics.mean.ok_or_else(|| Error::missing("sample mean"))?;
            let variance = statistics
                .unbiased_variance
                .ok_or_else(|| Error::missing("unbiased sample variance"))?;
            MeanCI::unknown_variance(level).confidence_interval(sample_size, mean, variance)
        }
        IntervalKind::Variance => {
            let variance = statistics
                .unbiased_variance
                .ok_or_else(|| Error::missing("unbiased sample variance"))?;
            VarianceCI::new(level).confidence_interval(sample_size, variance)
        }
    }
}

/// Result of one requested interval
#[derive(Debug)]
pub struct IntervalOutcome {
    pub kind: IntervalKind,
    pub confidence: Option<f64>,
    pub result: Result<ConfidenceInterval>,
}

impl IntervalOutcome {
    pub fn interval(&self) -> Option<&ConfidenceInterval> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&Error> {
        self.result.as_ref().err()
    }
}

impl Serialize for IntervalOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("IntervalOutcome", 4)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("confidence", &self.confidence)?;
        match &self.result {
            Ok(interval) => {
                state.serialize_field("lower", &interval.lower)?;
                state.serialize_field("upper", &interval.upper)?;
            }
            Err(error) => {
                state.serialize_field("error", &error.to_string())?;
            }
        }
        state.end()
    }
}

/// Everything computed for one dataset
#[derive(Debug, serde::Serialize)]
pub struct Report {
    pub params: DerivedParameters,
    pub statistics: DerivedStatistics,
    pub intervals: Vec<IntervalOutcome>,
}

impl Report {
    /// Resolve a dataset and compute every interval it requests
    ///
    /// Fails only when the statistics themselves cannot be resolved; interval
    /// failures are recorded in [`Report::intervals`].
    pub fn build(dataset: &SampleDataset) -> Result<Self> {
        let resolved = resolve(dataset)?;
        let request = &dataset.request;

        let intervals = request
            .requested()
            .map(|kind| {
                let result = compute_interval(
                    kind,
                    request.confidence,
                    &resolved.params,
                    &resolved.statistics,
                );
                match &result {
                    Ok(interval) => debug!(?kind, %interval, "interval computed"),
                    Err(error) => info!(?kind, %error, "interval not computed"),
                }
                IntervalOutcome {
                    kind,
                    confidence: request.confidence,
                    result,
                }
            })
            .collect();

        Ok(Self {
            params: resolved.params,
            statistics: resolved.statistics,
            intervals,
        })
    }

    pub fn outcome(&self, kind: IntervalKind) -> Option<&IntervalOutcome> {
        self.intervals.iter().find(|outcome| outcome.kind == kind)
    }
}
