//! Statistics resolution
//!
//! Turns a [`SampleDataset`] into its known parameters and derived statistics:
//! the observations are normalized into a weighted sample, the mean and the
//! biased variance are accumulated, the realized sample size replaces any
//! supplied one, and every remaining statistic is derived from those.

use crate::{DerivedParameters, DerivedStatistics, SampleDataset};
use moments_core::{Result, SampleMoments};
use serde::Serialize;
use tracing::{debug, instrument};

/// Parameters and statistics of one dataset after resolution
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedSample {
    pub params: DerivedParameters,
    pub statistics: DerivedStatistics,
}

/// Resolve the parameters and statistics of a dataset
///
/// A dataset without observations is valid: supplied parameters and
/// statistics pass through and nothing is computed.
#[instrument(skip(dataset), level = "debug")]
pub fn resolve(dataset: &SampleDataset) -> Result<ResolvedSample> {
    let mut params = dataset.params.clone();
    let mut statistics = dataset.statistics.clone();
    params.normalize()?;

    match dataset.weighted_sample()? {
        Some(sample) => {
            let moments = SampleMoments::from_sample(&sample)?;
            statistics.record_moments(&moments);
            if let Some(previous) = params.sample_size {
                if previous != moments.sample_size {
                    debug!(
                        previous,
                        realized = moments.sample_size,
                        "replacing supplied sample size"
                    );
                }
            }
            params.sample_size = Some(moments.sample_size);
        }
        None => debug!("dataset carries no observations"),
    }

    statistics.complete(params.sample_size)?;

    Ok(ResolvedSample { params, statistics })
}
