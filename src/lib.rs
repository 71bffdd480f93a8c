//! Weighted sample moments and classical confidence intervals
//!
//! Facade over the workspace crates:
//!
//! - [`stats`]: weighted samples, moment accumulation, distribution quantiles
//! - [`confidence`]: intervals for the mean and the variance
//! - [`dataset`]: dataset schema, statistics resolution, reports, catalogs

pub use moments_confidence as confidence;
pub use moments_core as stats;
pub use moments_dataset as dataset;

pub use moments_confidence::{ConfidenceInterval, ConfidenceLevel, MeanCI, VarianceCI};
pub use moments_core::{Error, Result, SampleMoments, WeightedObservation, WeightedSample};
pub use moments_dataset::{Catalog, IntervalKind, Report, SampleDataset};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ConfidenceInterval, ConfidenceLevel, Error, IntervalKind, MeanCI, Report, Result,
        SampleDataset, SampleMoments, VarianceCI, WeightedSample,
    };
}
