//! Sample datasets and the statistics derived from them
//!
//! This crate connects stored datasets to the estimation crates:
//!
//! - [`SampleDataset`]: the JSON schema (raw `values` or a
//!   `variationalSeries` frequency table, known `params`, a confidence level
//!   and the interval flags)
//! - [`resolve`]: fills [`DerivedParameters`] and [`DerivedStatistics`]
//! - [`Report`]: resolved statistics plus every requested interval
//! - [`Catalog`]: lists dataset files and validates a selection
//!
//! # Example
//!
//! ```rust
//! use moments_dataset::{IntervalKind, Report, SampleDataset};
//!
//! let dataset = SampleDataset::from_json_str(
//!     r#"{"values": [2, 4, 4, 4, 5, 5, 7, 9], "confidence": 0.95,
//!         "meanConfidenceIntervalWithUnknownVariance": true}"#,
//! ).unwrap();
//!
//! let report = Report::build(&dataset).unwrap();
//! assert_eq!(report.statistics.mean, Some(5.0));
//! assert!(report.outcome(IntervalKind::MeanUnknownVariance).unwrap().interval().is_some());
//! ```

mod catalog;
mod params;
mod report;
mod resolver;
mod schema;

pub use catalog::{load_dataset, Catalog, CatalogEntry};
pub use params::{DerivedParameters, DerivedStatistics};
pub use report::{compute_interval, IntervalKind, IntervalOutcome, Report};
pub use resolver::{resolve, ResolvedSample};
pub use schema::{ConfidenceRequest, SampleData, SampleDataset};
