//! Report rendering

use moments_dataset::{Catalog, DerivedParameters, DerivedStatistics, IntervalOutcome, Report};
use std::io::{self, Write};

fn parameter_rows(params: &DerivedParameters) -> [(&'static str, Option<f64>); 4] {
    [
        ("Sample size", params.sample_size),
        ("Mean", params.mean),
        ("Variance", params.variance),
        ("Standard deviation", params.standard_deviation),
    ]
}

fn statistic_rows(statistics: &DerivedStatistics) -> [(&'static str, Option<f64>); 5] {
    [
        ("Mean", statistics.mean),
        ("Biased variance", statistics.biased_variance),
        ("Unbiased variance", statistics.unbiased_variance),
        ("Biased standard deviation", statistics.biased_standard_deviation),
        ("Unbiased standard deviation", statistics.unbiased_standard_deviation),
    ]
}

/// Print the numbered dataset list
pub fn write_catalog<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "Available samples:")?;
    for entry in catalog.entries() {
        writeln!(out, "[{}] {}", entry.index, entry.name)?;
    }
    Ok(())
}

pub struct TextRenderer {
    precision: usize,
}

impl TextRenderer {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    pub fn write_report<W: Write>(&self, out: &mut W, report: &Report) -> io::Result<()> {
        writeln!(out, "Known parameters:")?;
        for (name, value) in parameter_rows(&report.params) {
            if let Some(value) = value {
                self.write_value(out, name, value)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Known statistics:")?;
        for (name, value) in statistic_rows(&report.statistics) {
            if let Some(value) = value {
                self.write_value(out, name, value)?;
            }
        }

        if !report.intervals.is_empty() {
            writeln!(out)?;
        }
        for outcome in &report.intervals {
            self.write_interval(out, outcome)?;
        }
        Ok(())
    }

    fn write_value<W: Write>(&self, out: &mut W, name: &str, value: f64) -> io::Result<()> {
        writeln!(out, "{name}: {value:.prec$}", prec = self.precision)
    }

    fn write_interval<W: Write>(&self, out: &mut W, outcome: &IntervalOutcome) -> io::Result<()> {
        let label = outcome.kind.label();
        match &outcome.result {
            Ok(interval) => writeln!(
                out,
                "{label}: ({:.prec$}, {:.prec$}), confidence = {:.2}",
                interval.lower,
                interval.upper,
                interval.confidence_level,
                prec = self.precision
            ),
            Err(error) => writeln!(out, "{label}: not computed ({error})"),
        }
    }
}

pub fn write_json<W: Write>(out: &mut W, report: &Report) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
