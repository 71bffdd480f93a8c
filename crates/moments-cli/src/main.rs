//! moments - descriptive statistics and confidence intervals for sample datasets

mod cli;
mod render;

use anyhow::{bail, Context};
use clap::Parser;
use moments_dataset::{Catalog, CatalogEntry, Report};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, OutputFormat};
use crate::render::TextRenderer;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);
    run(&cli)
}

fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let catalog = Catalog::scan(&cli.samples_dir)
        .with_context(|| format!("Failed to list datasets in {}", cli.samples_dir.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        render::write_catalog(&mut out, &catalog)?;
        return Ok(());
    }
    if catalog.is_empty() {
        bail!("No datasets found in {}", cli.samples_dir.display());
    }

    let entry = match &cli.sample {
        Some(selector) => catalog.lookup(selector)?,
        None => prompt_for_entry(&mut out, &catalog)?,
    };
    info!(dataset = %entry.name, path = %entry.path.display(), "loading dataset");

    let dataset = entry
        .load()
        .with_context(|| format!("Failed to load dataset {}", entry.path.display()))?;
    let report = Report::build(&dataset)
        .with_context(|| format!("Failed to compute statistics for {}", entry.name))?;

    match cli.format {
        OutputFormat::Text => TextRenderer::new(cli.precision).write_report(&mut out, &report)?,
        OutputFormat::Json => render::write_json(&mut out, &report)?,
    }
    out.flush()?;
    Ok(())
}

/// List the datasets and read a single index from stdin
fn prompt_for_entry<'a, W: Write>(
    out: &mut W,
    catalog: &'a Catalog,
) -> anyhow::Result<&'a CatalogEntry> {
    render::write_catalog(out, catalog)?;
    write!(out, "Choose sample: ")?;
    out.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read dataset selection")?;
    let index: usize = line
        .trim()
        .parse()
        .with_context(|| format!("{:?} is not a dataset number", line.trim()))?;
    writeln!(out)?;
    Ok(catalog.select(index)?)
}
