//! Dataset discovery and selection
//!
//! A [`Catalog`] lists the `*.json` datasets of a directory in file-name
//! order and numbers them from 1. Selection is validated once; an index or
//! name that does not exist is an error.

use crate::SampleDataset;
use moments_core::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// One dataset file known to a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// 1-based position in the catalog
    pub index: usize,
    /// File stem
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// List the JSON datasets in `dir`
    #[instrument(level = "debug", skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn scan(dir: impl AsRef<Path>) -> Result<Self> {
        let mut paths = fs::read_dir(dir.as_ref())?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        paths.retain(|path| {
            path.is_file() && path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        });
        paths.sort();

        let entries = paths
            .into_iter()
            .enumerate()
            .map(|(i, path)| CatalogEntry {
                index: i + 1,
                name: path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                path,
            })
            .collect::<Vec<_>>();

        debug!(datasets = entries.len(), "catalog scanned");
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Select by 1-based index
    pub fn select(&self, index: usize) -> Result<&CatalogEntry> {
        if self.entries.is_empty() {
            return Err(Error::Selection("no datasets available".to_string()));
        }
        index
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .ok_or_else(|| {
                Error::Selection(format!(
                    "dataset {index} does not exist; choose 1 to {}",
                    self.entries.len()
                ))
            })
    }

    /// Select by file stem
    pub fn find(&self, name: &str) -> Result<&CatalogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| Error::Selection(format!("no dataset named {name:?}")))
    }

    /// Select by index when `selector` is a number, by name otherwise
    pub fn lookup(&self, selector: &str) -> Result<&CatalogEntry> {
        let selector = selector.trim();
        match selector.parse::<usize>() {
            Ok(index) => self.select(index),
            Err(_) => self.find(selector),
        }
    }
}

/// Read and parse one dataset file
#[instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_dataset(path: impl AsRef<Path>) -> Result<SampleDataset> {
    let text = fs::read_to_string(path.as_ref())?;
    SampleDataset::from_json_str(&text)
}

impl CatalogEntry {
    pub fn load(&self) -> Result<SampleDataset> {
        load_dataset(&self.path)
    }
}
