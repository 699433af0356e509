mod seed;

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("City '{0}' has no cafes")]
    EmptyCity(String),
}

/// A single café record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Cafe {
    pub name: String,
    pub address: String,
}

impl Cafe {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// On-disk layout: one array of tables per city, e.g. `[[cities.moscow]]`
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    cities: HashMap<String, Vec<Cafe>>,
}

/// Immutable city -> cafés mapping, built once at startup.
///
/// Every city holds at least one café. Café order within a city is the
/// order they were loaded in and is preserved by every lookup.
#[derive(Debug, Clone)]
pub struct CityCatalog {
    cities: HashMap<String, Vec<Cafe>>,
}

impl CityCatalog {
    pub fn new(cities: HashMap<String, Vec<Cafe>>) -> Result<Self, CatalogError> {
        if let Some((city, _)) = cities.iter().find(|(_, cafes)| cafes.is_empty()) {
            return Err(CatalogError::EmptyCity(city.clone()));
        }
        Ok(Self { cities })
    }

    /// Built-in dataset used when no catalog file is configured
    pub fn seed() -> Self {
        Self {
            cities: seed::cities(),
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(raw)?;
        Self::new(file.cities)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        info!(path = %path.display(), "Loading cafe catalog");
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Ordered cafés for `city`, or `None` if the city is unknown
    pub fn cafes(&self, city: &str) -> Option<&[Cafe]> {
        self.cities.get(city).map(Vec::as_slice)
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn cafe_count(&self) -> usize {
        self.cities.values().map(Vec::len).sum()
    }
}

/// Filter `cafes` by a case-insensitive name substring, then keep at most `limit` of them.
///
/// An empty or missing `search` keeps everything. Order is preserved.
pub fn select<'a>(cafes: &'a [Cafe], search: Option<&str>, limit: Option<usize>) -> Vec<&'a Cafe> {
    let needle = search.filter(|s| !s.is_empty()).map(fold_case);

    cafes
        .iter()
        .filter(|cafe| match &needle {
            Some(needle) => fold_case(&cafe.name).contains(needle.as_str()),
            None => true,
        })
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

/// Per-character lowercase, so a substring folds the same way as the whole word
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

pub fn join_names(cafes: &[&Cafe]) -> String {
    cafes
        .iter()
        .map(|cafe| cafe.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
