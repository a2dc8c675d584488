//! Catalog loaded from a JSON file

use std::path::{Path, PathBuf};

use ms_core::{Catalog, Event};
use tracing::info;

use crate::DataResult;

/// A JSON array of events in the fixture's camelCase shape
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the catalog
    pub fn load(&self) -> DataResult<Catalog> {
        let content = std::fs::read_to_string(&self.path)?;
        let catalog = Self::parse(&content)?;
        info!(path = ?self.path, events = catalog.len(), "Loaded event catalog");
        Ok(catalog)
    }

    /// Parse catalog JSON; duplicate ids are rejected
    pub fn parse(content: &str) -> DataResult<Catalog> {
        let events: Vec<Event> = serde_json::from_str(content)?;
        Ok(Catalog::new(events)?)
    }
}
