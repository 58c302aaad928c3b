//! Catalog source abstraction.
//!
//! The widget only ever reads a catalog once, at startup. [`CatalogSource`]
//! keeps that single operation swappable: the bundled catalog in release
//! builds, a JSON file when the operator points `catalog_file` at one.

use crate::catalog::Catalog;
use crate::domain::error::Result;
use std::path::PathBuf;

/// Bundled catalog document.
const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Anything that can produce a validated [`Catalog`].
pub trait CatalogSource {
    /// Loads and validates the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read, parsed, or breaks a
    /// catalog invariant.
    fn load(&self) -> Result<Catalog>;
}

/// The catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl CatalogSource for EmbeddedCatalog {
    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("embedded_catalog_load").entered();
        Catalog::from_json_str(EMBEDDED_CATALOG)
    }
}

/// A JSON array of record objects on disk.
///
/// ```json
/// [
///   {
///     "Name": "Omeka",
///     "LinkURL": "https://omeka.org/",
///     "Cost": "Hybrid model",
///     "Actions": ["Digitization"],
///     "LogoPath": "assets/img/Logo_omeka.webp"
///   }
/// ]
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    file_path: PathBuf,
}

impl JsonFileCatalog {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("json_catalog_load", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let catalog = Catalog::from_json_str(&contents)?;

        tracing::debug!(record_count = catalog.len(), "catalog file loaded");
        Ok(catalog)
    }
}
