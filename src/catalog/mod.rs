//! Catalog layer: the fixed list of comparable items and where it comes from.
//!
//! - `collection`: the validated, immutable [`Catalog`]
//! - `source`: [`CatalogSource`] with bundled and JSON-file implementations

pub mod collection;
pub mod source;

pub use collection::Catalog;
pub use source::{CatalogSource, EmbeddedCatalog, JsonFileCatalog};

use crate::domain::Result;
use crate::infrastructure::expand_tilde;
use crate::Config;

/// Loads the catalog named by `config.catalog_file`, or the bundled one.
///
/// # Errors
///
/// Propagates read, parse and validation errors from the chosen source.
pub fn load(config: &Config) -> Result<Catalog> {
    match &config.catalog_file {
        Some(path) => JsonFileCatalog::new(expand_tilde(path)).load(),
        None => EmbeddedCatalog.load(),
    }
}
