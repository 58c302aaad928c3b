//! Domain layer: catalog record model and error types.
//!
//! Nothing here knows about selection, layout or markup.
//!
//! - [`error`]: Error types and result alias
//! - [`record`]: Catalog record model and the reserved attribute keys

pub mod error;
pub mod record;

pub use error::{CompareError, Result};
pub use record::{
    AttributeValue, CatalogRecord, ACTIONS_KEY, LINK_URL_KEY, LOGO_PATH_KEY, NAME_KEY, PLACEHOLDER,
    STRUCTURAL_KEYS,
};
