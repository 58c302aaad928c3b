//! Render engine core: from two selection slots to an ordered list of row
//! groups.
//!
//! ```text
//! (left, right) → attribute_keys → Actions first → sort → partition → LayoutPlan
//! ```
//!
//! - [`keys`]: key extraction ([`KeySet`]) and priority ordering
//! - [`grouping`]: the 1 / 3 / 3+rest / 3+singles+3 row partition
//! - [`plan`](mod@plan): [`LayoutPlan`] assembly

pub mod grouping;
pub mod keys;
pub mod plan;

pub use grouping::partition;
pub use keys::{attribute_keys, collate, compare_keys, sort_attribute_keys, KeySet, DEFAULT_PRIORITY};
pub use plan::{plan, GroupKind, LayoutOptions, LayoutPlan, RowGroup};
