//! Markup rendering layer with component-based architecture.
//!
//! This module turns the current selection into HTML fragments and hands them
//! to an output surface.
//!
//! ```text
//! AppState → compute_viewmodel → ComparisonView → render → Markup → OutputSink
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: display-ready view types
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: fragment renderers (header, rows, chips, selectors, empty)
//! - [`helpers`]: escaping and grid arithmetic
//! - [`theme`]: chip colors
//! - [`sink`]: the [`OutputSink`] seam and its writer/recording implementations

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod sink;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_view, Markup};
pub use sink::{OutputSink, RecordingSink, WriterSink};
pub use theme::Theme;
pub use viewmodel::{
    CellLayout, CellView, Chip, ComparisonView, EmptyState, FieldValue, FieldView, HeaderCell, RowView, TableView,
};
