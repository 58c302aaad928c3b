//! Composable markup renderers.
//!
//! Each component turns one part of the view model into an HTML fragment:
//!
//! - `header`: logo links for the two selected items
//! - `row`: one comparison row (two cells, one or more fields each)
//! - `chips`: colored `Actions` chips
//! - `select`: selector `<option>` lists
//! - `empty`: the message shown while a slot is unset
//!
//! Fragments are plain strings; every interpolated value is escaped with
//! [`escape_html`](crate::ui::helpers::escape_html).

mod chips;
mod empty;
mod header;
mod row;
mod select;

pub use empty::render_empty_state;
pub use select::{render_selector_options, PLACEHOLDER_LABEL};

use crate::ui::viewmodel::TableView;

use header::render_header;
use row::render_row;

/// Renders the full comparison table.
///
/// Layout structure:
/// ```text
/// [Header: two logo links]
/// [Row per group: left cell | right cell]
/// ```
pub fn render_table(table: &TableView) -> String {
    let mut html = render_header(&table.header);
    for row in &table.rows {
        html.push_str(&render_row(row));
    }
    html
}
