//! Comparison rows: two bordered cells, each holding the group's fields.

use super::chips::render_chips;
use crate::domain::PLACEHOLDER;
use crate::ui::helpers::{column_span, escape_html};
use crate::ui::viewmodel::{CellLayout, CellView, FieldValue, FieldView, RowView};

/// Renders one row group for both records.
pub fn render_row(row: &RowView) -> String {
    let cells: String = row.cells.iter().map(render_cell).collect();
    format!("<div class=\"row p-r-1\">\n{cells}</div>\n")
}

fn render_cell(cell: &CellView) -> String {
    let class = match cell.layout {
        CellLayout::FullWidth => "col-12 p-y-1 p-x-1".to_string(),
        CellLayout::Columns(count) => format!("col-{} item border-r p-y-1 p-x-1", column_span(count)),
    };

    let fields: String = cell.fields.iter().map(|field| render_field(field, &class)).collect();
    format!("  <div class=\"col-6 border\">\n    <div class=\"row\">\n{fields}    </div>\n  </div>\n")
}

fn render_field(field: &FieldView, class: &str) -> String {
    let value = match &field.value {
        FieldValue::Text(text) => escape_html(text),
        FieldValue::Chips(chips) => render_chips(chips),
        FieldValue::Missing => PLACEHOLDER.to_string(),
    };

    format!(
        concat!(
            "      <div class=\"{class}\">\n",
            "        <p class=\"m-b-0 destacado\"><strong>{label}:</strong></p>\n",
            "        <p class=\"m-b-0\">{value}</p>\n",
            "      </div>\n"
        ),
        class = class,
        label = escape_html(&field.label),
        value = value,
    )
}
