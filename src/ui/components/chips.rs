//! Colored chips for the `Actions` attribute.

use crate::ui::helpers::escape_html;
use crate::ui::viewmodel::Chip;

/// Renders chips separated by single spaces.
pub fn render_chips(chips: &[Chip]) -> String {
    chips
        .iter()
        .map(|chip| {
            format!(
                "<span class=\"tag\" style=\"background-color: {}; color: {};\">{}</span>",
                escape_html(&chip.background),
                escape_html(&chip.text),
                escape_html(&chip.label),
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}
