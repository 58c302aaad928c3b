//! Empty state message shown while a slot is unset.

use crate::ui::helpers::escape_html;
use crate::ui::viewmodel::EmptyState;

pub fn render_empty_state(empty: &EmptyState) -> String {
    format!(
        "<p class=\"no-selection-message\">{}</p>\n",
        escape_html(&empty.message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_escaped() {
        let empty = EmptyState {
            message: "Pick <two>".to_string(),
        };
        assert_eq!(
            render_empty_state(&empty),
            "<p class=\"no-selection-message\">Pick &lt;two&gt;</p>\n"
        );
    }
}
