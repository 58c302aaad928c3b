//! Selector options.

use crate::ui::helpers::escape_html;
use std::fmt::Write;

/// Label of the disabled "nothing selected" option.
pub const PLACEHOLDER_LABEL: &str = "Select an item";

/// Renders one `<option>` per name, marking `selected`.
///
/// With `placeholder` set, a disabled empty-valued option comes first and is
/// marked selected when nothing else is.
///
/// ```
/// use compara::ui::components::render_selector_options;
///
/// let html = render_selector_options(["Omeka", "Wax"], Some("Wax"), false);
/// assert_eq!(
///     html,
///     "<option value=\"Omeka\">Omeka</option>\n<option value=\"Wax\" selected>Wax</option>\n"
/// );
/// ```
pub fn render_selector_options<'a>(
    names: impl IntoIterator<Item = &'a str>,
    selected: Option<&str>,
    placeholder: bool,
) -> String {
    let mut html = String::new();

    if placeholder {
        let marker = if selected.is_none() { " selected" } else { "" };
        let _ = writeln!(html, "<option value=\"\" disabled{marker}>{PLACEHOLDER_LABEL}</option>");
    }

    for name in names {
        let marker = if selected == Some(name) { " selected" } else { "" };
        let escaped = escape_html(name);
        let _ = writeln!(html, "<option value=\"{escaped}\"{marker}>{escaped}</option>");
    }

    html
}
