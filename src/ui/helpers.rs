//! Shared rendering utilities.
//!
//! Everything interpolated into markup passes through [`escape_html`]:
//! catalog text, attribute labels, URLs, colors and the empty message.

/// Escapes the five HTML-significant characters.
///
/// ```
/// use compara::ui::helpers::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">R&D's</a>"#), "&lt;a href=&quot;x&quot;&gt;R&amp;D&#39;s&lt;/a&gt;");
/// assert_eq!(escape_html("Dublin Core"), "Dublin Core");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Bootstrap-style column class width for `count` equal sub-columns.
///
/// The grid has 12 units; three keys give `4`, two give `6`.
#[must_use]
pub const fn column_span(count: usize) -> usize {
    if count == 0 {
        12
    } else {
        12 / count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_leaves_unicode_alone() {
        assert_eq!(escape_html("Códigos & más"), "Códigos &amp; más");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn column_span_divides_the_grid() {
        assert_eq!(column_span(1), 12);
        assert_eq!(column_span(2), 6);
        assert_eq!(column_span(3), 4);
        assert_eq!(column_span(0), 12);
    }
}
