//! Header row: a logo linking to each selected item's site.

use crate::ui::helpers::escape_html;
use crate::ui::viewmodel::HeaderCell;

/// Renders the logo row for both selected records.
pub fn render_header(header: &[HeaderCell; 2]) -> String {
    let cells: String = header.iter().map(render_logo_cell).collect();
    format!("<div class=\"row p-r-1\">\n{cells}</div>\n")
}

fn render_logo_cell(cell: &HeaderCell) -> String {
    format!(
        concat!(
            "  <div class=\"col-6 align-content-center border\">\n",
            "    <a href=\"{link}\" target=\"_blank\" rel=\"noopener noreferrer\">",
            "<img class=\"logos\" src=\"{logo}\" alt=\"{name}\"></a>\n",
            "  </div>\n"
        ),
        link = escape_html(&cell.link_url),
        logo = escape_html(&cell.logo_path),
        name = escape_html(&cell.name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_links_open_in_new_tab() {
        let cell = HeaderCell {
            name: "Omeka".to_string(),
            link_url: "https://omeka.org/?a=1&b=2".to_string(),
            logo_path: "assets/img/Logo_omeka.webp".to_string(),
        };
        let html = render_header(&[cell.clone(), cell]);

        assert_eq!(html.matches("<a href=\"https://omeka.org/?a=1&amp;b=2\"").count(), 2);
        assert!(html.contains("target=\"_blank\" rel=\"noopener noreferrer\""));
        assert!(html.contains("<img class=\"logos\" src=\"assets/img/Logo_omeka.webp\" alt=\"Omeka\">"));
    }
}
