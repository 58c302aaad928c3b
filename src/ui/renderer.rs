//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: `AppState` to [`ComparisonView`]
//! 2. **Component Rendering**: the table or the empty message
//!
//! Every render recomputes the whole output; the caller replaces whatever it
//! showed before.
//!
//! ```
//! use compara::app::{AppState, Slot};
//! use compara::catalog::{CatalogSource, EmbeddedCatalog};
//! use compara::ui::{render, Markup, Theme};
//!
//! let catalog = EmbeddedCatalog.load()?;
//! let mut state = AppState::new(&catalog, Theme::default());
//! assert!(matches!(render(&state), Markup::Empty(_)));
//!
//! state.set_selection(Slot::Left, "Omeka");
//! state.set_selection(Slot::Right, "AtoM");
//! let Markup::Comparison(html) = render(&state) else { unreachable!() };
//! assert!(html.contains("alt=\"AtoM\""));
//! # Ok::<(), compara::CompareError>(())
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::ComparisonView;

/// Rendered output of one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    /// Table markup; the table is shown and the empty message hidden.
    Comparison(String),
    /// Empty message markup; the table is hidden.
    Empty(String),
}

impl Markup {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Comparison(html) | Self::Empty(html) => html,
        }
    }
}

/// Renders the current selection.
#[must_use]
pub fn render(state: &AppState<'_>) -> Markup {
    let _span = tracing::debug_span!(
        "render",
        left = ?state.selected_name(crate::app::Slot::Left),
        right = ?state.selected_name(crate::app::Slot::Right)
    )
    .entered();

    let markup = render_view(&state.compute_viewmodel());
    tracing::debug!(
        comparison = matches!(markup, Markup::Comparison(_)),
        bytes = markup.as_str().len(),
        "rendered"
    );
    markup
}

/// Renders a precomputed view model.
#[must_use]
pub fn render_view(view: &ComparisonView) -> Markup {
    match view {
        ComparisonView::Empty(empty) => Markup::Empty(components::render_empty_state(empty)),
        ComparisonView::Table(table) => Markup::Comparison(components::render_table(table)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Slot;
    use crate::catalog::Catalog;
    use crate::domain::CatalogRecord;
    use crate::ui::Theme;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            CatalogRecord::new("Omeka", "https://omeka.org/", "omeka.webp")
                .with_text("Cost", "Hybrid model")
                .with_list("Actions", ["Digitization"]),
            CatalogRecord::new("Wax", "https://wax", "wax.webp").with_list("Actions", ["Text processing"]),
        ])
        .unwrap()
    }

    #[test]
    fn unset_slot_renders_only_the_empty_message() {
        let catalog = catalog();
        let mut state = AppState::new(&catalog, Theme::default());
        state.set_selection(Slot::Left, "Omeka");

        let markup = render(&state);
        assert_eq!(
            markup,
            Markup::Empty("<p class=\"no-selection-message\">Select two items to compare.</p>\n".to_string())
        );
        assert!(!markup.as_str().contains("Omeka"));
    }

    #[test]
    fn missing_cost_renders_placeholder_in_that_cell() {
        let catalog = catalog();
        let mut state = AppState::new(&catalog, Theme::default());
        state.set_selection(Slot::Left, "Omeka");
        state.set_selection(Slot::Right, "Wax");

        let Markup::Comparison(html) = render(&state) else {
            panic!("expected comparison markup");
        };
        let cost_values: Vec<&str> = html
            .split("<strong>Cost:</strong></p>\n")
            .skip(1)
            .map(|rest| rest.lines().next().unwrap().trim())
            .collect();
        assert_eq!(cost_values, ["<p class=\"m-b-0\">Hybrid model</p>", "<p class=\"m-b-0\">-</p>"]);
    }

    #[test]
    fn actions_row_precedes_other_rows() {
        let catalog = catalog();
        let mut state = AppState::new(&catalog, Theme::default());
        state.set_selection(Slot::Left, "Omeka");
        state.set_selection(Slot::Right, "Wax");

        let html = render(&state).as_str().to_string();
        let actions = html.find("Actions:").unwrap();
        let cost = html.find("Cost:").unwrap();
        assert!(actions < cost);
        assert!(html.contains("background-color: #20c997"));
    }
}
