//! Actions representing effects on the page.
//!
//! The event handler returns a `Vec<Action>` after each event; the host
//! executes them in order against an [`OutputSink`] with [`Action::apply_to`].
//!
//! ```
//! use compara::app::Action;
//! use compara::ui::RecordingSink;
//!
//! let mut sink = RecordingSink::default();
//! Action::ShowEmpty { markup: "<p>none</p>".to_string() }.apply_to(&mut sink)?;
//! assert!(sink.empty_visible);
//! assert!(!sink.table_visible);
//! # Ok::<(), compara::CompareError>(())
//! ```

use super::modes::Slot;
use crate::domain::error::Result;
use crate::ui::renderer::Markup;
use crate::ui::sink::OutputSink;

/// Effects produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replaces a selector's option list.
    PopulateSelector {
        slot: Slot,
        /// `<option>` markup, current selection marked.
        options: String,
    },

    /// Shows the comparison table with fresh contents and hides the empty
    /// message.
    ShowComparison { markup: String },

    /// Shows the empty message and hides the table. The table's previous
    /// contents are left in place.
    ShowEmpty { markup: String },
}

impl Action {
    /// Executes the action against a sink.
    ///
    /// # Errors
    ///
    /// Propagates the sink's write errors.
    pub fn apply_to<S: OutputSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        match self {
            Self::PopulateSelector { slot, options } => sink.populate_selector(*slot, options),
            Self::ShowComparison { markup } => {
                sink.replace_table(markup)?;
                sink.set_empty_visible(false)?;
                sink.set_table_visible(true)
            }
            Self::ShowEmpty { markup } => {
                sink.replace_empty(markup)?;
                sink.set_table_visible(false)?;
                sink.set_empty_visible(true)
            }
        }
    }

    /// Whether this action is a render of the comparison area.
    #[must_use]
    pub const fn is_render(&self) -> bool {
        matches!(self, Self::ShowComparison { .. } | Self::ShowEmpty { .. })
    }
}

impl From<Markup> for Action {
    fn from(markup: Markup) -> Self {
        match markup {
            Markup::Comparison(markup) => Self::ShowComparison { markup },
            Markup::Empty(markup) => Self::ShowEmpty { markup },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::RecordingSink;

    #[test]
    fn show_comparison_replaces_table_and_toggles_visibility() {
        let mut sink = RecordingSink {
            empty_visible: true,
            ..RecordingSink::default()
        };
        Action::ShowComparison {
            markup: "<div>table</div>".to_string(),
        }
        .apply_to(&mut sink)
        .unwrap();

        assert_eq!(sink.table, "<div>table</div>");
        assert!(sink.table_visible);
        assert!(!sink.empty_visible);
    }

    #[test]
    fn show_empty_keeps_stale_table_hidden() {
        let mut sink = RecordingSink::default();
        Action::ShowComparison { markup: "old".to_string() }.apply_to(&mut sink).unwrap();
        Action::ShowEmpty { markup: "msg".to_string() }.apply_to(&mut sink).unwrap();

        assert_eq!(sink.table, "old");
        assert_eq!(sink.empty, "msg");
        assert!(!sink.table_visible);
        assert!(sink.empty_visible);
    }

    #[test]
    fn markup_converts_to_render_actions() {
        let action = Action::from(Markup::Empty("e".to_string()));
        assert_eq!(action, Action::ShowEmpty { markup: "e".to_string() });
        assert!(action.is_render());
        assert!(!Action::PopulateSelector {
            slot: Slot::Left,
            options: String::new()
        }
        .is_render());
    }
}
