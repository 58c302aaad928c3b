//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the host (page load, selector changes)
//! 2. [`handle_event`] pattern-matches the event
//! 3. State mutations go through `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Example
//!
//! ```
//! use compara::app::{handle_event, Action, AppState, Event};
//! use compara::catalog::{CatalogSource, EmbeddedCatalog};
//! use compara::ui::Theme;
//!
//! let catalog = EmbeddedCatalog.load()?;
//! let mut state = AppState::new(&catalog, Theme::default());
//!
//! let actions = handle_event(&mut state, &Event::parse_line("1 Omeka")?)?;
//! assert!(matches!(actions.as_slice(), [Action::ShowEmpty { .. }]));
//! # Ok::<(), compara::CompareError>(())
//! ```

use super::actions::Action;
use super::modes::Slot;
use super::state::AppState;
use crate::domain::error::{CompareError, Result};
use crate::ui::renderer::render;

/// Events delivered by the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The page finished loading: fill both selectors and render once.
    Load,

    /// A selector changed. An empty `name` means the slot was cleared.
    SelectionChanged { slot: Slot, name: String },
}

impl Event {
    /// Parses one line of the host wire format.
    ///
    /// - `load`: [`Event::Load`]
    /// - `<slot> <name>`: select `name` in slot `1` or `2`
    /// - `<slot>`: clear that slot
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvalidEvent`] for blank lines or a
    /// non-numeric slot, and [`CompareError::InvalidSlot`] for numbers other
    /// than 1 and 2.
    ///
    /// ```
    /// use compara::app::{Event, Slot};
    ///
    /// assert_eq!(
    ///     Event::parse_line("2 Fedora Commons\n")?,
    ///     Event::SelectionChanged { slot: Slot::Right, name: "Fedora Commons".to_string() }
    /// );
    /// assert_eq!(
    ///     Event::parse_line("1")?,
    ///     Event::SelectionChanged { slot: Slot::Left, name: String::new() }
    /// );
    /// assert!(Event::parse_line("3 Omeka").is_err());
    /// # Ok::<(), compara::CompareError>(())
    /// ```
    pub fn parse_line(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CompareError::InvalidEvent("empty event line".to_string()));
        }
        if line == "load" {
            return Ok(Self::Load);
        }

        let (slot, name) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let number: u8 = slot
            .parse()
            .map_err(|_| CompareError::InvalidEvent(format!("expected a slot number, got `{slot}`")))?;

        Ok(Self::SelectionChanged {
            slot: Slot::try_from(number)?,
            name: name.trim().to_string(),
        })
    }
}

/// Processes an event, mutates application state, and returns actions to
/// execute in order.
///
/// A selection change yields at most one render action. A miss under the
/// keep-previous policy yields none.
///
/// # Errors
///
/// Currently infallible for well-formed events; the `Result` matches the
/// sink-facing API so hosts can `?` through the whole pipeline.
pub fn handle_event(state: &mut AppState<'_>, event: &Event) -> Result<Vec<Action>> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Load => {
            let mut actions: Vec<Action> = Slot::ALL
                .iter()
                .map(|&slot| Action::PopulateSelector {
                    slot,
                    options: state.selector_options(slot),
                })
                .collect();

            tracing::info!(
                items = state.catalog.len(),
                left = ?state.selected_name(Slot::Left),
                right = ?state.selected_name(Slot::Right),
                "page loaded"
            );

            actions.push(render(state).into());
            Ok(actions)
        }
        Event::SelectionChanged { slot, name } => {
            let outcome = state.set_selection(*slot, name);

            if outcome.triggers_render() {
                Ok(vec![render(state).into()])
            } else {
                tracing::debug!(outcome = ?outcome, "selection unchanged, skipping render");
                Ok(vec![])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{InitialSelection, LookupMissPolicy};
    use crate::catalog::Catalog;
    use crate::domain::CatalogRecord;
    use crate::ui::Theme;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            CatalogRecord::new("Omeka", "https://omeka.org/", "omeka.webp").with_text("Cost", "Hybrid"),
            CatalogRecord::new("Wax", "https://wax", "wax.webp").with_text("Cost", "Free"),
        ])
        .unwrap()
    }

    #[test]
    fn parse_line_rejects_garbage() {
        assert!(matches!(Event::parse_line("   "), Err(CompareError::InvalidEvent(_))));
        assert!(matches!(Event::parse_line("left Omeka"), Err(CompareError::InvalidEvent(_))));
        assert!(matches!(Event::parse_line("0 Omeka"), Err(CompareError::InvalidSlot(0))));
        assert_eq!(Event::parse_line("load").unwrap(), Event::Load);
    }

    #[test]
    fn load_populates_both_selectors_then_renders_once() {
        let catalog = catalog();
        let mut state = AppState::new(&catalog, Theme::default());
        state.apply_initial_selection(InitialSelection::FirstTwo);

        let actions = handle_event(&mut state, &Event::Load).unwrap();
        assert_eq!(actions.len(), 3);
        assert!(matches!(&actions[0], Action::PopulateSelector { slot: Slot::Left, options } if options.contains("value=\"Omeka\" selected")));
        assert!(matches!(&actions[1], Action::PopulateSelector { slot: Slot::Right, options } if options.contains("value=\"Wax\" selected")));
        assert!(matches!(&actions[2], Action::ShowComparison { .. }));
    }

    #[test]
    fn each_change_renders_exactly_once() {
        let catalog = catalog();
        let mut state = AppState::new(&catalog, Theme::default());

        let first = handle_event(
            &mut state,
            &Event::SelectionChanged {
                slot: Slot::Left,
                name: "Wax".to_string(),
            },
        )
        .unwrap();
        assert!(matches!(first.as_slice(), [Action::ShowEmpty { .. }]));

        let second = handle_event(
            &mut state,
            &Event::SelectionChanged {
                slot: Slot::Right,
                name: "Omeka".to_string(),
            },
        )
        .unwrap();
        assert!(matches!(second.as_slice(), [Action::ShowComparison { .. }]));

        let cleared = handle_event(
            &mut state,
            &Event::SelectionChanged {
                slot: Slot::Right,
                name: String::new(),
            },
        )
        .unwrap();
        assert!(matches!(cleared.as_slice(), [Action::ShowEmpty { .. }]));
    }

    #[test]
    fn miss_renders_only_under_unset_policy() {
        let catalog = catalog();
        let mut state = AppState::new(&catalog, Theme::default());
        state.apply_initial_selection(InitialSelection::FirstTwo);
        let miss = Event::SelectionChanged {
            slot: Slot::Left,
            name: "Nonexistent".to_string(),
        };

        assert!(handle_event(&mut state, &miss).unwrap().is_empty());
        assert_eq!(state.selected_name(Slot::Left), Some("Omeka"));

        state.miss_policy = LookupMissPolicy::Unset;
        let actions = handle_event(&mut state, &miss).unwrap();
        assert!(matches!(actions.as_slice(), [Action::ShowEmpty { .. }]));
        assert_eq!(state.selected_name(Slot::Left), None);
    }
}
