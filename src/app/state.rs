//! Application state: the two selection slots and everything the render
//! pipeline reads.
//!
//! [`AppState`] borrows the catalog for its whole lifetime; the slots hold
//! `&'c CatalogRecord` references into it, never copies.
//!
//! ```
//! use compara::app::{AppState, SelectionOutcome, Slot};
//! use compara::catalog::{CatalogSource, EmbeddedCatalog};
//! use compara::ui::Theme;
//!
//! let catalog = EmbeddedCatalog.load()?;
//! let mut state = AppState::new(&catalog, Theme::default());
//!
//! assert_eq!(state.set_selection(Slot::Left, "Omeka"), SelectionOutcome::Selected);
//! assert_eq!(state.set_selection(Slot::Right, "Wax"), SelectionOutcome::Selected);
//! assert!(!state.compute_viewmodel().is_empty());
//! # Ok::<(), compara::CompareError>(())
//! ```

use super::modes::{InitialSelection, LookupMissPolicy, Slot};
use crate::catalog::Catalog;
use crate::domain::CatalogRecord;
use crate::engine::{self, LayoutOptions, LayoutPlan};
use crate::ui::components::render_selector_options;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ComparisonView;

/// Default text of the empty-state container.
pub const DEFAULT_EMPTY_MESSAGE: &str = "Select two items to compare.";

/// The two comparison slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState<'c> {
    slots: [Option<&'c CatalogRecord>; 2],
}

impl<'c> SelectionState<'c> {
    #[must_use]
    pub const fn get(&self, slot: Slot) -> Option<&'c CatalogRecord> {
        self.slots[slot.index()]
    }

    pub fn set(&mut self, slot: Slot, record: Option<&'c CatalogRecord>) {
        self.slots[slot.index()] = record;
    }

    /// `(left, right)`.
    #[must_use]
    pub const fn pair(&self) -> (Option<&'c CatalogRecord>, Option<&'c CatalogRecord>) {
        (self.slots[0], self.slots[1])
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.slots[0].is_some() && self.slots[1].is_some()
    }
}

/// Result of [`AppState::set_selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The slot now holds the named record.
    Selected,
    /// An empty name cleared the slot.
    Cleared,
    /// The name is not in the catalog; the slot was resolved per `policy`.
    Missed { policy: LookupMissPolicy },
}

impl SelectionOutcome {
    /// Whether the outcome calls for a fresh render.
    ///
    /// A miss under [`LookupMissPolicy::KeepPrevious`] leaves the state
    /// untouched and renders nothing.
    #[must_use]
    pub const fn triggers_render(self) -> bool {
        !matches!(
            self,
            Self::Missed {
                policy: LookupMissPolicy::KeepPrevious
            }
        )
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState<'c> {
    /// The fixed catalog the selectors offer.
    pub catalog: &'c Catalog,

    pub selection: SelectionState<'c>,

    /// Chip colors for the `Actions` row.
    pub theme: Theme,

    /// Priority list and key set used by the layout step.
    pub layout: LayoutOptions,

    pub miss_policy: LookupMissPolicy,

    /// Whether selectors get a disabled "unset" option on top.
    pub placeholder_option: bool,

    /// Text shown while a slot is unset.
    pub empty_message: String,
}

impl<'c> AppState<'c> {
    /// Creates a state with both slots unset and default settings.
    #[must_use]
    pub fn new(catalog: &'c Catalog, theme: Theme) -> Self {
        Self {
            catalog,
            selection: SelectionState::default(),
            theme,
            layout: LayoutOptions::default(),
            miss_policy: LookupMissPolicy::default(),
            placeholder_option: false,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }

    /// Fills the slots according to the startup policy.
    pub fn apply_initial_selection(&mut self, initial: InitialSelection) {
        match initial {
            InitialSelection::Unset => {
                self.selection = SelectionState::default();
            }
            InitialSelection::FirstTwo => {
                self.selection.set(Slot::Left, self.catalog.get(0));
                self.selection.set(Slot::Right, self.catalog.get(1));
            }
        }

        tracing::debug!(
            initial = ?initial,
            left = ?self.selected_name(Slot::Left),
            right = ?self.selected_name(Slot::Right),
            "initial selection applied"
        );
    }

    /// Points `slot` at the record called `name`.
    ///
    /// - blank `name`: the slot is cleared
    /// - known `name`: the slot holds that record
    /// - unknown `name`: a warning is logged (with the closest catalog name)
    ///   and the slot is kept or cleared per [`AppState::miss_policy`]
    pub fn set_selection(&mut self, slot: Slot, name: &str) -> SelectionOutcome {
        let _span = tracing::debug_span!("set_selection", slot = %slot, name = %name).entered();

        if name.trim().is_empty() {
            self.selection.set(slot, None);
            tracing::debug!("slot cleared");
            return SelectionOutcome::Cleared;
        }

        let catalog = self.catalog;
        if let Some(record) = catalog.find_by_name(name) {
            self.selection.set(slot, Some(record));
            tracing::debug!("slot selected");
            return SelectionOutcome::Selected;
        }

        let policy = self.miss_policy;
        tracing::warn!(
            slot = %slot,
            name = %name,
            suggestion = ?catalog.closest_name(name),
            policy = ?policy,
            "selection not found in catalog"
        );

        if policy == LookupMissPolicy::Unset {
            self.selection.set(slot, None);
        }

        SelectionOutcome::Missed { policy }
    }

    #[must_use]
    pub fn selected_name(&self, slot: Slot) -> Option<&'c str> {
        self.selection.get(slot).map(CatalogRecord::name)
    }

    /// Layout plan for the current selection.
    #[must_use]
    pub fn compute_layout(&self) -> LayoutPlan<'c> {
        let (left, right) = self.selection.pair();
        engine::plan(left, right, &self.layout)
    }

    /// Renderable view model for the current selection.
    #[must_use]
    pub fn compute_viewmodel(&self) -> ComparisonView {
        ComparisonView::from_plan(&self.compute_layout(), &self.theme, &self.empty_message)
    }

    /// `<option>` markup for one selector, current selection marked.
    #[must_use]
    pub fn selector_options(&self, slot: Slot) -> String {
        render_selector_options(
            self.catalog.names(),
            self.selected_name(slot),
            self.placeholder_option,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            CatalogRecord::new("Omeka", "https://omeka.org/", "omeka.webp").with_text("Cost", "Hybrid model"),
            CatalogRecord::new("Wax", "https://wax", "wax.webp"),
            CatalogRecord::new("AtoM", "https://atom", "atom.webp").with_text("Cost", "Free"),
        ])
        .unwrap()
    }

    #[test]
    fn set_selection_stores_a_reference_into_the_catalog() {
        let catalog = catalog();
        let mut state = AppState::new(&catalog, Theme::default());

        assert_eq!(state.set_selection(Slot::Right, "AtoM"), SelectionOutcome::Selected);
        let held = state.selection.get(Slot::Right).unwrap();
        assert!(std::ptr::eq(held, catalog.get(2).unwrap()));
        assert!(state.selection.get(Slot::Left).is_none());
    }

    #[test]
    fn blank_name_clears_the_slot() {
        let catalog = catalog();
        let mut state = AppState::new(&catalog, Theme::default());
        state.set_selection(Slot::Left, "Omeka");

        assert_eq!(state.set_selection(Slot::Left, ""), SelectionOutcome::Cleared);
        assert_eq!(state.selected_name(Slot::Left), None);

        state.set_selection(Slot::Left, "Omeka");
        assert_eq!(state.set_selection(Slot::Left, "  "), SelectionOutcome::Cleared);
        assert_eq!(state.selected_name(Slot::Left), None);
    }

    #[test]
    fn miss_keeps_previous_by_default() {
        let catalog = catalog();
        let mut state = AppState::new(&catalog, Theme::default());
        state.set_selection(Slot::Left, "Wax");

        let outcome = state.set_selection(Slot::Left, "Nonexistent");
        assert_eq!(outcome, SelectionOutcome::Missed { policy: LookupMissPolicy::KeepPrevious });
        assert!(!outcome.triggers_render());
        assert_eq!(state.selected_name(Slot::Left), Some("Wax"));
    }

    #[test]
    fn miss_under_unset_policy_clears() {
        let catalog = catalog();
        let mut state = AppState::new(&catalog, Theme::default());
        state.miss_policy = LookupMissPolicy::Unset;
        state.set_selection(Slot::Left, "Wax");

        let outcome = state.set_selection(Slot::Left, "Nonexistent");
        assert_eq!(outcome, SelectionOutcome::Missed { policy: LookupMissPolicy::Unset });
        assert!(outcome.triggers_render());
        assert_eq!(state.selected_name(Slot::Left), None);
    }

    #[test]
    fn initial_selection_policies() {
        let catalog = catalog();
        let mut state = AppState::new(&catalog, Theme::default());

        state.apply_initial_selection(InitialSelection::FirstTwo);
        assert_eq!(state.selected_name(Slot::Left), Some("Omeka"));
        assert_eq!(state.selected_name(Slot::Right), Some("Wax"));
        assert!(state.selection.is_complete());

        state.apply_initial_selection(InitialSelection::Unset);
        assert_eq!(state.selection.pair(), (None, None));
    }

    #[test]
    fn first_two_with_single_entry_sets_left_only() {
        let single = Catalog::from_records(vec![CatalogRecord::new("Solo", "u", "l")]).unwrap();
        let mut state = AppState::new(&single, Theme::default());
        state.apply_initial_selection(InitialSelection::FirstTwo);

        assert_eq!(state.selected_name(Slot::Left), Some("Solo"));
        assert_eq!(state.selected_name(Slot::Right), None);
        assert!(state.compute_layout().is_empty());
    }

    #[test]
    fn same_record_may_fill_both_slots() {
        let catalog = catalog();
        let mut state = AppState::new(&catalog, Theme::default());
        state.set_selection(Slot::Left, "AtoM");
        state.set_selection(Slot::Right, "AtoM");
        assert!(!state.compute_layout().is_empty());
    }
}
