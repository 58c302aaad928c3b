//! Layout plan computation.
//!
//! [`plan`] is a pure function of the two selection slots. It decides which
//! attribute rows appear and how they group, without touching markup.

use super::grouping::partition;
use super::keys::{attribute_keys, sort_attribute_keys, KeySet, DEFAULT_PRIORITY};
use crate::domain::{CatalogRecord, ACTIONS_KEY};

/// How a row group is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// The `Actions` attribute, shown as colored chips.
    Actions,
    /// Ordinary attributes, shown as label/value pairs.
    Attributes,
}

/// One comparison row covering one or more attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowGroup {
    pub kind: GroupKind,
    pub keys: Vec<String>,
}

impl RowGroup {
    #[must_use]
    pub fn actions() -> Self {
        Self {
            kind: GroupKind::Actions,
            keys: vec![ACTIONS_KEY.to_string()],
        }
    }

    #[must_use]
    pub const fn attributes(keys: Vec<String>) -> Self {
        Self {
            kind: GroupKind::Attributes,
            keys,
        }
    }

    /// A single attribute spans the full cell width.
    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.keys.len() == 1
    }
}

/// Output of the layout step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutPlan<'c> {
    /// At least one slot is unset.
    Empty,
    /// Both slots are set.
    Comparison {
        left: &'c CatalogRecord,
        right: &'c CatalogRecord,
        groups: Vec<RowGroup>,
    },
}

impl LayoutPlan<'_> {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Row groups in render order; none for [`LayoutPlan::Empty`].
    #[must_use]
    pub fn groups(&self) -> &[RowGroup] {
        match self {
            Self::Empty => &[],
            Self::Comparison { groups, .. } => groups,
        }
    }
}

/// Tunables of the layout step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Keys that sort first, in this order.
    pub priority: Vec<String>,
    pub key_set: KeySet,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            priority: DEFAULT_PRIORITY.iter().map(|k| (*k).to_string()).collect(),
            key_set: KeySet::First,
        }
    }
}

/// Computes the layout plan for a pair of selection slots.
///
/// ```
/// use compara::domain::CatalogRecord;
/// use compara::engine::{plan, LayoutOptions, LayoutPlan};
///
/// let omeka = CatalogRecord::new("Omeka", "https://omeka.org/", "omeka.webp")
///     .with_text("Cost", "Hybrid model")
///     .with_list("Actions", ["Digitization"]);
/// let wax = CatalogRecord::new("Wax", "https://wax", "wax.webp").with_text("Cost", "Free");
///
/// let options = LayoutOptions::default();
/// assert!(plan(Some(&omeka), None, &options).is_empty());
///
/// let layout = plan(Some(&omeka), Some(&wax), &options);
/// let keys: Vec<_> = layout.groups().iter().map(|g| g.keys.clone()).collect();
/// assert_eq!(keys, [vec!["Actions".to_string()], vec!["Cost".to_string()]]);
/// ```
#[must_use]
pub fn plan<'c>(
    left: Option<&'c CatalogRecord>,
    right: Option<&'c CatalogRecord>,
    options: &LayoutOptions,
) -> LayoutPlan<'c> {
    let (Some(left), Some(right)) = (left, right) else {
        tracing::debug!(left_set = left.is_some(), right_set = right.is_some(), "selection incomplete");
        return LayoutPlan::Empty;
    };

    let _span = tracing::debug_span!("plan", left = %left.name(), right = %right.name()).entered();

    let mut keys = attribute_keys(left, right, options.key_set);
    let mut groups = Vec::new();

    if let Some(position) = keys.iter().position(|key| key == ACTIONS_KEY) {
        keys.remove(position);
        groups.push(RowGroup::actions());
    }

    sort_attribute_keys(&mut keys, &options.priority);
    groups.extend(partition(&keys).into_iter().map(RowGroup::attributes));

    tracing::debug!(attribute_count = keys.len(), group_count = groups.len(), "layout planned");

    LayoutPlan::Comparison { left, right, groups }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, keys: &[&str]) -> CatalogRecord {
        keys.iter().fold(CatalogRecord::new(name, "https://example.org", "logo.png"), |r, key| {
            r.with_text(*key, format!("{name}:{key}"))
        })
    }

    fn group_keys<'a>(layout: &'a LayoutPlan<'_>) -> Vec<Vec<&'a str>> {
        layout
            .groups()
            .iter()
            .map(|g| g.keys.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn unset_slot_plans_empty() {
        let a = record("A", &["Cost"]);
        let options = LayoutOptions::default();
        assert!(plan(None, None, &options).is_empty());
        assert!(plan(Some(&a), None, &options).is_empty());
        assert!(plan(None, Some(&a), &options).is_empty());
        assert!(plan(None, Some(&a), &options).groups().is_empty());
    }

    #[test]
    fn actions_group_comes_first_wherever_it_sits() {
        let a = record("A", &["Cost", "Standards", "Actions"]);
        let b = record("B", &[]);
        let layout = plan(Some(&a), Some(&b), &LayoutOptions::default());

        assert_eq!(layout.groups()[0], RowGroup::actions());
        assert_eq!(group_keys(&layout), vec![vec!["Actions"], vec!["Standards", "Cost"]]);
    }

    #[test]
    fn bundled_shape_produces_actions_then_two_triples() {
        let a = record(
            "A",
            &["Standards", "Literacies", "Maintenance", "Actions", "Scalability", "Cost", "License type"],
        );
        let layout = plan(Some(&a), Some(&a), &LayoutOptions::default());

        assert_eq!(
            group_keys(&layout),
            vec![
                vec!["Actions"],
                vec!["Standards", "Literacies", "Maintenance"],
                vec!["Scalability", "Cost", "License type"],
            ]
        );
    }

    #[test]
    fn groups_cover_each_attribute_key_once() {
        let keys = ["k1", "Cost", "k9", "Actions", "k3", "Standards", "k2", "k5", "k4", "k8"];
        let a = record("A", &keys);
        let layout = plan(Some(&a), Some(&a), &LayoutOptions::default());

        let mut emitted: Vec<&str> = layout
            .groups()
            .iter()
            .filter(|g| g.kind == GroupKind::Attributes)
            .flat_map(|g| g.keys.iter().map(String::as_str))
            .collect();
        emitted.sort_unstable();

        let mut expected: Vec<&str> = keys.iter().copied().filter(|k| *k != "Actions").collect();
        expected.sort_unstable();
        assert_eq!(emitted, expected);

        let sizes: Vec<usize> = layout.groups().iter().map(|g| g.keys.len()).collect();
        assert_eq!(sizes, [1, 3, 1, 1, 1, 3]);
    }

    #[test]
    fn right_only_keys_follow_key_set() {
        let a = record("A", &["Cost"]);
        let b = record("B", &["Cost", "Hosting"]);

        let first = plan(Some(&a), Some(&b), &LayoutOptions::default());
        assert_eq!(group_keys(&first), vec![vec!["Cost"]]);

        let union = LayoutOptions {
            key_set: KeySet::Union,
            ..LayoutOptions::default()
        };
        assert_eq!(group_keys(&plan(Some(&a), Some(&b), &union)), vec![vec!["Cost", "Hosting"]]);
    }

    #[test]
    fn comparison_borrows_the_selected_records() {
        let a = record("A", &[]);
        let b = record("B", &[]);
        match plan(Some(&a), Some(&b), &LayoutOptions::default()) {
            LayoutPlan::Comparison { left, right, groups } => {
                assert!(std::ptr::eq(left, &a));
                assert!(std::ptr::eq(right, &b));
                assert!(groups.is_empty());
            }
            LayoutPlan::Empty => panic!("expected a comparison"),
        }
    }
}
