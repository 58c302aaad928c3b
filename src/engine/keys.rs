//! Attribute key selection and ordering.

use crate::domain::CatalogRecord;
use serde::Deserialize;
use std::cmp::Ordering;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Priority order applied to the comparison rows of the bundled catalog.
pub const DEFAULT_PRIORITY: [&str; 6] = [
    "Standards",
    "Literacies",
    "Maintenance",
    "Scalability",
    "Cost",
    "License type",
];

/// Which selected record(s) contribute comparison keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeySet {
    /// Keys of the left record only; right-only keys are not shown.
    #[default]
    First,
    /// Left keys, then right-only keys in the right record's order.
    Union,
}

impl FromStr for KeySet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "first" => Ok(Self::First),
            "union" => Ok(Self::Union),
            other => Err(format!("unknown key set `{other}` (expected `first` or `union`)")),
        }
    }
}

/// Comparison keys for a selected pair, structural keys excluded.
#[must_use]
pub fn attribute_keys(left: &CatalogRecord, right: &CatalogRecord, key_set: KeySet) -> Vec<String> {
    let mut keys: Vec<String> = left.comparison_keys().map(String::from).collect();

    if key_set == KeySet::Union {
        let extra: Vec<String> = right
            .comparison_keys()
            .filter(|key| !left.contains(key))
            .map(String::from)
            .collect();
        keys.extend(extra);
    }

    keys
}

/// Orders two keys: listed keys by list position and ahead of unlisted ones;
/// unlisted keys by [`collate`].
#[must_use]
pub fn compare_keys(a: &str, b: &str, priority: &[String]) -> Ordering {
    let rank = |key: &str| priority.iter().position(|p| p == key);

    match (rank(a), rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => collate(a, b),
    }
}

/// Locale-style string order.
///
/// Letters compare by base letter first, ignoring case and accents. Ties go
/// to the unaccented form, then to the lowercase form, then to code points.
///
/// ```
/// use compara::engine::collate;
/// use std::cmp::Ordering;
///
/// assert_eq!(collate("Área", "alcance"), Ordering::Greater);
/// assert_eq!(collate("area", "Área"), Ordering::Less);
/// assert_eq!(collate("zona", "Costo"), Ordering::Greater);
/// ```
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| folded(a).cmp(&folded(b)))
        .then_with(|| a.chars().map(char::is_uppercase).cmp(b.chars().map(char::is_uppercase)))
        .then_with(|| a.cmp(b))
}

fn base_letters(key: &str) -> String {
    key.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase).collect()
}

fn folded(key: &str) -> String {
    key.nfd().flat_map(char::to_lowercase).collect()
}

/// Stable sort by [`compare_keys`]; equal keys keep their original order.
///
/// ```
/// use compara::engine::sort_attribute_keys;
///
/// let priority = vec!["Standards".to_string(), "Literacies".to_string()];
/// let mut keys = vec!["Literacies".to_string(), "Cost".to_string(), "Standards".to_string()];
/// sort_attribute_keys(&mut keys, &priority);
/// assert_eq!(keys, ["Standards", "Literacies", "Cost"]);
/// ```
pub fn sort_attribute_keys(keys: &mut [String], priority: &[String]) {
    keys.sort_by(|a, b| compare_keys(a, b, priority));
}
