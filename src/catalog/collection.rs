//! The immutable catalog of comparable items.

use crate::domain::error::{CompareError, Result};
use crate::domain::CatalogRecord;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::collections::HashSet;

/// Ordered, read-only collection of [`CatalogRecord`]s.
///
/// Built once at startup and never mutated; selection slots hold shared
/// references into it. Construction checks the two structural invariants:
/// every record carries the structural keys as text, and `Name` is unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
}

impl Catalog {
    /// Validates and wraps a list of records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Catalog`] when a record lacks a structural key
    /// or two records share a `Name`.
    pub fn from_records(records: Vec<CatalogRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if let Some(key) = record.missing_structural_key() {
                return Err(CompareError::Catalog(format!(
                    "record #{index} has no text value for `{key}`"
                )));
            }
            if !seen.insert(record.name()) {
                return Err(CompareError::Catalog(format!(
                    "duplicate name `{}` (record #{index})",
                    record.name()
                )));
            }
        }
        drop(seen);

        tracing::debug!(record_count = records.len(), "catalog validated");
        Ok(Self { records })
    }

    /// Parses a JSON array of record objects.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Json`] for malformed documents and
    /// [`CompareError::Catalog`] for invariant violations.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<CatalogRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Exact-match lookup by `Name`. Linear scan; catalogs are small.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogRecord> {
        self.records.iter().find(|record| record.name() == name)
    }

    /// Best fuzzy match for a name that missed, for diagnostics only.
    #[must_use]
    pub fn closest_name(&self, name: &str) -> Option<&str> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        let matcher = SkimMatcherV2::default();
        self.records
            .iter()
            .filter_map(|record| {
                matcher
                    .fuzzy_match(&record.name().to_lowercase(), &query)
                    .map(|score| (score, record.name()))
            })
            .max_by_key(|(score, _)| *score)
            .map(|(_, name)| name)
    }

    /// Names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(CatalogRecord::name)
    }

    #[must_use]
    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CatalogRecord> {
        self.records.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
