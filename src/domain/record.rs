//! Catalog record model.
//!
//! A [`CatalogRecord`] is an ordered mapping from attribute name to
//! [`AttributeValue`]. Three keys are structural ([`NAME_KEY`],
//! [`LINK_URL_KEY`], [`LOGO_PATH_KEY`]) and feed the comparison header; every
//! other key is a comparison attribute. Key order follows the source document
//! and is significant: it is the tie-break order of the attribute sort.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// Unique display name, also the selection key.
pub const NAME_KEY: &str = "Name";

/// Target of the header link.
pub const LINK_URL_KEY: &str = "LinkURL";

/// Image shown in the header link.
pub const LOGO_PATH_KEY: &str = "LogoPath";

/// Keys rendered in the header and never listed as comparison rows.
pub const STRUCTURAL_KEYS: [&str; 3] = [NAME_KEY, LINK_URL_KEY, LOGO_PATH_KEY];

/// The distinguished multi-valued attribute rendered first, as chips.
pub const ACTIONS_KEY: &str = "Actions";

/// Cell text for an attribute the record does not have.
pub const PLACEHOLDER: &str = "-";

/// Value of a single attribute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    List(Vec<String>),
}

impl AttributeValue {
    /// Display text: lists are joined with `", "`.
    ///
    /// ```
    /// use compara::domain::AttributeValue;
    ///
    /// let v = AttributeValue::List(vec!["IIIF".into(), "RDF".into()]);
    /// assert_eq!(v.display(), "IIIF, RDF");
    /// ```
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join(", "),
        }
    }

    /// Individual items; a text value is a single item.
    #[must_use]
    pub fn items(&self) -> Vec<&str> {
        match self {
            Self::Text(text) => vec![text.as_str()],
            Self::List(items) => items.iter().map(String::as_str).collect(),
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) => None,
        }
    }
}

/// One comparable item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogRecord {
    fields: Vec<(String, AttributeValue)>,
}

impl CatalogRecord {
    /// Creates a record with its three structural attributes.
    ///
    /// ```
    /// use compara::domain::CatalogRecord;
    ///
    /// let record = CatalogRecord::new("Omeka", "https://omeka.org/", "img/omeka.webp")
    ///     .with_text("Cost", "Hybrid model")
    ///     .with_list("Actions", ["Digitization"]);
    ///
    /// assert_eq!(record.name(), "Omeka");
    /// assert_eq!(record.comparison_keys().collect::<Vec<_>>(), ["Cost", "Actions"]);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, link_url: impl Into<String>, logo_path: impl Into<String>) -> Self {
        Self::default()
            .with_text(NAME_KEY, name)
            .with_text(LINK_URL_KEY, link_url)
            .with_text(LOGO_PATH_KEY, logo_path)
    }

    #[must_use]
    pub fn with_text(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_value(key, AttributeValue::Text(value.into()))
    }

    #[must_use]
    pub fn with_list<I, S>(self, key: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_value(key, AttributeValue::List(items.into_iter().map(Into::into).collect()))
    }

    /// Sets an attribute, replacing the value in place if the key exists.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        let key = key.into();
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All keys in document order, structural keys included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Keys in document order, minus the structural ones.
    pub fn comparison_keys(&self) -> impl Iterator<Item = &str> {
        self.keys().filter(|key| !STRUCTURAL_KEYS.contains(key))
    }

    fn structural(&self, key: &str) -> &str {
        self.get(key).and_then(AttributeValue::as_text).unwrap_or_default()
    }

    /// Selection key. Empty only for records that never went through
    /// [`Catalog::from_records`](crate::catalog::Catalog::from_records).
    #[must_use]
    pub fn name(&self) -> &str {
        self.structural(NAME_KEY)
    }

    #[must_use]
    pub fn link_url(&self) -> &str {
        self.structural(LINK_URL_KEY)
    }

    #[must_use]
    pub fn logo_path(&self) -> &str {
        self.structural(LOGO_PATH_KEY)
    }

    /// Returns the first structural key that is absent or not a text value.
    #[must_use]
    pub fn missing_structural_key(&self) -> Option<&'static str> {
        STRUCTURAL_KEYS
            .into_iter()
            .find(|key| self.get(key).and_then(AttributeValue::as_text).is_none())
    }
}

impl<'de> Deserialize<'de> for CatalogRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = CatalogRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping attribute names to strings or string lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut fields: Vec<(String, AttributeValue)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, AttributeValue>()? {
                    if fields.iter().any(|(k, _)| *k == key) {
                        return Err(de::Error::custom(format!("duplicate attribute `{key}`")));
                    }
                    fields.push((key, value));
                }
                Ok(CatalogRecord { fields })
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_keeps_document_order() {
        let record: CatalogRecord = serde_json::from_str(
            r#"{"Name":"Wax","Cost":"Free","LinkURL":"u","Actions":["a","b"],"LogoPath":"l","Alpha":"x"}"#,
        )
        .unwrap();

        assert_eq!(record.keys().collect::<Vec<_>>(), ["Name", "Cost", "LinkURL", "Actions", "LogoPath", "Alpha"]);
        assert_eq!(record.comparison_keys().collect::<Vec<_>>(), ["Cost", "Actions", "Alpha"]);
        assert_eq!(record.get("Actions"), Some(&AttributeValue::List(vec!["a".into(), "b".into()])));
        assert_eq!(record.link_url(), "u");
    }

    #[test]
    fn deserialize_rejects_duplicate_keys() {
        let err = serde_json::from_str::<CatalogRecord>(r#"{"Name":"a","Name":"b"}"#).unwrap_err();
        assert!(err.to_string().contains("duplicate attribute `Name`"));
    }

    #[test]
    fn deserialize_rejects_non_string_values() {
        assert!(serde_json::from_str::<CatalogRecord>(r#"{"Name":"a","Cost":3}"#).is_err());
    }

    #[test]
    fn missing_structural_key_reports_first_gap() {
        let complete = CatalogRecord::new("a", "b", "c");
        assert_eq!(complete.missing_structural_key(), None);

        let no_logo = CatalogRecord::default().with_text(NAME_KEY, "a").with_text(LINK_URL_KEY, "b");
        assert_eq!(no_logo.missing_structural_key(), Some(LOGO_PATH_KEY));

        let list_name = CatalogRecord::default().with_list(NAME_KEY, ["a"]);
        assert_eq!(list_name.missing_structural_key(), Some(NAME_KEY));
    }

    #[test]
    fn with_value_replaces_in_place() {
        let record = CatalogRecord::new("a", "b", "c").with_text("Cost", "Free").with_text("Tier", "1").with_text("Cost", "Paid");
        assert_eq!(record.comparison_keys().collect::<Vec<_>>(), ["Cost", "Tier"]);
        assert_eq!(record.get("Cost").map(AttributeValue::display), Some("Paid".to_string()));
    }
}
