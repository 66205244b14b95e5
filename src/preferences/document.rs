//! The persisted preference document and its categories.
//!
//! The document is kept as an open JSON object rather than a fixed struct:
//! documents written by other clients (or older versions) may carry extra keys
//! or malformed values, and both must survive a load/save cycle without
//! failing. Typed readers below interpret each category leniently.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Top-level keys of the preference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Flattened widget order across all columns.
    Positions,
    /// Widget count per column.
    Columns,
    /// Widget id to collapsed flag.
    Collapsed,
    /// Widget id to disabled flag (true = in the panel).
    Disabled,
}

impl Category {
    /// Key used in the serialized document.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Positions => "positions",
            Category::Columns => "columns",
            Category::Collapsed => "collapsed",
            Category::Disabled => "disabled",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full preference state of one dashboard instance.
///
/// Shape on the wire:
///
/// ```json
/// { "positions": ["a", "b"], "columns": [1, 1],
///   "collapsed": {"a": true}, "disabled": {"b": false} }
/// ```
///
/// Every key is optional on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceDocument(Map<String, Value>);

impl PreferenceDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a serialized document.
    ///
    /// Anything that is not a JSON object (including invalid JSON) yields
    /// `None`; callers treat that as "no stored preferences".
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(json) {
            Ok(Value::Object(map)) => Some(Self(map)),
            Ok(other) => {
                tracing::debug!("Ignoring non-object preference document: {}", other);
                None
            }
            Err(e) => {
                tracing::debug!("Ignoring unparseable preference document: {}", e);
                None
            }
        }
    }

    /// Serializes the document. Keys are emitted in sorted order, so equal
    /// documents always produce equal strings.
    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }

    /// Returns `true` if no category is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw value stored under `category`, if any.
    pub fn category(&self, category: Category) -> Option<&Value> {
        self.0.get(category.as_str())
    }

    /// Mutable access to `category`, inserting an empty object when absent.
    pub(crate) fn category_mut(&mut self, category: Category) -> &mut Value {
        self.0
            .entry(category.as_str())
            .or_insert_with(|| Value::Object(Map::new()))
    }

    /// Replaces the whole value stored under `category`.
    pub(crate) fn replace(&mut self, category: Category, value: Value) {
        self.0.insert(category.as_str().to_string(), value);
    }

    /// Stored widget order. Non-array values and non-string entries are
    /// ignored.
    pub fn positions(&self) -> Vec<String> {
        self.category(Category::Positions)
            .and_then(Value::as_array)
            .map(|ids| {
                ids.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Stored column sizes.
    ///
    /// Returns `None` when absent or when any entry is not a non-negative
    /// integer: a partially readable size list is as untrustworthy as a
    /// missing one.
    pub fn column_sizes(&self) -> Option<Vec<usize>> {
        let sizes = self.category(Category::Columns)?.as_array()?;
        sizes
            .iter()
            .map(|v| v.as_u64().and_then(|n| usize::try_from(n).ok()))
            .collect()
    }

    /// Boolean entries of a map category (`collapsed` or `disabled`), in key
    /// order. Non-boolean values are skipped.
    pub fn flags(&self, category: Category) -> Vec<(String, bool)> {
        self.category(category)
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(id, v)| v.as_bool().map(|b| (id.clone(), b)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// A single boolean flag, `None` if unset or not a boolean.
    pub fn flag(&self, category: Category, id: &str) -> Option<bool> {
        self.category(category)
            .and_then(|v| v.get(id))
            .and_then(Value::as_bool)
    }
}

impl From<Map<String, Value>> for PreferenceDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> PreferenceDocument {
        PreferenceDocument::from_json(&value.to_string()).expect("object document")
    }

    #[test]
    fn from_json_rejects_non_objects() {
        assert!(PreferenceDocument::from_json("[1, 2]").is_none());
        assert!(PreferenceDocument::from_json("not json").is_none());
        assert!(PreferenceDocument::from_json("").is_none());
    }

    #[test]
    fn to_json_is_key_ordered() {
        let a = doc(json!({"disabled": {"x": true}, "columns": [1]}));
        let b = doc(json!({"columns": [1], "disabled": {"x": true}}));
        assert_eq!(a.to_json(), b.to_json());
    }

    #[test]
    fn positions_skip_non_string_entries() {
        let d = doc(json!({"positions": ["a", 3, null, "b"]}));
        assert_eq!(d.positions(), vec!["a", "b"]);
    }

    #[test]
    fn positions_of_wrong_type_are_empty() {
        let d = doc(json!({"positions": {}}));
        assert!(d.positions().is_empty());
        assert!(PreferenceDocument::new().positions().is_empty());
    }

    #[test]
    fn column_sizes_reject_negative_or_fractional() {
        assert_eq!(doc(json!({"columns": [2, 1]})).column_sizes(), Some(vec![2, 1]));
        assert_eq!(doc(json!({"columns": [2, -1]})).column_sizes(), None);
        assert_eq!(doc(json!({"columns": [1.5, 1]})).column_sizes(), None);
        assert_eq!(doc(json!({"columns": {}})).column_sizes(), None);
        assert_eq!(PreferenceDocument::new().column_sizes(), None);
    }

    #[test]
    fn flags_skip_non_booleans() {
        let d = doc(json!({"collapsed": {"a": true, "b": "yes", "c": false}}));
        assert_eq!(
            d.flags(Category::Collapsed),
            vec![("a".to_string(), true), ("c".to_string(), false)]
        );
        assert_eq!(d.flag(Category::Collapsed, "a"), Some(true));
        assert_eq!(d.flag(Category::Collapsed, "b"), None);
        assert_eq!(d.flag(Category::Disabled, "a"), None);
    }

    #[test]
    fn unknown_keys_survive_round_trip() {
        let d = doc(json!({"theme": "dark", "positions": ["a"]}));
        let again = PreferenceDocument::from_json(&d.to_json()).expect("object");
        assert_eq!(again.0.get("theme"), Some(&json!("dark")));
    }

    #[test]
    fn category_display_matches_key() {
        assert_eq!(Category::Positions.to_string(), "positions");
        assert_eq!(Category::Disabled.as_str(), "disabled");
    }
}
