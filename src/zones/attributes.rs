//! Zone attribute maps.
//!
//! Zone records carry arbitrary string-keyed text fields (name, description,
//! color label, ...). Keys are not schema-enforced, so every lookup is
//! explicit about the missing case: `get` returns an `Option`, `get_or`
//! takes the fallback.

use std::borrow::Borrow;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Key for accessing zone attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeKey(pub String);

impl AttributeKey {
    /// Create a new attribute key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AttributeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AttributeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// String-keyed text attributes of a zone.
///
/// ## Example
///
/// ```
/// use airspace_geofence::zones::Attributes;
///
/// let attrs = Attributes::new()
///     .with("name", "Songshan Airport")
///     .with("color", "red");
///
/// assert_eq!(attrs.get("name"), Some("Songshan Airport"));
/// assert_eq!(attrs.get_or("description", ""), "");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(FxHashMap<AttributeKey, String>);

impl Attributes {
    /// Create an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with(mut self, key: impl Into<AttributeKey>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an attribute, returning the previous value.
    pub fn insert(&mut self, key: impl Into<AttributeKey>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Get an attribute value, or `default` when the key is absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Check if a key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<AttributeKey>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_key() {
        let key1 = AttributeKey::new("name");
        let key2: AttributeKey = "name".into();
        assert_eq!(key1, key2);
        assert_eq!(key1.as_str(), "name");
    }

    #[test]
    fn test_get_and_get_or() {
        let attrs = Attributes::new().with("name", "Zone A");

        assert_eq!(attrs.get("name"), Some("Zone A"));
        assert_eq!(attrs.get("color"), None);
        assert_eq!(attrs.get_or("name", "Unknown"), "Zone A");
        assert_eq!(attrs.get_or("color", "Restricted"), "Restricted");
    }

    #[test]
    fn test_empty_value_is_present() {
        let attrs = Attributes::new().with("name", "");
        assert!(attrs.contains_key("name"));
        assert_eq!(attrs.get_or("name", "Unknown"), "");
    }

    #[test]
    fn test_insert_replaces() {
        let mut attrs = Attributes::new();
        assert_eq!(attrs.insert("color", "red"), None);
        assert_eq!(attrs.insert("color", "yellow"), Some("red".to_string()));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_from_iterator_order_irrelevant() {
        let a: Attributes = [("name", "A"), ("color", "red")].into_iter().collect();
        let b: Attributes = [("color", "red"), ("name", "A")].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let attrs = Attributes::new().with("空域名稱", "松山機場");
        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, r#"{"空域名稱":"松山機場"}"#);

        let deserialized: Attributes = serde_json::from_str(&json).unwrap();
        assert_eq!(attrs, deserialized);
    }
}
