//! Typed element properties.
//!
//! Properties are an ordered mapping from property name to a closed set of
//! value types. Lookup of an absent property yields `None`; class membership
//! on an absent `className` is `false`.
//!
//! Decoding is lenient: a `null` value means the property is absent, list
//! items that are numbers or booleans become strings, and values of any
//! other shape are dropped with a warning instead of failing the document.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Property name holding the class list.
pub const CLASS_NAME: &str = "className";

/// A single property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Boolean attribute (`true` renders as a bare attribute).
    Bool(bool),
    /// Numeric attribute.
    Number(f64),
    /// Literal string attribute.
    String(String),
    /// Space-separated token list, such as class names.
    List(Vec<String>),
}

impl PropertyValue {
    /// String payload, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Tokens of this value.
    ///
    /// Lists yield their items and strings are split on ASCII whitespace.
    /// Returns `None` for booleans and numbers, which have no token form.
    #[must_use]
    pub fn tokens(&self) -> Option<Vec<&str>> {
        match self {
            Self::List(items) => Some(items.iter().map(String::as_str).collect()),
            Self::String(s) => Some(s.split_ascii_whitespace().collect()),
            Self::Bool(_) | Self::Number(_) => None,
        }
    }

    /// Whether this is a boolean or numeric value.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Bool(_) | Self::Number(_))
    }

    /// Convert a decoded JSON value, or `None` if it has no property form.
    fn from_json_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(b)),
            Value::Number(n) => n.as_f64().map(Self::Number),
            Value::String(s) => Some(Self::String(s)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    Value::Bool(b) => Some(b.to_string()),
                    Value::Null | Value::Array(_) | Value::Object(_) => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(Self::List),
            Value::Null | Value::Object(_) => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Element properties keyed by HAST property name.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, PropertyValue>);

impl<'de> Deserialize<'de> for Properties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
        let properties = raw
            .into_iter()
            .filter_map(|(name, value)| {
                if value.is_null() {
                    return None;
                }
                let decoded = PropertyValue::from_json_value(value);
                if decoded.is_none() {
                    tracing::warn!(property = %name, "Dropping property with unsupported value");
                }
                decoded.map(|value| (name, value))
            })
            .collect();
        Ok(Self(properties))
    }
}

impl Properties {
    /// Create an empty property map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a property by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0.get(name)
    }

    /// Set a property, returning the previous value if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.0.insert(name.into(), value.into())
    }

    /// Remove a property.
    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        self.0.remove(name)
    }

    /// Whether the class list contains `token`.
    #[must_use]
    pub fn has_class(&self, token: &str) -> bool {
        self.get(CLASS_NAME)
            .and_then(PropertyValue::tokens)
            .is_some_and(|tokens| tokens.contains(&token))
    }

    /// Add `token` to the class list, converting a string class into a list.
    pub fn add_class(&mut self, token: impl Into<String>) {
        let token = token.into();
        let mut classes: Vec<String> = self
            .get(CLASS_NAME)
            .and_then(PropertyValue::tokens)
            .map(|tokens| tokens.into_iter().map(str::to_owned).collect())
            .unwrap_or_default();
        if !classes.contains(&token) {
            classes.push(token);
        }
        self.insert(CLASS_NAME, PropertyValue::List(classes));
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate properties in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_class_list() {
        let props: Properties = [(
            CLASS_NAME,
            PropertyValue::List(vec!["a".to_owned(), "language-mermaid".to_owned()]),
        )]
        .into_iter()
        .collect();
        assert!(props.has_class("language-mermaid"));
        assert!(!props.has_class("language"));
    }

    #[test]
    fn test_has_class_string_is_split() {
        let props: Properties = [(CLASS_NAME, "hljs  language-mermaid")]
            .into_iter()
            .collect();
        assert!(props.has_class("language-mermaid"));
        assert!(props.has_class("hljs"));
    }

    #[test]
    fn test_has_class_absent() {
        assert!(!Properties::new().has_class("language-mermaid"));
    }

    #[test]
    fn test_has_class_scalar_is_false() {
        let props: Properties = [(CLASS_NAME, true)].into_iter().collect();
        assert!(!props.has_class("true"));
        assert!(props.get(CLASS_NAME).is_some_and(PropertyValue::is_scalar));
    }

    #[test]
    fn test_add_class_converts_string() {
        let mut props: Properties = [(CLASS_NAME, "a b")].into_iter().collect();
        props.add_class("c");
        props.add_class("a");
        assert_eq!(
            props.get(CLASS_NAME),
            Some(&PropertyValue::List(vec![
                "a".to_owned(),
                "b".to_owned(),
                "c".to_owned()
            ]))
        );
    }

    #[test]
    fn test_insert_replaces() {
        let mut props = Properties::new();
        assert!(props.insert("id", "one").is_none());
        assert_eq!(props.insert("id", "two"), Some(PropertyValue::from("one")));
        assert_eq!(props.get("id").and_then(PropertyValue::as_str), Some("two"));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_iter_is_name_ordered() {
        let props: Properties = [("b", "2"), ("a", "1")].into_iter().collect();
        let names: Vec<&str> = props.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
