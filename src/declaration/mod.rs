//! Declaration objects produced by style resolution.
//!
//! A [`Declarations`] value is an ordered map from a key to a [`Value`]. Keys
//! are either literal CSS property names (`padding-top`) or selector fragments
//! that open a nested scope (`&:hover`, `&::before`, `@media (min-width: 768px)`).
//!
//! The shape mirrors what CSS-in-JS style libraries accept, so the result can
//! be serialized straight to JSON and handed over:
//!
//! ```rust
//! use proper_style::{declarations, Declarations};
//!
//! let rule = declarations! { "color" => "red" }.wrap("&:hover");
//! assert_eq!(rule.to_json_compact(), r#"{"&:hover":{"color":"red"}}"#);
//! ```
//!
//! Insertion order is preserved so that identical input always yields an
//! identical object. Overwriting an existing key keeps its original position.

mod merge;

use indexmap::map::{IntoIter, Iter, Keys};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single value inside a [`Declarations`] object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A literal CSS value.
    Text(String),
    /// A numeric CSS value.
    Number(f64),
    /// A sequence of values; merging appends rather than overwrites.
    List(Vec<Value>),
    /// A nested scope (pseudo-selector, combinator or media query).
    Nested(Declarations),
}

impl Value {
    /// Returns the text if this is a [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the nested object if this is a [`Value::Nested`].
    pub fn as_nested(&self) -> Option<&Declarations> {
        match self {
            Value::Nested(d) => Some(d),
            _ => None,
        }
    }

    /// Returns `true` for [`Value::Nested`].
    pub fn is_nested(&self) -> bool {
        matches!(self, Value::Nested(_))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<Declarations> for Value {
    fn from(d: Declarations) -> Self {
        Value::Nested(d)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

/// An ordered mapping of declaration keys to values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Declarations {
    entries: IndexMap<String, Value>,
}

impl Declarations {
    /// Creates an empty declaration object.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Inserts a value, replacing any previous value under the same key.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder form of [`Declarations::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Gets the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Gets the nested object stored under `key`, if the value is one.
    pub fn get_nested(&self, key: &str) -> Option<&Declarations> {
        self.get(key).and_then(Value::as_nested)
    }

    /// Checks whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the object has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over top-level entries in insertion order.
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Iterates over top-level keys in insertion order.
    pub fn keys(&self) -> Keys<'_, String, Value> {
        self.entries.keys()
    }

    /// Wraps this object in a single-key object: `{key: self}`.
    pub fn wrap(self, key: impl Into<String>) -> Declarations {
        let mut outer = Declarations::new();
        outer.insert(key, Value::Nested(self));
        outer
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> String {
        // Keys are strings and values are plain data, serialization cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Serializes to single-line JSON.
    pub fn to_json_compact(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl IntoIterator for Declarations {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Declarations {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Declarations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut decls = Declarations::new();
        for (k, v) in iter {
            decls.insert(k, v);
        }
        decls
    }
}

/// Builds a [`Declarations`] object from `key => value` pairs.
///
/// ```rust
/// use proper_style::declarations;
///
/// let d = declarations! {
///     "display" => "flex",
///     "&:hover" => declarations! { "color" => "red" },
/// };
/// assert_eq!(d.len(), 2);
/// ```
#[macro_export]
macro_rules! declarations {
    () => { $crate::Declarations::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut decls = $crate::Declarations::new();
        $( decls.insert($key, $value); )+
        decls
    }};
}
