//! Ordered placeholder context.
//!
//! A [`Context`] maps placeholder keys to [`ContextValue`]s and remembers the
//! order keys were inserted in. Re-inserting a key replaces its value but
//! keeps its position.
//!
//! # Deserialization
//!
//! Contexts are usually authored as data. Any self-describing format works:
//!
//! ```yaml
//! $CHANGES: "* Fix crash on empty input"
//! $MAJOR: 1
//! $NEXT_MAJOR_VERSION:
//!   $MAJOR: 2
//!   $MINOR: 0
//!   $PATCH: 0
//!   template: "$MAJOR.$MINOR.$PATCH"
//! ```
//!
//! Strings become text, integers and floats become numbers, and maps become
//! nested templates (a nested map must carry a string `template` entry).
//! Booleans, nulls and sequences are rejected with the offending key named
//! in the error.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::{ContextValue, NestedTemplate, Number, TEMPLATE_KEY};

/// Ordered mapping from placeholder key to value.
///
/// # Example
///
/// ```
/// use drafter_template::Context;
///
/// let context = Context::new()
///     .with("$MAJOR", 1)
///     .with("$MINOR", 0)
///     .with("$CHANGES", "NO CHANGES");
///
/// let keys: Vec<_> = context.keys().collect();
/// assert_eq!(keys, ["$MAJOR", "$MINOR", "$CHANGES"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    entries: Vec<(String, ContextValue)>,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Context::default()
    }

    /// Adds or replaces a value, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds or replaces a value.
    ///
    /// Returns the previous value if the key was already present; the key
    /// keeps its original position.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ContextValue>,
    ) -> Option<ContextValue> {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<ContextValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Looks up a key.
    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Context
where
    K: Into<String>,
    V: Into<ContextValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Context::new();
        context.extend(iter);
        context
    }
}

impl<K, V> Extend<(K, V)> for Context
where
    K: Into<String>,
    V: Into<ContextValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Context {
    type Item = (String, ContextValue);
    type IntoIter = std::vec::IntoIter<(String, ContextValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// ============================================================================
// Serde
// ============================================================================

impl Serialize for Context {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Non-finite floats have no number form in most formats, so they serialize
/// as their rendered text (`NaN`, `Infinity`, `-Infinity`) and read back as
/// `Text` that renders the same.
impl Serialize for ContextValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ContextValue::Text(text) => serializer.serialize_str(text),
            ContextValue::Number(Number::I64(n)) => serializer.serialize_i64(*n),
            ContextValue::Number(Number::U64(n)) => serializer.serialize_u64(*n),
            ContextValue::Number(Number::F64(n)) if n.is_finite() => serializer.serialize_f64(*n),
            ContextValue::Number(number) => serializer.collect_str(number),
            ContextValue::Nested(nested) => nested.serialize(serializer),
        }
    }
}

impl Serialize for NestedTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        for (key, value) in self.fields.iter() {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(TEMPLATE_KEY, &self.template)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Context {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ContextVisitor)
    }
}

struct ContextVisitor;

impl<'de> Visitor<'de> for ContextVisitor {
    type Value = Context;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of placeholder keys to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Context, A::Error> {
        let mut context = Context::new();
        while let Some(key) = map.next_key::<String>()? {
            let value = map
                .next_value::<ContextValue>()
                .map_err(|err| <A::Error as de::Error>::custom(format_args!("{}: {}", key, err)))?;
            context.insert(key, value);
        }
        Ok(context)
    }
}

impl<'de> Deserialize<'de> for ContextValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = ContextValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, a number, or a map with a `template` entry")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ContextValue, E> {
        Ok(ContextValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<ContextValue, E> {
        Ok(ContextValue::Text(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ContextValue, E> {
        Ok(ContextValue::Number(Number::I64(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ContextValue, E> {
        Ok(ContextValue::Number(Number::U64(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<ContextValue, E> {
        Ok(ContextValue::Number(Number::F64(v)))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<ContextValue, A::Error> {
        let fields = ContextVisitor.visit_map(map)?;
        NestedTemplate::try_from(fields)
            .map(ContextValue::Nested)
            .map_err(de::Error::custom)
    }
}
