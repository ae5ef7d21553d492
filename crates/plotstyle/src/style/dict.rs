//! Input dictionaries and the merged output map.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::key::{InputKey, StyleKey};
use super::value::StyleValue;

/// One partial style mapping, as written by the caller.
///
/// Keys are kept verbatim (`"fc"`, `"color"`, `"facecolor"`) and in insertion
/// order. Setting a key that is already present replaces its value in place,
/// so ordering follows first insertion, as with a dictionary literal.
///
/// # Example
///
/// ```rust
/// use plotstyle::StyleDict;
///
/// let dict = StyleDict::new().with("fc", "red").with("lw", 2);
/// assert_eq!(dict.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDict {
    entries: Vec<(String, StyleValue)>,
}

impl StyleDict {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing any earlier value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<StyleValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`StyleDict::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Looks up a value by its raw name.
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Iterates raw entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterates entries with their keys resolved.
    pub fn resolved(&self) -> impl Iterator<Item = (InputKey, &StyleValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (InputKey::parse(name), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for StyleDict
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = StyleDict::new();
        for (name, value) in iter {
            dict.set(name, value);
        }
        dict
    }
}

/// A merged style: canonical keys only.
///
/// Produced by [`merge`](super::merge) and consumed by the plotting layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    values: BTreeMap<StyleKey, StyleValue>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the previous one.
    ///
    /// A [`StyleKey::Other`] spelling a known name or alias is stored under
    /// its canonical key. `Other("color")` writes both colours and returns the
    /// previous facecolor.
    pub fn insert(&mut self, key: StyleKey, value: StyleValue) -> Option<StyleValue> {
        let key = match key {
            StyleKey::Other(name) => match InputKey::parse(&name) {
                InputKey::Attribute(key) => key,
                InputKey::Color => {
                    self.values.insert(StyleKey::EdgeColor, value.clone());
                    return self.values.insert(StyleKey::FaceColor, value);
                }
            },
            key => key,
        };
        self.values.insert(key, value)
    }

    pub fn get(&self, key: &StyleKey) -> Option<&StyleValue> {
        self.values.get(key)
    }

    pub fn get_mut(&mut self, key: &StyleKey) -> Option<&mut StyleValue> {
        self.values.get_mut(key)
    }

    pub fn remove(&mut self, key: &StyleKey) -> Option<StyleValue> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &StyleKey) -> bool {
        self.values.contains_key(key)
    }

    /// Convenience accessor for the fill colour.
    pub fn facecolor(&self) -> Option<&StyleValue> {
        self.values.get(&StyleKey::FaceColor)
    }

    /// Convenience accessor for the outline colour.
    pub fn edgecolor(&self) -> Option<&StyleValue> {
        self.values.get(&StyleKey::EdgeColor)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, StyleKey, StyleValue> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for StyleMap
where
    K: Into<StyleKey>,
    V: Into<StyleValue>,
{
    /// Keys go through alias resolution, so `("lw", 2)` lands on `linewidth`
    /// and `("color", "red")` sets both colours. Later pairs win.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (key, value) in iter {
            map.insert(key.into(), value.into());
        }
        map
    }
}

impl<'a> IntoIterator for &'a StyleMap {
    type Item = (&'a StyleKey, &'a StyleValue);
    type IntoIter = btree_map::Iter<'a, StyleKey, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in &self.values {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
