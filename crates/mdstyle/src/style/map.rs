//! Ordered style maps and element groups.

use indexmap::map::{IndexMap, Iter};
use serde::{Deserialize, Serialize};

use super::value::StyleValue;

/// Property declarations for one element, in authoring order.
///
/// Inserting a property that already exists replaces its value and keeps the
/// property at its original position ("last write wins").
///
/// # Example
///
/// ```rust
/// use mdstyle::StyleMap;
///
/// let h1 = StyleMap::new()
///     .with("margin", "0 auto 0")
///     .with("font-size", "3em")
///     .with("font-size", "1.4em");
///
/// assert_eq!(h1.len(), 2);
/// assert_eq!(h1.to_declarations(), "margin: 0 auto 0; font-size: 1.4em;");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    properties: IndexMap<String, StyleValue>,
}

impl StyleMap {
    /// Creates an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property, returning the updated map for chaining.
    pub fn with<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a property, returning the value it replaced.
    pub fn insert<V: Into<StyleValue>>(&mut self, name: &str, value: V) -> Option<StyleValue> {
        self.properties.insert(name.to_string(), value.into())
    }

    /// Looks up a property value.
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.properties.get(name)
    }

    /// Returns true if the property is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Number of declared properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if no properties are declared.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates over `(property, value)` pairs in authoring order.
    pub fn iter(&self) -> Iter<'_, String, StyleValue> {
        self.properties.iter()
    }

    /// Renders the map as inline CSS declarations.
    ///
    /// Pairs are written as `prop: value;` in authoring order, separated by a
    /// single space. An empty map renders as an empty string.
    pub fn to_declarations(&self) -> String {
        self.properties
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Overlays `other` onto this map property by property.
    pub(crate) fn merge_from(&mut self, other: &StyleMap) {
        for (name, value) in &other.properties {
            self.properties.insert(name.clone(), value.clone());
        }
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StyleMap {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

/// Style maps keyed by semantic element id (`h1`, `blockquote_title`, `td`...).
///
/// An id that is absent means "no styling for this element". An id mapped to
/// an empty [`StyleMap`] is present and is kept as such through derivation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleGroup {
    elements: IndexMap<String, StyleMap>,
}

impl StyleGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element, returning the updated group for chaining.
    pub fn with(mut self, id: &str, styles: StyleMap) -> Self {
        self.insert(id, styles);
        self
    }

    /// Sets the style map of an element, returning the map it replaced.
    pub fn insert(&mut self, id: &str, styles: StyleMap) -> Option<StyleMap> {
        self.elements.insert(id.to_string(), styles)
    }

    /// Looks up the style map of an element.
    pub fn get(&self, id: &str) -> Option<&StyleMap> {
        self.elements.get(id)
    }

    /// Returns true if the element has an entry, even an empty one.
    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Number of element entries.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the group has no entries.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element ids in authoring order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(|s| s.as_str())
    }

    /// Iterates over `(element id, style map)` pairs in authoring order.
    pub fn iter(&self) -> Iter<'_, String, StyleMap> {
        self.elements.iter()
    }

    /// Overlays `other` onto this group element by element.
    ///
    /// Elements present on both sides have their maps merged property by
    /// property; elements only in `other` are appended.
    pub(crate) fn merge_from(&mut self, other: &StyleGroup) {
        for (id, styles) in &other.elements {
            match self.elements.get_mut(id) {
                Some(existing) => {
                    log::trace!("merging {} properties into '{}'", styles.len(), id);
                    existing.merge_from(styles);
                }
                None => {
                    log::trace!("adding element '{}'", id);
                    self.elements.insert(id.clone(), styles.clone());
                }
            }
        }
    }
}

impl<K: Into<String>> FromIterator<(K, StyleMap)> for StyleGroup {
    fn from_iter<T: IntoIterator<Item = (K, StyleMap)>>(iter: T) -> Self {
        Self {
            elements: iter.into_iter().map(|(id, map)| (id.into(), map)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StyleGroup {
    type Item = (&'a String, &'a StyleMap);
    type IntoIter = Iter<'a, String, StyleMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
