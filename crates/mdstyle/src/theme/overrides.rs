//! Partial themes used as merge input.
//!
//! A [`ThemeOverride`] has the same three-level shape as a [`Theme`](super::Theme)
//! but every level is optional. Overrides authored in Rust are well-shaped by
//! construction. Overrides read from YAML or JSON go through a shape check
//! that reports the first value found at the wrong level:
//!
//! ```yaml
//! block:
//!   h1:
//!     font-size: 1.4em
//!     text-shadow: 2px 2px 4px rgba(0,0,0,0.1)
//! inline:
//!   td:
//!     padding: 0.5em 1em
//! ```
//!
//! ## Numbers
//!
//! Values are read through the document's own scalar rules, so an unquoted
//! YAML number becomes a [`StyleValue::Number`] and loses its spelling:
//! `line-height: 1.50` is stored as `1.5`, and `font-weight: 700.0` as `700`. Text
//! such as `0.5em` or `#000` is not a number and is kept verbatim. Quote a
//! value (`line-height: "1.50"`) when the exact text matters.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::error::{ThemeError, ThemeResult};
use crate::style::{StyleGroup, StyleMap, StyleValue};
use crate::theme::Category;

/// A deep partial of a theme.
///
/// An absent category, element or property means "inherit from the base".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThemeOverride {
    /// Properties merged into the theme's `base` map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<StyleMap>,
    /// Elements merged into the theme's `block` group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<StyleGroup>,
    /// Elements merged into the theme's `inline` group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<StyleGroup>,
}

impl ThemeOverride {
    /// Creates an empty override.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `base` part of the override.
    pub fn with_base(mut self, base: StyleMap) -> Self {
        self.base = Some(base);
        self
    }

    /// Sets the `block` part of the override.
    pub fn with_block(mut self, block: StyleGroup) -> Self {
        self.block = Some(block);
        self
    }

    /// Sets the `inline` part of the override.
    pub fn with_inline(mut self, inline: StyleGroup) -> Self {
        self.inline = Some(inline);
        self
    }

    /// Returns true if the override would leave any theme unchanged.
    pub fn is_empty(&self) -> bool {
        self.base.as_ref().map_or(true, StyleMap::is_empty)
            && self.block.as_ref().map_or(true, StyleGroup::is_empty)
            && self.inline.as_ref().map_or(true, StyleGroup::is_empty)
    }

    /// Composes two overrides: `other` is applied after `self`.
    ///
    /// Deriving with the result is equivalent to deriving with `self` and
    /// then deriving the outcome with `other`.
    pub fn then(&self, other: &ThemeOverride) -> ThemeOverride {
        ThemeOverride {
            base: merge_option(&self.base, &other.base, StyleMap::merge_from),
            block: merge_option(&self.block, &other.block, StyleGroup::merge_from),
            inline: merge_option(&self.inline, &other.inline, StyleGroup::merge_from),
        }
    }

    /// Builds an override from a loosely typed document.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MalformedOverride`] on the first value whose shape
    /// does not match its position: a non-mapping where a category or element
    /// is expected, an unknown category, or a property value that is not a
    /// string or a number.
    pub fn from_value(value: Value) -> ThemeResult<Self> {
        let categories = match value {
            Value::Object(map) => map,
            // An empty document means "no changes".
            Value::Null => return Ok(Self::new()),
            other => return Err(ThemeError::malformed("", "a mapping of categories", kind(&other))),
        };

        let mut result = Self::new();
        for (name, body) in categories {
            match Category::from_name(&name) {
                Some(Category::Base) => result.base = Some(parse_style_map(&name, body)?),
                Some(Category::Block) => result.block = Some(parse_style_group(&name, body)?),
                Some(Category::Inline) => result.inline = Some(parse_style_group(&name, body)?),
                None => {
                    return Err(ThemeError::malformed(
                        name,
                        "one of base, block, inline",
                        "an unknown category",
                    ))
                }
            }
        }
        Ok(result)
    }

    /// Parses a YAML override document.
    pub fn from_yaml(source: &str) -> ThemeResult<Self> {
        let value: Value =
            serde_yaml::from_str(source).map_err(|e| ThemeError::parse(None, e.to_string()))?;
        Self::from_value(value)
    }

    /// Parses a JSON override document.
    pub fn from_json(source: &str) -> ThemeResult<Self> {
        let value: Value =
            serde_json::from_str(source).map_err(|e| ThemeError::parse(None, e.to_string()))?;
        Self::from_value(value)
    }

    /// Reads an override file. `.json` files are parsed as JSON, anything else
    /// as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            serde_json::from_str::<Value>(&source).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<Value>(&source).map_err(|e| e.to_string())
        };
        let value = parsed.map_err(|details| ThemeError::parse(Some(path.to_path_buf()), details))?;

        log::debug!("loaded theme override from {}", path.display());
        Self::from_value(value)
    }
}

impl<'de> Deserialize<'de> for ThemeOverride {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        ThemeOverride::from_value(value).map_err(serde::de::Error::custom)
    }
}

fn merge_option<T: Clone>(
    first: &Option<T>,
    second: &Option<T>,
    merge: fn(&mut T, &T),
) -> Option<T> {
    match (first, second) {
        (Some(a), Some(b)) => {
            let mut merged = a.clone();
            merge(&mut merged, b);
            Some(merged)
        }
        (Some(a), None) => Some(a.clone()),
        (None, Some(b)) => Some(b.clone()),
        (None, None) => None,
    }
}

fn parse_style_group(path: &str, value: Value) -> ThemeResult<StyleGroup> {
    let elements = expect_object(path, value, "a mapping of element ids to style maps")?;
    let mut group = StyleGroup::new();
    for (id, body) in elements {
        let styles = parse_style_map(&format!("{}.{}", path, id), body)?;
        group.insert(&id, styles);
    }
    Ok(group)
}

fn parse_style_map(path: &str, value: Value) -> ThemeResult<StyleMap> {
    let properties = expect_object(path, value, "a mapping of properties to values")?;
    let mut styles = StyleMap::new();
    for (name, raw) in properties {
        let value = parse_style_value(&format!("{}.{}", path, name), raw)?;
        styles.insert(&name, value);
    }
    Ok(styles)
}

fn parse_style_value(path: &str, value: Value) -> ThemeResult<StyleValue> {
    match value {
        Value::String(s) => Ok(StyleValue::Text(s)),
        Value::Number(n) => n
            .as_f64()
            .map(StyleValue::Number)
            .ok_or_else(|| ThemeError::malformed(path, "a string or number", "an unrepresentable number")),
        other => Err(ThemeError::malformed(path, "a string or number", kind(&other))),
    }
}

fn expect_object(path: &str, value: Value, expected: &'static str) -> ThemeResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        // `h1:` with nothing under it is an empty mapping in YAML terms.
        Value::Null => Ok(Map::new()),
        other => Err(ThemeError::malformed(path, expected, kind(&other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
