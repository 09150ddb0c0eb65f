//! Style property values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single declaration value: a literal string or a number.
///
/// Values are stored as authored. No check is made that they are valid for
/// the property they are attached to.
///
/// # Example
///
/// ```rust
/// use mdstyle::StyleValue;
///
/// let margin: StyleValue = "0 auto 0".into();
/// let zero: StyleValue = 0.into();
///
/// assert_eq!(margin.to_string(), "0 auto 0");
/// assert_eq!(zero.to_string(), "0");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A literal string such as `1.4em` or `var(--md-primary-color)`.
    Text(String),
    /// A bare number such as `0`.
    Number(f64),
}

impl StyleValue {
    /// Returns the string value, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            StyleValue::Number(_) => None,
        }
    }

    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Text(_) => None,
            StyleValue::Number(n) => Some(*n),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}
