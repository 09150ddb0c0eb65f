//! Style primitives.
//!
//! This module provides the leaf types of a theme:
//!
//! - [`StyleValue`]: A literal declaration value (string or number)
//! - [`StyleMap`]: Property name to value, for one element
//! - [`StyleGroup`]: Element id to [`StyleMap`], for one theme category
//!
//! The [`style_map!`](crate::style_map) and [`style_group!`](crate::style_group)
//! macros build these from literals. Repeated keys in a literal are not
//! rejected: the last value wins, exactly as with [`StyleMap::insert`].

mod map;
mod value;

pub use map::{StyleGroup, StyleMap};
pub use value::StyleValue;

/// Builds a [`StyleMap`] from `"property" => value` pairs.
///
/// ```rust
/// use mdstyle::style_map;
///
/// let code = style_map! {
///     "margin" => 0,
///     "white-space" => "nowrap",
/// };
/// assert_eq!(code.to_declarations(), "margin: 0; white-space: nowrap;");
/// ```
#[macro_export]
macro_rules! style_map {
    () => {
        $crate::StyleMap::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::StyleMap::new()$(.with($name, $value))+
    };
}

/// Builds a [`StyleGroup`] from `"element" => { ... }` entries.
///
/// ```rust
/// use mdstyle::style_group;
///
/// let inline = style_group! {
///     "link" => { "color" => "#576b95" },
///     "em" => {},
/// };
/// assert_eq!(inline.len(), 2);
/// assert!(inline.get("em").unwrap().is_empty());
/// ```
#[macro_export]
macro_rules! style_group {
    () => {
        $crate::StyleGroup::new()
    };
    ($($id:expr => { $($body:tt)* }),+ $(,)?) => {
        $crate::StyleGroup::new()$(.with($id, $crate::style_map! { $($body)* }))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_map_macro_duplicate_last_wins() {
        let map = style_map! {
            "color" => "red",
            "color" => "blue",
        };
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("color"), Some(&StyleValue::from("blue")));
    }

    #[test]
    fn test_style_group_macro_preserves_order() {
        let group = style_group! {
            "h1" => { "font-size" => "3em" },
            "h2" => {},
            "h3" => { "line-height" => "1.2", "font-weight" => "bold" },
        };
        let ids: Vec<&str> = group.ids().collect();
        assert_eq!(ids, vec!["h1", "h2", "h3"]);
        assert_eq!(group.get("h3").unwrap().len(), 2);
    }

    #[test]
    fn test_empty_macros() {
        let map: StyleMap = style_map! {};
        let group: StyleGroup = style_group! {};
        assert!(map.is_empty());
        assert!(group.is_empty());
    }
}
