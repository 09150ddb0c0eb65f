//! The fixed-shape theme record.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::derive::derive;
use super::overrides::ThemeOverride;
use crate::style::{StyleGroup, StyleMap, StyleValue};

/// Custom property holding a theme's accent color.
pub const PRIMARY_COLOR_PROPERTY: &str = "--md-primary-color";

/// One of the three top-level categories every theme carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Document-wide declarations and custom properties.
    Base,
    /// Block-level elements (headings, paragraphs, code blocks...).
    Block,
    /// Inline-level elements (links, emphasis, table cells...).
    Inline,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 3] = [Category::Base, Category::Block, Category::Inline];

    /// Stable lowercase name, as used in override documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Base => "base",
            Category::Block => "block",
            Category::Inline => "inline",
        }
    }

    /// Parses a category name.
    pub fn from_name(name: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete style theme.
///
/// The shape is fixed: a flat `base` map plus `block` and `inline` element
/// groups. Any of them may be empty, none of them can be missing.
///
/// # Example
///
/// ```rust
/// use mdstyle::{style_group, style_map, Category, Theme};
///
/// let theme = Theme::new(
///     style_map! { "line-height" => "1.75" },
///     style_group! { "h1" => { "font-size" => "3em" } },
///     style_group! { "link" => { "color" => "#576b95" } },
/// );
///
/// let h1 = theme.element(Category::Block, "h1").unwrap();
/// assert_eq!(h1.to_declarations(), "font-size: 3em;");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    base: StyleMap,
    block: StyleGroup,
    inline: StyleGroup,
}

impl Theme {
    /// Creates a theme from its three categories.
    pub fn new(base: StyleMap, block: StyleGroup, inline: StyleGroup) -> Self {
        Self {
            base,
            block,
            inline,
        }
    }

    /// Document-wide declarations.
    pub fn base(&self) -> &StyleMap {
        &self.base
    }

    /// Block-level element styles.
    pub fn block(&self) -> &StyleGroup {
        &self.block
    }

    /// Inline-level element styles.
    pub fn inline(&self) -> &StyleGroup {
        &self.inline
    }

    /// Returns the element group of a category, or `None` for [`Category::Base`].
    pub fn group(&self, category: Category) -> Option<&StyleGroup> {
        match category {
            Category::Base => None,
            Category::Block => Some(&self.block),
            Category::Inline => Some(&self.inline),
        }
    }

    /// Looks up the style map of an element.
    ///
    /// `None` means the theme has no styling for that element.
    pub fn element(&self, category: Category, id: &str) -> Option<&StyleMap> {
        self.group(category).and_then(|group| group.get(id))
    }

    /// The accent color declared in `base`, if any.
    pub fn primary_color(&self) -> Option<&StyleValue> {
        self.base.get(PRIMARY_COLOR_PROPERTY)
    }

    /// Produces a new theme with `overrides` merged in. See [`derive`].
    pub fn derive(&self, overrides: &ThemeOverride) -> Theme {
        derive(self, overrides)
    }

    /// Produces a new theme with a different accent color.
    pub fn with_primary_color(&self, color: &str) -> Theme {
        let overrides = ThemeOverride::new()
            .with_base(StyleMap::new().with(PRIMARY_COLOR_PROPERTY, color));
        derive(self, &overrides)
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut StyleMap, &mut StyleGroup, &mut StyleGroup) {
        (&mut self.base, &mut self.block, &mut self.inline)
    }
}
