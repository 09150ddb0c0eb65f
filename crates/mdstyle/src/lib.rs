//! # mdstyle - Themes for Markdown Publishing
//!
//! `mdstyle` holds the style configuration a Markdown renderer needs to produce
//! richly styled output for a publishing surface with a restricted CSS subset.
//! It owns the theme data model, derivation of new themes from a base by deep
//! merge, and a registry exposing themes by stable identifier.
//!
//! ## Core Concepts
//!
//! - [`StyleMap`]: Property name to literal value, for one element
//! - [`StyleGroup`]: Element id to [`StyleMap`]
//! - [`Theme`]: A `base` map plus `block` and `inline` groups, always all three
//! - [`ThemeOverride`] and [`derive`]: Partial themes merged onto a base,
//!   property by property
//! - [`ThemeRegistry`]: Themes by identifier, with labels for theme pickers
//! - [`ThemeConfig`]: A theme selection with user customizations
//!
//! ## Quick Start
//!
//! ```rust
//! use mdstyle::{builtin, Category};
//!
//! let theme = builtin().get("grace")?;
//!
//! // A renderer styles an <h1> by inlining the block-level `h1` map.
//! if let Some(h1) = theme.element(Category::Block, "h1") {
//!     let style_attr = h1.to_declarations();
//!     assert!(style_attr.contains("font-size: 1.4em;"));
//! }
//!
//! for option in builtin().list() {
//!     println!("{:<8} {}", option.id, option.label);
//! }
//! # Ok::<(), mdstyle::ThemeError>(())
//! ```
//!
//! ## Deriving Themes
//!
//! ```rust
//! use mdstyle::{builtin, style_group, Category, StyleValue, ThemeOverride};
//!
//! let base = builtin().get("default")?;
//! let wide = base.derive(&ThemeOverride::new().with_block(style_group! {
//!     "p" => { "letter-spacing" => "0.2em" },
//! }));
//!
//! let p = wide.element(Category::Block, "p").unwrap();
//! assert_eq!(p.get("letter-spacing"), Some(&StyleValue::from("0.2em")));
//! assert_eq!(p.get("text-align"), Some(&StyleValue::from("justify")));
//! # Ok::<(), mdstyle::ThemeError>(())
//! ```
//!
//! ## Overrides From Files
//!
//! User-supplied overrides go through [`ThemeOverride::from_yaml`],
//! [`ThemeOverride::from_json`] or [`ThemeOverride::from_path`], which reject
//! values at the wrong nesting level instead of coercing them.

pub mod builtin;
pub mod config;
mod error;
pub mod registry;
pub mod style;
pub mod theme;

pub use builtin::{builtin, default_theme, grace_overrides, DEFAULT_THEME_ID, GRACE_THEME_ID};
pub use config::ThemeConfig;
pub use error::{ThemeError, ThemeResult};
pub use registry::{ThemeOption, ThemeRegistry, ThemeRegistryBuilder};
pub use style::{StyleGroup, StyleMap, StyleValue};
pub use theme::{derive, Category, Theme, ThemeOverride, PRIMARY_COLOR_PROPERTY};
