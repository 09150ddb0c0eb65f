//! Theme model and derivation.
//!
//! This module provides:
//!
//! - [`Theme`]: The fixed three-category style record (`base`, `block`, `inline`)
//! - [`Category`]: Names for those three categories
//! - [`ThemeOverride`]: A deep partial theme, used only as merge input
//! - [`derive`]: The deep merge producing a new theme from a base and an override
//!
//! Themes are plain values. Deriving never mutates its input, so a base theme
//! can be shared freely and reused for any number of derivations.

mod derive;
mod overrides;
#[allow(clippy::module_inception)]
mod theme;

pub use derive::derive;
pub use overrides::ThemeOverride;
pub use theme::{Category, Theme, PRIMARY_COLOR_PROPERTY};
