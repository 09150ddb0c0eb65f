//! Theme registry keyed by stable identifiers.
//!
//! This module provides [`ThemeRegistry`], the read-only collection of fully
//! resolved themes that renderers and configuration loaders query, and
//! [`ThemeRegistryBuilder`], which assembles one during initialization.
//!
//! # Design
//!
//! The registry uses a two-phase approach:
//!
//! 1. **Assembly**: Themes are registered on a builder, which rejects empty or
//!    repeated identifiers immediately
//! 2. **Lookup**: The built registry is immutable and only answers queries
//!
//! Identifiers are the external contract of the registry. They appear in
//! `--theme` flags and saved preferences, so renaming one is a breaking change.
//!
//! # Lookup Rules
//!
//! - [`ThemeRegistry::get`] returns the theme or [`ThemeError::UnknownTheme`];
//!   it never substitutes a default. Callers that want a fallback ask for
//!   [`ThemeRegistry::default_id`] explicitly.
//! - [`ThemeRegistry::list`] returns selection descriptors in registration
//!   order, for menus and help text.
//!
//! # Example
//!
//! ```rust
//! use mdstyle::{ThemeRegistry, Theme};
//!
//! let registry = ThemeRegistry::builder()
//!     .register("plain", "Plain", "No decoration", Theme::default())?
//!     .build();
//!
//! assert!(registry.get("plain").is_ok());
//! assert!(registry.get("fancy").is_err());
//! # Ok::<(), mdstyle::ThemeError>(())
//! ```

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{ThemeError, ThemeResult};
use crate::theme::Theme;

/// Human-facing metadata for one registered theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeOption {
    /// Stable lookup key (e.g. `"grace"`).
    pub id: String,
    /// Short display name.
    pub label: String,
    /// One-line description for menus and help text.
    pub description: String,
}

impl ThemeOption {
    /// Creates a selection descriptor.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Read-only mapping from theme identifier to theme.
///
/// # Thread Safety
///
/// A built registry is never mutated, so a shared reference can be read from
/// any number of threads without locking.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    /// Themes by identifier, in registration order.
    themes: IndexMap<String, Theme>,
    /// Selection metadata, parallel to `themes`.
    options: Vec<ThemeOption>,
}

impl ThemeRegistry {
    /// Starts assembling a registry.
    pub fn builder() -> ThemeRegistryBuilder {
        ThemeRegistryBuilder::default()
    }

    /// Looks up a theme by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownTheme`] if nothing is registered under `id`.
    pub fn get(&self, id: &str) -> ThemeResult<&Theme> {
        self.themes
            .get(id)
            .ok_or_else(|| ThemeError::unknown_theme(id, self.ids()))
    }

    /// Selection descriptors in registration order.
    pub fn list(&self) -> &[ThemeOption] {
        &self.options
    }

    /// Looks up the selection descriptor of a theme.
    pub fn option(&self, id: &str) -> Option<&ThemeOption> {
        self.themes
            .get_index_of(id)
            .map(|index| &self.options[index])
    }

    /// Returns true if a theme is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.themes.contains_key(id)
    }

    /// Registered identifiers in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(|s| s.as_str())
    }

    /// The first registered identifier, for callers that need a fallback.
    pub fn default_id(&self) -> Option<&str> {
        self.options.first().map(|option| option.id.as_str())
    }

    /// Number of registered themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Returns true if no themes are registered.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

/// Assembles a [`ThemeRegistry`].
#[derive(Debug, Default)]
pub struct ThemeRegistryBuilder {
    registry: ThemeRegistry,
}

impl ThemeRegistryBuilder {
    /// Registers a fully resolved theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidIdentifier`] for an empty id or one with
    /// whitespace, and [`ThemeError::DuplicateRegistration`] if `id` is
    /// already taken. Nothing is registered when an error is returned.
    pub fn register(
        mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        theme: Theme,
    ) -> ThemeResult<Self> {
        let id = id.into();
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(ThemeError::InvalidIdentifier { id });
        }
        if self.registry.themes.contains_key(&id) {
            return Err(ThemeError::DuplicateRegistration { id });
        }

        log::debug!("registering theme '{}'", id);
        self.registry
            .options
            .push(ThemeOption::new(id.clone(), label, description));
        self.registry.themes.insert(id, theme);
        Ok(self)
    }

    /// Freezes the registry.
    pub fn build(self) -> ThemeRegistry {
        self.registry
    }
}
