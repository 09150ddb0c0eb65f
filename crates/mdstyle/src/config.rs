//! Theme selection configuration.
//!
//! A [`ThemeConfig`] names a registered theme plus optional per-user
//! customizations, and resolves to a concrete [`Theme`] against a registry.
//! It can be built in code, read from YAML, or taken from the environment.
//!
//! ## Configuration File Format
//!
//! ```yaml
//! theme: grace
//! primary_color: "#0f4c81"
//! overrides:
//!   block:
//!     h1:
//!       font-size: 1.6em
//! ```
//!
//! `overrides` goes through the same shape check as a standalone override
//! file, so a misplaced scalar is reported as
//! [`ThemeError::MalformedOverride`] with its dotted path. Unquoted YAML
//! numbers are read as numbers (see [`crate::theme::ThemeOverride`]); quote
//! values that must keep their exact text.
//!
//! ## Environment Variables
//!
//! - `MDSTYLE_THEME`: theme identifier
//! - `MDSTYLE_PRIMARY_COLOR`: accent color replacing `--md-primary-color`

use serde::Deserialize;
use std::env;
use std::path::Path;

use crate::builtin::DEFAULT_THEME_ID;
use crate::error::{ThemeError, ThemeResult};
use crate::registry::ThemeRegistry;
use crate::theme::{Theme, ThemeOverride};

/// Environment variable selecting the theme.
pub const THEME_ENV: &str = "MDSTYLE_THEME";

/// Environment variable overriding the accent color.
pub const PRIMARY_COLOR_ENV: &str = "MDSTYLE_PRIMARY_COLOR";

/// Which theme to use and how to customize it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    /// Registry identifier of the theme.
    pub theme: String,
    /// Replacement for the theme's `--md-primary-color`.
    pub primary_color: Option<String>,
    /// Extra overrides applied last.
    pub overrides: Option<ThemeOverride>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME_ID.to_string(),
            primary_color: None,
            overrides: None,
        }
    }
}

/// On-disk form. `overrides` stays a loose document until it is shape-checked.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawThemeConfig {
    theme: Option<String>,
    primary_color: Option<String>,
    overrides: Option<serde_json::Value>,
}

impl RawThemeConfig {
    fn into_config(self) -> ThemeResult<ThemeConfig> {
        let overrides = self.overrides.map(ThemeOverride::from_value).transpose()?;
        Ok(ThemeConfig {
            theme: self.theme.unwrap_or_else(|| DEFAULT_THEME_ID.to_string()),
            primary_color: self.primary_color,
            overrides,
        })
    }
}

impl ThemeConfig {
    /// Creates a configuration selecting `theme` with no customizations.
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            ..Self::default()
        }
    }

    /// Sets the accent color.
    pub fn with_primary_color(mut self, color: impl Into<String>) -> Self {
        self.primary_color = Some(color.into());
        self
    }

    /// Adds overrides, composing with any already present.
    pub fn with_overrides(mut self, overrides: ThemeOverride) -> Self {
        self.overrides = Some(match self.overrides.take() {
            Some(existing) => existing.then(&overrides),
            None => overrides,
        });
        self
    }

    /// Parses a YAML configuration document.
    ///
    /// # Errors
    ///
    /// YAML syntax errors and unknown keys are [`ThemeError::Parse`]. An
    /// `overrides` section of the wrong shape is
    /// [`ThemeError::MalformedOverride`].
    pub fn from_yaml(source: &str) -> ThemeResult<Self> {
        let raw: RawThemeConfig =
            serde_yaml::from_str(source).map_err(|e| ThemeError::parse(None, e.to_string()))?;
        raw.into_config()
    }

    /// Reads a YAML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawThemeConfig = serde_yaml::from_str(&source)
            .map_err(|e| ThemeError::parse(Some(path.to_path_buf()), e.to_string()))?;
        log::debug!("loaded theme config from {}", path.display());
        raw.into_config()
    }

    /// Configuration from environment variables, defaulting what is unset.
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Applies environment variables on top of this configuration.
    ///
    /// Empty variables are ignored.
    pub fn with_env(mut self) -> Self {
        if let Some(theme) = non_empty_var(THEME_ENV) {
            log::debug!("{} selects theme '{}'", THEME_ENV, theme);
            self.theme = theme;
        }
        if let Some(color) = non_empty_var(PRIMARY_COLOR_ENV) {
            self.primary_color = Some(color);
        }
        self
    }

    /// Resolves the configuration into a theme.
    ///
    /// The selected theme is looked up, then the accent color is applied,
    /// then the overrides. The registry is only read.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownTheme`] when the theme is not registered.
    /// No fallback theme is chosen.
    pub fn resolve(&self, registry: &ThemeRegistry) -> ThemeResult<Theme> {
        let mut theme = registry.get(&self.theme)?.clone();
        if let Some(color) = &self.primary_color {
            theme = theme.with_primary_color(color);
        }
        if let Some(overrides) = &self.overrides {
            theme = theme.derive(overrides);
        }
        Ok(theme)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::builtin;
    use crate::style::StyleValue;
    use crate::theme::Category;
    use crate::{style_group, style_map};
    use serial_test::serial;

    #[test]
    fn test_default_config_resolves_default_theme() {
        let theme = ThemeConfig::default().resolve(builtin()).unwrap();
        assert_eq!(&theme, builtin().get(DEFAULT_THEME_ID).unwrap());
    }

    #[test]
    fn test_unknown_theme_is_reported() {
        let err = ThemeConfig::new("neon").resolve(builtin()).unwrap_err();
        assert!(matches!(err, ThemeError::UnknownTheme { ref id, .. } if id == "neon"));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_primary_color_then_overrides() {
        let config = ThemeConfig::new("grace")
            .with_primary_color("#0f4c81")
            .with_overrides(
                ThemeOverride::new().with_base(style_map! { "--md-primary-color" => "#222" }),
            );

        let theme = config.resolve(builtin()).unwrap();
        assert_eq!(theme.primary_color(), Some(&StyleValue::from("#222")));
    }

    #[test]
    fn test_with_overrides_composes() {
        let config = ThemeConfig::default()
            .with_overrides(ThemeOverride::new().with_inline(style_group! {
                "td" => { "padding" => "1em" },
            }))
            .with_overrides(ThemeOverride::new().with_inline(style_group! {
                "td" => { "color" => "#000" },
            }));

        let theme = config.resolve(builtin()).unwrap();
        let td = theme.element(Category::Inline, "td").unwrap();
        assert_eq!(td.get("padding"), Some(&StyleValue::from("1em")));
        assert_eq!(td.get("color"), Some(&StyleValue::from("#000")));
        assert_eq!(td.get("word-break"), Some(&StyleValue::from("keep-all")));
    }

    #[test]
    fn test_from_yaml() {
        let config = ThemeConfig::from_yaml(
            "theme: grace\nprimary_color: \"#0f4c81\"\noverrides:\n  block:\n    h1:\n      font-size: 1.6em\n",
        )
        .unwrap();

        assert_eq!(config.theme, "grace");
        let theme = config.resolve(builtin()).unwrap();
        let h1 = theme.element(Category::Block, "h1").unwrap();
        assert_eq!(h1.get("font-size"), Some(&StyleValue::from("1.6em")));
        assert_eq!(theme.primary_color(), Some(&StyleValue::from("#0f4c81")));
    }

    #[test]
    fn test_from_yaml_rejects_malformed_overrides() {
        let err = ThemeConfig::from_yaml("overrides:\n  block:\n    h1: big\n").unwrap_err();
        assert!(
            matches!(err, ThemeError::MalformedOverride { ref path, .. } if path == "block.h1"),
            "unexpected error: {:?}",
            err
        );
        assert!(err.is_config_error());
    }

    #[test]
    fn test_from_path_rejects_malformed_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdstyle.yaml");
        std::fs::write(&path, "theme: grace\noverrides:\n  inline: [td]\n").unwrap();

        let err = ThemeConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, ThemeError::MalformedOverride { ref path, .. } if path == "inline"));
    }

    #[test]
    fn test_from_yaml_syntax_error_is_parse_error() {
        let err = ThemeConfig::from_yaml("theme: [grace\n").unwrap_err();
        assert!(matches!(err, ThemeError::Parse { path: None, .. }));
    }

    #[test]
    fn test_from_yaml_missing_or_null_sections() {
        let config = ThemeConfig::from_yaml("primary_color: \"#333\"\noverrides: ~\n").unwrap();
        assert_eq!(config.theme, DEFAULT_THEME_ID);
        assert_eq!(config.overrides, None);
    }

    #[test]
    fn test_from_yaml_rejects_unknown_keys() {
        let err = ThemeConfig::from_yaml("colour: red\n").unwrap_err();
        assert!(matches!(err, ThemeError::Parse { .. }));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ThemeConfig::from_path(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }

    #[test]
    #[serial]
    fn test_from_env() {
        env::set_var(THEME_ENV, "grace");
        env::set_var(PRIMARY_COLOR_ENV, "  ");
        let config = ThemeConfig::from_env();
        env::remove_var(THEME_ENV);
        env::remove_var(PRIMARY_COLOR_ENV);

        assert_eq!(config.theme, "grace");
        assert_eq!(config.primary_color, None);
    }

    #[test]
    #[serial]
    fn test_with_env_keeps_file_values_when_unset() {
        env::remove_var(THEME_ENV);
        env::remove_var(PRIMARY_COLOR_ENV);
        let config = ThemeConfig::new("grace").with_primary_color("#111").with_env();
        assert_eq!(config.theme, "grace");
        assert_eq!(config.primary_color.as_deref(), Some("#111"));
    }
}
