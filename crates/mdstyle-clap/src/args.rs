//! Theme selection flags.
//!
//! Two ways to wire theme selection into a clap CLI:
//!
//! - Derive style: flatten [`ThemeArgs`] into your `Parser` struct and call
//!   [`ThemeArgs::resolve`].
//! - Builder style: [`augment_command`] adds a global `--theme` flag whose
//!   accepted values come from a registry, and [`theme_from_matches`] resolves
//!   the parsed value.

use clap::builder::{PossibleValue, PossibleValuesParser};
use clap::{Arg, ArgMatches, Args, Command};
use mdstyle::{Theme, ThemeConfig, ThemeOverride, ThemeRegistry};
use std::path::PathBuf;

use crate::error::CliError;

/// Argument id used by [`augment_command`].
pub const THEME_ARG_ID: &str = "_theme";

/// Theme selection options for a clap `Parser`.
///
/// Unset options fall back to `MDSTYLE_THEME` / `MDSTYLE_PRIMARY_COLOR`, then
/// to the default theme.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeArgs {
    /// Theme identifier (see `mdstyle list`)
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// YAML or JSON file with style overrides applied on top of the theme
    #[arg(long, value_name = "PATH")]
    pub theme_overrides: Option<PathBuf>,

    /// Accent color replacing --md-primary-color
    #[arg(long, value_name = "COLOR")]
    pub primary_color: Option<String>,
}

impl ThemeArgs {
    /// Builds the theme configuration: environment first, then these flags.
    pub fn to_config(&self) -> Result<ThemeConfig, CliError> {
        let mut config = ThemeConfig::from_env();
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(color) = &self.primary_color {
            config.primary_color = Some(color.clone());
        }
        if let Some(path) = &self.theme_overrides {
            config = config.with_overrides(ThemeOverride::from_path(path)?);
        }
        Ok(config)
    }

    /// Resolves the selected theme against `registry`.
    ///
    /// # Errors
    ///
    /// Unknown identifiers and unreadable or malformed override files are
    /// returned as [`CliError::Config`].
    pub fn resolve(&self, registry: &ThemeRegistry) -> Result<Theme, CliError> {
        let config = self.to_config()?;
        log::debug!("resolving theme '{}'", config.theme);
        Ok(config.resolve(registry)?)
    }
}

/// Builds a `--theme` argument accepting exactly the registry's identifiers.
///
/// Identifiers and labels are borrowed for the life of the command, hence the
/// `'static` registry (such as [`mdstyle::builtin`]).
pub fn theme_arg(registry: &'static ThemeRegistry) -> Arg {
    let values: Vec<PossibleValue> = registry
        .list()
        .iter()
        .map(|option| PossibleValue::new(option.id.as_str()).help(option.label.as_str()))
        .collect();

    let mut arg = Arg::new(THEME_ARG_ID)
        .long("theme")
        .value_name("ID")
        .global(true)
        .value_parser(PossibleValuesParser::new(values))
        .help("Theme used to style the output");
    if let Some(default) = registry.default_id() {
        arg = arg.default_value(default);
    }
    arg
}

/// Adds the global `--theme` flag to a command.
pub fn augment_command(cmd: Command, registry: &'static ThemeRegistry) -> Command {
    cmd.arg(theme_arg(registry))
}

/// Resolves the theme selected by a command prepared with [`augment_command`].
pub fn theme_from_matches(
    matches: &ArgMatches,
    registry: &ThemeRegistry,
) -> Result<Theme, CliError> {
    let id = matches
        .get_one::<String>(THEME_ARG_ID)
        .map(String::as_str)
        .or_else(|| registry.default_id())
        .unwrap_or_default();
    Ok(registry.get(id)?.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use mdstyle::{builtin, Category, StyleValue};
    use std::fs;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        theme: ThemeArgs,
    }

    #[test]
    fn test_theme_args_parse() {
        let cli = TestCli::try_parse_from(["app", "--theme", "grace", "--primary-color", "#333"])
            .unwrap();
        assert_eq!(cli.theme.theme.as_deref(), Some("grace"));
        assert_eq!(cli.theme.primary_color.as_deref(), Some("#333"));
        assert!(cli.theme.theme_overrides.is_none());
    }

    #[test]
    fn test_theme_args_resolve_with_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("o.yaml");
        fs::write(&path, "block:\n  p:\n    margin: 1em 0\n").unwrap();

        let args = ThemeArgs {
            theme: Some("grace".into()),
            theme_overrides: Some(path),
            primary_color: Some("#333".into()),
        };
        let theme = args.resolve(builtin()).unwrap();
        assert_eq!(
            theme.element(Category::Block, "p").unwrap().get("margin"),
            Some(&StyleValue::from("1em 0"))
        );
        assert_eq!(theme.primary_color(), Some(&StyleValue::from("#333")));
    }

    #[test]
    fn test_theme_args_unknown_theme_is_config_error() {
        let args = ThemeArgs {
            theme: Some("neon".into()),
            ..Default::default()
        };
        let err = args.resolve(builtin()).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_augmented_command_accepts_registry_ids() {
        let cmd = augment_command(Command::new("app"), builtin());
        let matches = cmd.try_get_matches_from(["app", "--theme", "grace"]).unwrap();
        let theme = theme_from_matches(&matches, builtin()).unwrap();
        assert_eq!(&theme, builtin().get("grace").unwrap());
    }

    #[test]
    fn test_augmented_command_defaults_to_first_theme() {
        let cmd = augment_command(Command::new("app"), builtin());
        let matches = cmd.try_get_matches_from(["app"]).unwrap();
        let theme = theme_from_matches(&matches, builtin()).unwrap();
        assert_eq!(&theme, builtin().get("default").unwrap());
    }

    #[test]
    fn test_augmented_command_rejects_unknown_id() {
        let cmd = augment_command(Command::new("app"), builtin());
        let result = cmd.try_get_matches_from(["app", "--theme", "neon"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::InvalidValue
        );
    }
}
