//! # mdstyle-clap - Theme Selection for Clap CLIs
//!
//! Wires [`mdstyle`] themes into clap-based command-line tools:
//!
//! - [`ThemeArgs`]: flattenable `--theme`, `--theme-overrides` and
//!   `--primary-color` options
//! - [`augment_command`] / [`theme_from_matches`]: builder-style global
//!   `--theme` flag validated against a registry
//! - [`render_theme_list`]: aligned listing of theme identifiers and labels
//!
//! Unknown theme identifiers and malformed override files come back as
//! [`CliError::Config`], which carries a message meant for the user.
//!
//! ## Example
//!
//! ```rust
//! use clap::Parser;
//! use mdstyle_clap::ThemeArgs;
//!
//! #[derive(Parser)]
//! struct Cli {
//!     #[command(flatten)]
//!     theme: ThemeArgs,
//! }
//!
//! let cli = Cli::parse_from(["render", "--theme", "grace"]);
//! let theme = cli.theme.resolve(mdstyle::builtin()).unwrap();
//! assert!(theme.block().contains("h1"));
//! ```

mod args;
mod error;
mod listing;

pub use args::{augment_command, theme_arg, theme_from_matches, ThemeArgs, THEME_ARG_ID};
pub use error::CliError;
pub use listing::{pad_to_width, render_theme, render_theme_list, ElementSelector, ShowFormat};
