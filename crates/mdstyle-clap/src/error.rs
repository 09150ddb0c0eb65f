//! CLI-facing errors.

use mdstyle::ThemeError;
use thiserror::Error;

/// Errors surfaced to command-line users.
#[derive(Debug, Error)]
pub enum CliError {
    /// The user's theme selection or customization is invalid.
    #[error("configuration error: {0}")]
    Config(#[source] ThemeError),

    /// Theme assembly failed for a reason the user cannot fix.
    #[error(transparent)]
    Theme(ThemeError),

    /// The requested element has no entry in the theme.
    #[error("theme '{theme}' has no {category} element '{id}'")]
    UnknownElement {
        /// Theme identifier.
        theme: String,
        /// Category searched.
        category: String,
        /// Element id requested.
        id: String,
    },

    /// The theme could not be written in the requested format.
    #[error("failed to serialize theme: {0}")]
    Serialize(String),
}

impl From<ThemeError> for CliError {
    fn from(err: ThemeError) -> Self {
        if err.is_config_error() {
            CliError::Config(err)
        } else {
            CliError::Theme(err)
        }
    }
}

impl CliError {
    /// Process exit code: 2 for usage and configuration problems, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) | CliError::UnknownElement { .. } => 2,
            CliError::Theme(_) | CliError::Serialize(_) => 1,
        }
    }
}
