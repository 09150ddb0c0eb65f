//! Theme errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while deriving, registering or resolving themes.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// An override value does not have the shape expected at its position.
    #[error("malformed theme override at '{path}': expected {expected}, found {found}")]
    MalformedOverride {
        /// Dotted location of the offending value (e.g. `block.h1.margin`).
        path: String,
        /// What the position requires.
        expected: &'static str,
        /// What was supplied instead.
        found: &'static str,
    },

    /// No theme is registered under the requested identifier.
    #[error("unknown theme '{id}' (available: {})", .available.join(", "))]
    UnknownTheme {
        /// The identifier that was requested.
        id: String,
        /// Identifiers known to the registry, in registration order.
        available: Vec<String>,
    },

    /// Two registry entries share an identifier.
    #[error("theme '{id}' is already registered")]
    DuplicateRegistration {
        /// The identifier registered twice.
        id: String,
    },

    /// A theme identifier is empty or contains whitespace.
    #[error("invalid theme identifier {id:?}")]
    InvalidIdentifier {
        /// The rejected identifier.
        id: String,
    },

    /// An override document could not be parsed at all.
    #[error("failed to parse theme override{}: {details}", source_suffix(.path))]
    Parse {
        /// The file the document came from, when it came from a file.
        path: Option<PathBuf>,
        /// Parser message.
        details: String,
    },

    /// An override file could not be read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

fn source_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" {:?}", path),
        None => String::new(),
    }
}

impl ThemeError {
    /// Create a malformed override error.
    pub fn malformed(path: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::MalformedOverride {
            path: path.into(),
            expected,
            found,
        }
    }

    /// Create an unknown theme error.
    pub fn unknown_theme<I, S>(id: impl Into<String>, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::UnknownTheme {
            id: id.into(),
            available: available.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a parse error.
    pub fn parse(path: Option<PathBuf>, details: impl Into<String>) -> Self {
        Self::Parse {
            path,
            details: details.into(),
        }
    }

    /// Returns true for errors a user can fix by changing their configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ThemeError::UnknownTheme { .. }
                | ThemeError::MalformedOverride { .. }
                | ThemeError::Parse { .. }
                | ThemeError::Io { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_override_display() {
        let err = ThemeError::malformed("block.h1", "a style map", "a string");
        let msg = err.to_string();
        assert!(msg.contains("block.h1"));
        assert!(msg.contains("expected a style map"));
        assert!(msg.contains("found a string"));
    }

    #[test]
    fn test_unknown_theme_display_lists_available() {
        let err = ThemeError::unknown_theme("nope", ["default", "grace"]);
        let msg = err.to_string();
        assert!(msg.contains("'nope'"));
        assert!(msg.contains("default, grace"));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_duplicate_registration_is_not_config_error() {
        let err = ThemeError::DuplicateRegistration {
            id: "default".to_string(),
        };
        assert!(err.to_string().contains("already registered"));
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_parse_error_display_with_and_without_path() {
        let without = ThemeError::parse(None, "bad indent");
        assert_eq!(without.to_string(), "failed to parse theme override: bad indent");

        let with = ThemeError::parse(Some(PathBuf::from("grace.yaml")), "bad indent");
        assert!(with.to_string().contains("\"grace.yaml\""));
    }
}
