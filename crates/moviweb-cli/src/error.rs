//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CatalogError` to exit codes and user-facing messages.

use moviweb_core::{CatalogError, Outcome};
use moviweb_omdb::ConfigError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A title or entity does not exist.
    #[error("{message}")]
    NotFound {
        /// User-facing message
        message: String,
        /// Alternative titles, possibly empty
        suggestions: Vec<String>,
    },

    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The title provider could not be reached.
    #[error("{0}")]
    Unavailable(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output could not be rendered.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound { .. } => 1,
            Self::Arguments(_) => 2,    // EX_USAGE
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Output(_) => 70,      // EX_SOFTWARE
            Self::Database(_) => 73,    // EX_CANTCREAT (closest fit)
            Self::Config(_) => 78,      // EX_CONFIG
        }
    }

    /// Suggestions to show alongside the error.
    pub fn suggestions(&self) -> &[String] {
        match self {
            Self::NotFound { suggestions, .. } => suggestions,
            _ => &[],
        }
    }

    /// The `{"error": ..., "suggestions": [...]}` contract for this error.
    pub fn to_outcome(&self) -> Outcome<()> {
        let suggestions = self.suggestions();
        Outcome::Failure {
            error: self.to_string(),
            suggestions: (!suggestions.is_empty()).then(|| suggestions.to_vec()),
        }
    }
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::Validation(msg) => Self::Arguments(msg),
            CatalogError::TitleNotFound { suggestions, .. } => Self::NotFound {
                message,
                suggestions,
            },
            CatalogError::EntityNotFound(_) => Self::NotFound {
                message,
                suggestions: Vec::new(),
            },
            CatalogError::ProviderUnavailable(_) => Self::Unavailable(message),
            CatalogError::Storage(msg) => Self::Database(msg),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let cases = [
            (CliError::from(CatalogError::Validation("x".into())), 2),
            (CliError::from(CatalogError::EntityNotFound("x".into())), 1),
            (CliError::from(CatalogError::ProviderUnavailable("x".into())), 69),
            (CliError::from(CatalogError::Storage("x".into())), 73),
            (CliError::Config("x".into()), 78),
        ];
        for (err, code) in cases {
            assert_eq!(err.exit_code(), code, "{err}");
        }
    }

    #[test]
    fn test_title_not_found_keeps_suggestions() {
        let err = CliError::from(CatalogError::TitleNotFound {
            title: "Incepshun".into(),
            reason: "Movie not found!".into(),
            suggestions: vec!["Inception".into()],
        });

        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.suggestions(), ["Inception".to_string()]);
        assert!(err.to_string().contains("Incepshun"));
    }

    #[test]
    fn test_outcome_omits_empty_suggestions() {
        let err = CliError::from(CatalogError::EntityNotFound("Movie with ID 9".into()));
        let json = serde_json::to_value(err.to_outcome()).unwrap();

        assert_eq!(json["error"], "Not found: Movie with ID 9");
        assert!(json.get("suggestions").is_none());
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let err = CliError::from(ConfigError::MissingVar {
            name: "OMDB_API_KEY",
        });
        assert_eq!(err.exit_code(), 78);
        assert!(err.to_string().contains("OMDB_API_KEY"));
    }
}
