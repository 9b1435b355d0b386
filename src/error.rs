use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Error type returned by [`crate::services::RecipeService`] implementations.
pub type ServiceError = Box<dyn StdError + Send + Sync>;

/// The record field a decode failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Ingredients,
    Instructions,
}

impl RecordField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordField::Ingredients => "ingredients",
            RecordField::Instructions => "instructions",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while loading a recipe
#[derive(Error, Debug)]
pub enum RecipeError {
    /// The identifier was empty
    #[error("Recipe identifier must not be empty")]
    InvalidId,

    /// The service has no recipe with this identifier
    #[error("Recipe not found: {id}")]
    NotFound { id: String },

    /// The service call itself failed
    #[error("Failed to fetch recipe {id}: {source}")]
    FetchFailed {
        id: String,
        #[source]
        source: ServiceError,
    },

    /// One of the JSON-encoded fields could not be decoded
    #[error("Failed to decode {field} of recipe {id}: {source}")]
    DecodeFailed {
        id: String,
        field: RecordField,
        #[source]
        source: serde_json::Error,
    },

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl RecipeError {
    /// True only when the service reported that no such record exists.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RecipeError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinguishable() {
        let not_found = RecipeError::NotFound {
            id: "r1".to_string(),
        };
        let fetch = RecipeError::FetchFailed {
            id: "r1".to_string(),
            source: "connection reset".into(),
        };

        assert!(not_found.is_not_found());
        assert!(!fetch.is_not_found());
        assert!(!RecipeError::InvalidId.is_not_found());
    }

    #[test]
    fn test_decode_failed_message_names_field() {
        let source = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err = RecipeError::DecodeFailed {
            id: "r1".to_string(),
            field: RecordField::Instructions,
            source,
        };

        let message = err.to_string();
        assert!(message.contains("instructions"));
        assert!(message.contains("r1"));
    }

    #[test]
    fn test_fetch_failed_exposes_source() {
        let err = RecipeError::FetchFailed {
            id: "r1".to_string(),
            source: "timed out".into(),
        };

        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("timed out"));
    }
}
