//! Error types for translation store operations

use thiserror::Error;

/// Errors that can occur while building catalogs or persisting preferences
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to parse a translation tree from JSON
    #[error("Malformed translation tree: {0}")]
    TreeParse(#[from] serde_json::Error),

    /// Failed to parse the catalog document for one language
    #[error("Failed to parse catalog for language '{language}': {source}")]
    CatalogParse {
        language: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write the language preference slot
    #[error("Failed to persist language preference to {path}: {source}")]
    PreferenceWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
