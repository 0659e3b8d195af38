//! Supported languages and their metadata

use serde::{Deserialize, Serialize};

/// Languages the site ships catalogs for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    German,
    French,
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl Language {
    /// Get the language code for this language
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
            Self::French => "fr",
        }
    }

    /// Parse a language from a code
    ///
    /// Only exact supported codes are accepted; normalization is the
    /// caller's job (see [`crate::detect`]).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::English),
            "de" => Some(Self::German),
            "fr" => Some(Self::French),
            _ => None,
        }
    }

    /// Get all supported languages, in selector order
    pub fn all() -> Vec<Self> {
        vec![Self::English, Self::German, Self::French]
    }

    /// Get the native display name for this language
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::German => "Deutsch",
            Self::French => "Français",
        }
    }

    /// Get the flag glyph shown next to the name in the selector
    pub fn flag(&self) -> &'static str {
        match self {
            Self::English => "\u{1F1EC}\u{1F1E7}",
            Self::German => "\u{1F1E9}\u{1F1EA}",
            Self::French => "\u{1F1EB}\u{1F1F7}",
        }
    }
}
