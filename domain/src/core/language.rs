//! Language value object for the client UI

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Supported UI languages (Value Object)
///
/// The assistant ships with English and German translations; the default
/// language is applied before the user picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// German
    De,
}

impl Language {
    /// Every accepted wire spelling, for issue messages and key metadata.
    pub const VALID_VALUES: [&'static str; 2] = ["en", "de"];

    /// Get the ISO 639-1 code for this language
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            other => Err(DomainError::InvalidLanguage(other.to_string())),
        }
    }
}
