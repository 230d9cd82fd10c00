//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid service version '{0}' (expected 1.0.0 or 2.0.0)")]
    InvalidServiceVersion(String),

    #[error("invalid language '{0}' (expected en or de)")]
    InvalidLanguage(String),

    #[error("invalid transmission mode '{0}' (expected value or reference)")]
    InvalidTransmissionMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_version_display() {
        let error = DomainError::InvalidServiceVersion("3.0.0".to_string());
        assert_eq!(
            error.to_string(),
            "invalid service version '3.0.0' (expected 1.0.0 or 2.0.0)"
        );
    }

    #[test]
    fn test_invalid_language_display() {
        let error = DomainError::InvalidLanguage("fr".to_string());
        assert!(error.to_string().contains("'fr'"));
    }
}
