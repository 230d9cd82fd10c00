//! Transmission mode value object for WPS complex outputs

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// How a WPS server hands back a complex output (Value Object)
///
/// With `Value` the result document is embedded in the response; with
/// `Reference` the response carries a URL the client fetches separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransmissionMode {
    /// Result is returned inline in the response document
    Value,
    /// Result is returned as a reference URL
    Reference,
}

impl TransmissionMode {
    /// Every accepted wire spelling, for issue messages and key metadata.
    pub const VALID_VALUES: [&'static str; 2] = ["value", "reference"];

    /// Get the wire string for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            TransmissionMode::Value => "value",
            TransmissionMode::Reference => "reference",
        }
    }
}

impl Default for TransmissionMode {
    fn default() -> Self {
        TransmissionMode::Value
    }
}

impl std::fmt::Display for TransmissionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TransmissionMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value" => Ok(TransmissionMode::Value),
            "reference" => Ok(TransmissionMode::Reference),
            other => Err(DomainError::InvalidTransmissionMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_value() {
        assert_eq!(TransmissionMode::default(), TransmissionMode::Value);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&TransmissionMode::Reference).unwrap();
        assert_eq!(json, "\"reference\"");
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("streaming".parse::<TransmissionMode>().is_err());
        assert_eq!(
            "reference".parse::<TransmissionMode>().unwrap(),
            TransmissionMode::Reference
        );
    }
}
