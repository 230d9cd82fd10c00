//! Service version value object representing a WPS protocol version

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Supported WPS protocol versions (Value Object)
///
/// The client speaks either WPS 1.0.0 or WPS 2.0.0; the selected version
/// decides which request encoding and which capabilities document the
/// client asks the server for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceVersion {
    /// WPS 1.0.0
    #[serde(rename = "1.0.0")]
    V100,
    /// WPS 2.0.0
    #[serde(rename = "2.0.0")]
    V200,
}

impl ServiceVersion {
    /// Every accepted wire spelling, for issue messages and key metadata.
    pub const VALID_VALUES: [&'static str; 2] = ["1.0.0", "2.0.0"];

    /// Get the wire string for this version
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceVersion::V100 => "1.0.0",
            ServiceVersion::V200 => "2.0.0",
        }
    }
}

impl Default for ServiceVersion {
    fn default() -> Self {
        ServiceVersion::V200
    }
}

impl std::fmt::Display for ServiceVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ServiceVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1.0.0" => Ok(ServiceVersion::V100),
            "2.0.0" => Ok(ServiceVersion::V200),
            other => Err(DomainError::InvalidServiceVersion(other.to_string())),
        }
    }
}
