//! Format defaults for WPS complex inputs and outputs

use crate::core::transmission_mode::TransmissionMode;

/// Default format setup applied to WPS complex inputs
///
/// Each field is `None` when the protocol default of the process offering
/// should be used instead of a client-side preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexInputSetup {
    /// Preferred mime type, if the process offers it
    pub mimetype: Option<String>,
    /// Preferred schema location, if the process offers it
    pub schema: Option<String>,
    /// Preferred encoding, if the process offers it
    pub encoding: Option<String>,
}

/// Default format setup applied to WPS complex outputs
///
/// Same semantics as [`ComplexInputSetup`], plus the WPS 2.0 transmission
/// mode deciding whether results come back inline or by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexOutputSetup {
    /// Preferred mime type, if the process offers it
    pub mimetype: Option<String>,
    /// Preferred schema location, if the process offers it
    pub schema: Option<String>,
    /// Preferred encoding, if the process offers it
    pub encoding: Option<String>,
    /// How the server should hand the output back
    pub transmission_mode: TransmissionMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_mean_protocol_default() {
        let setup = ComplexInputSetup {
            mimetype: Some("application/vnd.geo+json".to_string()),
            schema: None,
            encoding: None,
        };
        assert!(setup.schema.is_none());
        assert!(setup.encoding.is_none());
    }

    #[test]
    fn test_output_setup_carries_transmission_mode() {
        let setup = ComplexOutputSetup {
            mimetype: None,
            schema: None,
            encoding: None,
            transmission_mode: TransmissionMode::Reference,
        };
        assert_eq!(setup.transmission_mode, TransmissionMode::Reference);
    }
}
