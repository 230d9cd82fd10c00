//! Complex data sections of the properties file
//! (`complexInputDataSetup` / `complexOutputDataSetup`)
//!
//! The legacy wire writes `""` for "no preference"; these structs accept
//! that form and normalize it to `None` on the way in, and write `""`
//! back out so existing consumers keep seeing every key.

use super::parse_enum_value;
use assist_domain::{
    ComplexInputSetup, ComplexOutputSetup, PropertyIssue, TransmissionMode, formats,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Deserialize a string field treating empty/whitespace (and null) as absent.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Serialize an absent value as the legacy empty-string placeholder.
fn none_as_empty<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

/// Raw `complexInputDataSetup` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileComplexInputSetup {
    /// Preferred mime type, empty for the protocol default
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub default_mimetype_if_available: Option<String>,
    /// Preferred schema, empty for the protocol default
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub default_schema_if_available: Option<String>,
    /// Preferred encoding, empty for the protocol default
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub default_encoding_if_available: Option<String>,
}

impl Default for FileComplexInputSetup {
    fn default() -> Self {
        Self {
            default_mimetype_if_available: Some(formats::MIME_GEOJSON.to_string()),
            default_schema_if_available: None,
            default_encoding_if_available: None,
        }
    }
}

impl FileComplexInputSetup {
    /// Convert into the domain setup
    pub fn to_setup(&self) -> ComplexInputSetup {
        ComplexInputSetup {
            mimetype: self.default_mimetype_if_available.clone(),
            schema: self.default_schema_if_available.clone(),
            encoding: self.default_encoding_if_available.clone(),
        }
    }
}

impl From<&ComplexInputSetup> for FileComplexInputSetup {
    fn from(setup: &ComplexInputSetup) -> Self {
        Self {
            default_mimetype_if_available: setup.mimetype.clone(),
            default_schema_if_available: setup.schema.clone(),
            default_encoding_if_available: setup.encoding.clone(),
        }
    }
}

/// Raw `complexOutputDataSetup` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileComplexOutputSetup {
    /// Preferred mime type, empty for the protocol default
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub default_mimetype_if_available: Option<String>,
    /// Preferred schema, empty for the protocol default
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub default_schema_if_available: Option<String>,
    /// Preferred encoding, empty for the protocol default
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub default_encoding_if_available: Option<String>,
    /// Transmission mode ("value" or "reference")
    pub default_transmission_mode: String,
}

impl Default for FileComplexOutputSetup {
    fn default() -> Self {
        Self {
            default_mimetype_if_available: Some(formats::MIME_GEOJSON.to_string()),
            default_schema_if_available: None,
            default_encoding_if_available: None,
            default_transmission_mode: TransmissionMode::default().as_str().to_string(),
        }
    }
}

impl FileComplexOutputSetup {
    /// Parse the transmission mode string into the domain enum
    pub fn parse_transmission_mode(&self) -> (Option<TransmissionMode>, Vec<PropertyIssue>) {
        parse_enum_value(
            "complexOutputDataSetup.defaultTransmissionMode",
            &self.default_transmission_mode,
            &TransmissionMode::VALID_VALUES,
        )
    }

    /// Convert into the domain setup with a pre-parsed transmission mode
    pub fn to_setup(&self, transmission_mode: TransmissionMode) -> ComplexOutputSetup {
        ComplexOutputSetup {
            mimetype: self.default_mimetype_if_available.clone(),
            schema: self.default_schema_if_available.clone(),
            encoding: self.default_encoding_if_available.clone(),
            transmission_mode,
        }
    }
}

impl From<&ComplexOutputSetup> for FileComplexOutputSetup {
    fn from(setup: &ComplexOutputSetup) -> Self {
        Self {
            default_mimetype_if_available: setup.mimetype.clone(),
            default_schema_if_available: setup.schema.clone(),
            default_encoding_if_available: setup.encoding.clone(),
            default_transmission_mode: setup.transmission_mode.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_becomes_none() {
        let json = r#"{
            "defaultMimetypeIfAvailable": "text/xml",
            "defaultSchemaIfAvailable": "",
            "defaultEncodingIfAvailable": "   "
        }"#;
        let setup: FileComplexInputSetup = serde_json::from_str(json).unwrap();
        assert_eq!(
            setup.default_mimetype_if_available,
            Some("text/xml".to_string())
        );
        assert!(setup.default_schema_if_available.is_none());
        assert!(setup.default_encoding_if_available.is_none());
    }

    #[test]
    fn test_null_becomes_none() {
        let json = r#"{ "defaultSchemaIfAvailable": null }"#;
        let setup: FileComplexInputSetup = serde_json::from_str(json).unwrap();
        assert!(setup.default_schema_if_available.is_none());
    }

    #[test]
    fn test_none_round_trips_as_empty_string() {
        let setup = FileComplexInputSetup {
            default_mimetype_if_available: None,
            default_schema_if_available: None,
            default_encoding_if_available: None,
        };
        let json = serde_json::to_string(&setup).unwrap();
        assert!(json.contains("\"defaultMimetypeIfAvailable\":\"\""));

        let reloaded: FileComplexInputSetup = serde_json::from_str(&json).unwrap();
        assert_eq!(setup, reloaded);
    }

    #[test]
    fn test_output_default_transmission_is_value() {
        let setup = FileComplexOutputSetup::default();
        assert_eq!(setup.default_transmission_mode, "value");
        assert_eq!(
            setup.parse_transmission_mode().0,
            Some(TransmissionMode::Value)
        );
    }

    #[test]
    fn test_invalid_transmission_mode_is_reported() {
        let mut setup = FileComplexOutputSetup::default();
        setup.default_transmission_mode = "inline".to_string();

        let (parsed, issues) = setup.parse_transmission_mode();
        assert!(parsed.is_none());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("value, reference"));
    }

    #[test]
    fn test_domain_round_trip() {
        let setup = ComplexOutputSetup {
            mimetype: Some("image/geotiff".to_string()),
            schema: None,
            encoding: Some("base64".to_string()),
            transmission_mode: TransmissionMode::Reference,
        };
        let file = FileComplexOutputSetup::from(&setup);
        assert_eq!(file.default_transmission_mode, "reference");
        assert_eq!(file.to_setup(TransmissionMode::Reference), setup);
    }
}
