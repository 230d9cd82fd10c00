//! Property key registry.
//!
//! Defines metadata for every known property key: wire name, description,
//! valid values, and the environment variable that overrides it. Used by
//! the `keys` CLI command and for issue messages.

use crate::core::language::Language;
use crate::core::service_version::ServiceVersion;
use crate::core::transmission_mode::TransmissionMode;

/// Metadata for a single property key.
#[derive(Debug, Clone)]
pub struct PropertyKeyInfo {
    /// Dotted wire key path (e.g. `"complexOutputDataSetup.defaultTransmissionMode"`).
    pub key: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Valid string values (empty if freeform).
    pub valid_values: &'static [&'static str],
    /// Environment variable that overrides this key.
    pub env_var: &'static str,
}

/// All known property keys with their metadata.
pub fn known_keys() -> &'static [PropertyKeyInfo] {
    &KNOWN_KEYS
}

/// Look up a property key by its dotted wire path.
pub fn lookup_key(key: &str) -> Option<&'static PropertyKeyInfo> {
    KNOWN_KEYS.iter().find(|k| k.key == key)
}

static KNOWN_KEYS: [PropertyKeyInfo; 15] = [
    // ==================== Service ====================
    PropertyKeyInfo {
        key: "wpsServices",
        description: "Candidate WPS endpoints offered to the user",
        valid_values: &[],
        env_var: "WPS_ASSIST_WPS_SERVICES",
    },
    PropertyKeyInfo {
        key: "serviceVersion",
        description: "WPS protocol version",
        valid_values: &ServiceVersion::VALID_VALUES,
        env_var: "WPS_ASSIST_SERVICE_VERSION",
    },
    PropertyKeyInfo {
        key: "selectedServiceUrl",
        description: "Endpoint the client connects to (one of wpsServices)",
        valid_values: &[],
        env_var: "WPS_ASSIST_SELECTED_SERVICE_URL",
    },
    PropertyKeyInfo {
        key: "skipWpsSetup",
        description: "Skip the service selection dialog on startup",
        valid_values: &["true", "false"],
        env_var: "WPS_ASSIST_SKIP_WPS_SETUP",
    },
    PropertyKeyInfo {
        key: "reuseGeoJSONOutput",
        description: "Feed GeoJSON outputs of one process into the next as input",
        valid_values: &["true", "false"],
        env_var: "WPS_ASSIST_REUSE_GEO_JSON_OUTPUT",
    },
    // ==================== Map viewport ====================
    PropertyKeyInfo {
        key: "mapStartCenter",
        description: "Map start center as [lat, lon]",
        valid_values: &[],
        env_var: "WPS_ASSIST_MAP_START_CENTER",
    },
    PropertyKeyInfo {
        key: "mapStartZoom",
        description: "Map start zoom level (non-negative)",
        valid_values: &[],
        env_var: "WPS_ASSIST_MAP_START_ZOOM",
    },
    // ==================== UI ====================
    PropertyKeyInfo {
        key: "defaultLanguage",
        description: "UI language applied before the user picks one",
        valid_values: &Language::VALID_VALUES,
        env_var: "WPS_ASSIST_DEFAULT_LANGUAGE",
    },
    // ==================== Complex inputs ====================
    PropertyKeyInfo {
        key: "complexInputDataSetup.defaultMimetypeIfAvailable",
        description: "Preferred mime type for complex inputs",
        valid_values: &[],
        env_var: "WPS_ASSIST_COMPLEX_INPUT_DATA_SETUP__DEFAULT_MIMETYPE_IF_AVAILABLE",
    },
    PropertyKeyInfo {
        key: "complexInputDataSetup.defaultSchemaIfAvailable",
        description: "Preferred schema for complex inputs",
        valid_values: &[],
        env_var: "WPS_ASSIST_COMPLEX_INPUT_DATA_SETUP__DEFAULT_SCHEMA_IF_AVAILABLE",
    },
    PropertyKeyInfo {
        key: "complexInputDataSetup.defaultEncodingIfAvailable",
        description: "Preferred encoding for complex inputs",
        valid_values: &[],
        env_var: "WPS_ASSIST_COMPLEX_INPUT_DATA_SETUP__DEFAULT_ENCODING_IF_AVAILABLE",
    },
    // ==================== Complex outputs ====================
    PropertyKeyInfo {
        key: "complexOutputDataSetup.defaultMimetypeIfAvailable",
        description: "Preferred mime type for complex outputs",
        valid_values: &[],
        env_var: "WPS_ASSIST_COMPLEX_OUTPUT_DATA_SETUP__DEFAULT_MIMETYPE_IF_AVAILABLE",
    },
    PropertyKeyInfo {
        key: "complexOutputDataSetup.defaultSchemaIfAvailable",
        description: "Preferred schema for complex outputs",
        valid_values: &[],
        env_var: "WPS_ASSIST_COMPLEX_OUTPUT_DATA_SETUP__DEFAULT_SCHEMA_IF_AVAILABLE",
    },
    PropertyKeyInfo {
        key: "complexOutputDataSetup.defaultEncodingIfAvailable",
        description: "Preferred encoding for complex outputs",
        valid_values: &[],
        env_var: "WPS_ASSIST_COMPLEX_OUTPUT_DATA_SETUP__DEFAULT_ENCODING_IF_AVAILABLE",
    },
    PropertyKeyInfo {
        key: "complexOutputDataSetup.defaultTransmissionMode",
        description: "How the server hands complex outputs back",
        valid_values: &TransmissionMode::VALID_VALUES,
        env_var: "WPS_ASSIST_COMPLEX_OUTPUT_DATA_SETUP__DEFAULT_TRANSMISSION_MODE",
    },
];
