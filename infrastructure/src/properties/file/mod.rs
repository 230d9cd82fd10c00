//! Raw application properties data types
//!
//! These structs represent the exact structure of the legacy
//! `applicationProperties` file (JSON in the original deployment, TOML
//! also accepted). Constrained fields stay as plain strings here so that
//! bad values surface as collected [`PropertyIssue`]s instead of
//! deserialization failures; [`FileProperties::to_properties`] converts
//! into the validated domain record.

mod complex_data;

pub use complex_data::{FileComplexInputSetup, FileComplexOutputSetup};

use assist_domain::{
    ClientProperties, Language, MapCenter, PropertyIssue, PropertyIssueCode, ServiceVersion,
    Severity,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use url::Url;

/// Candidate WPS endpoints shipped as the built-in default menu.
pub const DEFAULT_WPS_SERVICES: [&str; 3] = [
    "http://geoprocessing.demo.52north.org:8080/wps/WebProcessingService",
    "https://riesgos.52north.org/wps/WebProcessingService",
    "http://tsunami-riesgos.awi.de:8080/wps/WebProcessingService",
];

/// The raw values could not be converted into a valid record.
#[derive(Debug, Error)]
#[error("invalid application properties:\n{}", format_issue_lines(.issues))]
pub struct InvalidProperties {
    /// Every detected issue, errors and warnings alike.
    pub issues: Vec<PropertyIssue>,
}

fn format_issue_lines(issues: &[PropertyIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {}", issue.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writing a properties file failed.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to encode properties as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode properties as TOML: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Complete application properties (raw wire structure)
///
/// Field names serialize to the exact keys the legacy web client reads,
/// including the irregular `reuseGeoJSONOutput` spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileProperties {
    /// Candidate WPS endpoints offered to the user
    pub wps_services: Vec<String>,
    /// WPS protocol version ("1.0.0" or "2.0.0")
    pub service_version: String,
    /// Endpoint the client connects to, one of `wpsServices`
    pub selected_service_url: String,
    /// Skip the service selection dialog on startup
    pub skip_wps_setup: bool,
    /// Feed GeoJSON outputs of one process into the next as input
    #[serde(rename = "reuseGeoJSONOutput")]
    pub reuse_geojson_output: bool,
    /// Map start center as `[lat, lon]`
    pub map_start_center: MapCenter,
    /// Map start zoom level
    pub map_start_zoom: i64,
    /// UI language ("en" or "de")
    pub default_language: String,
    /// Format defaults for complex inputs
    pub complex_input_data_setup: FileComplexInputSetup,
    /// Format defaults for complex outputs
    pub complex_output_data_setup: FileComplexOutputSetup,
}

impl Default for FileProperties {
    fn default() -> Self {
        Self {
            wps_services: DEFAULT_WPS_SERVICES.iter().map(|s| s.to_string()).collect(),
            service_version: ServiceVersion::default().as_str().to_string(),
            selected_service_url: DEFAULT_WPS_SERVICES[0].to_string(),
            skip_wps_setup: true,
            reuse_geojson_output: true,
            // Chilean coast, the tsunami demo region
            map_start_center: MapCenter::new(-33.2551, -70.8676),
            map_start_zoom: 7,
            default_language: Language::default().as_str().to_string(),
            complex_input_data_setup: FileComplexInputSetup::default(),
            complex_output_data_setup: FileComplexOutputSetup::default(),
        }
    }
}

/// Parse a string field against an enum's valid set, collecting an issue
/// on failure.
pub(crate) fn parse_enum_value<T: std::str::FromStr>(
    field: &str,
    value: &str,
    valid_values: &[&str],
) -> (Option<T>, Vec<PropertyIssue>) {
    match value.parse::<T>() {
        Ok(parsed) => (Some(parsed), Vec::new()),
        Err(_) => (
            None,
            vec![PropertyIssue {
                severity: Severity::Error,
                code: PropertyIssueCode::InvalidEnumValue {
                    field: field.to_string(),
                    value: value.to_string(),
                    valid_values: valid_values.iter().map(|s| s.to_string()).collect(),
                },
                message: format!(
                    "{}: unknown value '{}' (valid: {})",
                    field,
                    value,
                    valid_values.join(", ")
                ),
            }],
        ),
    }
}

impl FileProperties {
    /// Parse a single URL string, collecting an issue on failure.
    fn parse_url_value(field: &str, value: &str) -> (Option<Url>, Vec<PropertyIssue>) {
        match Url::parse(value) {
            Ok(url) => (Some(url), Vec::new()),
            Err(reason) => (
                None,
                vec![PropertyIssue {
                    severity: Severity::Error,
                    code: PropertyIssueCode::InvalidUrl {
                        field: field.to_string(),
                        value: value.to_string(),
                        reason: reason.to_string(),
                    },
                    message: format!("{}: '{}' is not a valid URL ({})", field, value, reason),
                }],
            ),
        }
    }

    /// Parse the candidate endpoint list into URLs
    ///
    /// Unparseable entries are dropped from the result and reported.
    pub fn parse_services(&self) -> (Vec<Url>, Vec<PropertyIssue>) {
        let mut urls = Vec::new();
        let mut issues = Vec::new();
        for raw in &self.wps_services {
            let (url, mut url_issues) = Self::parse_url_value("wpsServices", raw);
            issues.append(&mut url_issues);
            if let Some(url) = url {
                urls.push(url);
            }
        }
        (urls, issues)
    }

    /// Parse the selected endpoint into a URL
    pub fn parse_selected_service(&self) -> (Option<Url>, Vec<PropertyIssue>) {
        Self::parse_url_value("selectedServiceUrl", &self.selected_service_url)
    }

    /// Parse the service version string into the domain enum
    pub fn parse_service_version(&self) -> (Option<ServiceVersion>, Vec<PropertyIssue>) {
        parse_enum_value(
            "serviceVersion",
            &self.service_version,
            &ServiceVersion::VALID_VALUES,
        )
    }

    /// Parse the default language string into the domain enum
    pub fn parse_language(&self) -> (Option<Language>, Vec<PropertyIssue>) {
        parse_enum_value(
            "defaultLanguage",
            &self.default_language,
            &Language::VALID_VALUES,
        )
    }

    /// Parse the zoom level, rejecting values that do not fit a `u32`
    pub fn parse_zoom(&self) -> (Option<u32>, Vec<PropertyIssue>) {
        match u32::try_from(self.map_start_zoom) {
            Ok(zoom) => (Some(zoom), Vec::new()),
            Err(_) => (
                None,
                vec![PropertyIssue {
                    severity: Severity::Error,
                    code: PropertyIssueCode::ZoomOutOfRange {
                        value: self.map_start_zoom,
                    },
                    message: format!(
                        "mapStartZoom: {} is out of range (must fit a non-negative 32-bit integer)",
                        self.map_start_zoom
                    ),
                }],
            ),
        }
    }

    /// Validate the entire properties file, returning all detected issues.
    ///
    /// This is the single entry point for properties validation. It checks:
    /// 1. URL parse failures (including unsubstituted deploy placeholders)
    /// 2. Enum parse failures (serviceVersion, defaultLanguage,
    ///    defaultTransmissionMode)
    /// 3. Zoom range
    /// 4. Cross-field invariants (endpoint menu, center bounds, mime
    ///    types); these run even when a failed parse blocks assembly
    pub fn validate(&self) -> Vec<PropertyIssue> {
        self.assemble().1
    }

    /// Convert into the validated domain record.
    ///
    /// Returns the record plus any surviving warnings, or
    /// [`InvalidProperties`] when at least one issue is an error.
    pub fn to_properties(&self) -> Result<(ClientProperties, Vec<PropertyIssue>), InvalidProperties> {
        match self.assemble() {
            (Some(record), issues) if !ClientProperties::has_errors(&issues) => {
                Ok((record, issues))
            }
            (_, issues) => Err(InvalidProperties { issues }),
        }
    }

    /// Parse every field and build the record when all parses succeed.
    ///
    /// The cross-field checks run on whatever parsed cleanly, so one bad
    /// scalar does not shorten the report.
    fn assemble(&self) -> (Option<ClientProperties>, Vec<PropertyIssue>) {
        let mut issues = Vec::new();

        let (services, mut list_issues) = self.parse_services();
        issues.append(&mut list_issues);
        let (selected, mut selected_issues) = self.parse_selected_service();
        issues.append(&mut selected_issues);
        let (version, mut version_issues) = self.parse_service_version();
        issues.append(&mut version_issues);
        let (language, mut language_issues) = self.parse_language();
        issues.append(&mut language_issues);
        let (zoom, mut zoom_issues) = self.parse_zoom();
        issues.append(&mut zoom_issues);
        let (transmission, mut transmission_issues) =
            self.complex_output_data_setup.parse_transmission_mode();
        issues.append(&mut transmission_issues);

        issues.extend(ClientProperties::check_services(
            &services,
            selected.as_ref(),
        ));
        issues.extend(ClientProperties::check_center(self.map_start_center));
        issues.extend(ClientProperties::check_duplicates(&services));
        issues.extend(ClientProperties::check_mime_types(
            self.complex_input_data_setup
                .default_mimetype_if_available
                .as_deref(),
            self.complex_output_data_setup
                .default_mimetype_if_available
                .as_deref(),
        ));

        let record = match (selected, version, language, zoom, transmission) {
            (Some(selected), Some(version), Some(language), Some(zoom), Some(transmission)) => {
                Some(ClientProperties {
                    wps_services: services,
                    service_version: version,
                    selected_service_url: selected,
                    skip_wps_setup: self.skip_wps_setup,
                    reuse_geojson_output: self.reuse_geojson_output,
                    map_start_center: self.map_start_center,
                    map_start_zoom: zoom,
                    default_language: language,
                    complex_input_data_setup: self.complex_input_data_setup.to_setup(),
                    complex_output_data_setup: self.complex_output_data_setup.to_setup(transmission),
                })
            }
            _ => None,
        };

        (record, issues)
    }

    /// Write the properties to `path`, pretty-printed.
    ///
    /// JSON for `.json` paths, TOML otherwise. Parent directories are
    /// created as needed.
    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        let rendered = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => serde_json::to_string_pretty(self)?,
            _ => toml::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, rendered)?;
        Ok(())
    }
}

impl From<&ClientProperties> for FileProperties {
    fn from(properties: &ClientProperties) -> Self {
        Self {
            wps_services: properties
                .wps_services
                .iter()
                .map(|url| url.to_string())
                .collect(),
            service_version: properties.service_version.as_str().to_string(),
            selected_service_url: properties.selected_service_url.to_string(),
            skip_wps_setup: properties.skip_wps_setup,
            reuse_geojson_output: properties.reuse_geojson_output,
            map_start_center: properties.map_start_center,
            map_start_zoom: i64::from(properties.map_start_zoom),
            default_language: properties.default_language.as_str().to_string(),
            complex_input_data_setup: FileComplexInputSetup::from(
                &properties.complex_input_data_setup,
            ),
            complex_output_data_setup: FileComplexOutputSetup::from(
                &properties.complex_output_data_setup,
            ),
        }
    }
}
