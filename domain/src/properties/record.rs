//! The validated application properties record.
//!
//! [`ClientProperties`] is constructed once at startup (normally by the
//! infrastructure loader) and handed to the rest of the application by
//! reference. Cross-field invariants live in [`ClientProperties::validate`]:
//!
//! - at least one WPS endpoint must be configured
//! - the selected endpoint must be one of the configured ones
//! - the map start center must be plausible WGS84 coordinates
//!
//! # Examples
//!
//! ```
//! use assist_domain::ClientProperties;
//!
//! let properties = ClientProperties::demo();
//! let issues = properties.validate();
//! assert!(issues.is_empty());
//! ```

use crate::core::language::Language;
use crate::core::service_version::ServiceVersion;
use crate::formats;
use crate::map::center::MapCenter;
use crate::properties::complex_data::{ComplexInputSetup, ComplexOutputSetup};
use crate::properties::issue::{PropertyIssue, PropertyIssueCode, Severity};
use url::Url;

/// Everything the WPS client needs before it talks to a server.
///
/// Field names mirror the wire keys of the legacy properties file; the
/// wire format itself lives in the infrastructure layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientProperties {
    /// Candidate WPS endpoints offered to the user
    pub wps_services: Vec<Url>,
    /// Protocol version spoken against the selected endpoint
    pub service_version: ServiceVersion,
    /// The endpoint the client connects to, one of `wps_services`
    pub selected_service_url: Url,
    /// Skip the service selection dialog on startup
    pub skip_wps_setup: bool,
    /// Feed GeoJSON outputs of one process into the next as input
    pub reuse_geojson_output: bool,
    /// Map viewport start center
    pub map_start_center: MapCenter,
    /// Map viewport start zoom level
    pub map_start_zoom: u32,
    /// UI language applied before the user picks one
    pub default_language: Language,
    /// Format defaults for complex inputs
    pub complex_input_data_setup: ComplexInputSetup,
    /// Format defaults for complex outputs
    pub complex_output_data_setup: ComplexOutputSetup,
}

impl ClientProperties {
    /// Validate the cross-field invariants, returning all detected issues.
    ///
    /// The individual checks are associated functions so callers holding
    /// only partially parsed input can still run the ones that apply.
    pub fn validate(&self) -> Vec<PropertyIssue> {
        let mut issues = Vec::new();
        issues.extend(Self::check_services(
            &self.wps_services,
            Some(&self.selected_service_url),
        ));
        issues.extend(Self::check_center(self.map_start_center));
        issues.extend(Self::check_duplicates(&self.wps_services));
        issues.extend(Self::check_mime_types(
            self.complex_input_data_setup.mimetype.as_deref(),
            self.complex_output_data_setup.mimetype.as_deref(),
        ));
        issues
    }

    /// Check that the endpoint menu is non-empty and offers the selected
    /// endpoint.
    ///
    /// Pass `None` when the selected endpoint did not survive parsing;
    /// membership is then skipped, the menu checks still run.
    pub fn check_services(services: &[Url], selected: Option<&Url>) -> Vec<PropertyIssue> {
        let mut issues = Vec::new();
        // Membership of the selected endpoint only makes sense for a
        // non-empty menu.
        if services.is_empty() {
            issues.push(PropertyIssue {
                severity: Severity::Error,
                code: PropertyIssueCode::NoServicesConfigured,
                message: "wpsServices: no WPS endpoints configured".to_string(),
            });
        } else if let Some(selected) = selected {
            if !services.contains(selected) {
                issues.push(PropertyIssue {
                    severity: Severity::Error,
                    code: PropertyIssueCode::SelectedServiceNotOffered {
                        url: selected.to_string(),
                    },
                    message: format!(
                        "selectedServiceUrl: '{}' is not one of the wpsServices entries",
                        selected
                    ),
                });
            }
        }
        issues
    }

    /// Check the start center against WGS84 bounds.
    pub fn check_center(center: MapCenter) -> Vec<PropertyIssue> {
        let mut issues = Vec::new();
        if !center.in_bounds() {
            issues.push(PropertyIssue {
                severity: Severity::Error,
                code: PropertyIssueCode::CenterOutOfBounds {
                    lat: center.lat,
                    lon: center.lon,
                },
                message: format!(
                    "mapStartCenter: [{}] is outside WGS84 bounds (lat {}..{}, lon {}..{})",
                    center,
                    MapCenter::LAT_MIN,
                    MapCenter::LAT_MAX,
                    MapCenter::LON_MIN,
                    MapCenter::LON_MAX
                ),
            });
        }
        issues
    }

    /// Report endpoints listed more than once; harmless but they clutter
    /// the menu.
    pub fn check_duplicates(services: &[Url]) -> Vec<PropertyIssue> {
        let mut issues = Vec::new();
        let mut reported: Vec<&Url> = Vec::new();
        for (i, url) in services.iter().enumerate() {
            if services[..i].contains(url) && !reported.contains(&url) {
                reported.push(url);
                issues.push(PropertyIssue {
                    severity: Severity::Warning,
                    code: PropertyIssueCode::DuplicateService {
                        url: url.to_string(),
                    },
                    message: format!("wpsServices: '{}' is listed more than once", url),
                });
            }
        }
        issues
    }

    /// Report configured mime types outside the known WPS set; probably
    /// typos.
    pub fn check_mime_types(
        input_mimetype: Option<&str>,
        output_mimetype: Option<&str>,
    ) -> Vec<PropertyIssue> {
        let mut issues = Vec::new();
        let mime_fields = [
            (
                "complexInputDataSetup.defaultMimetypeIfAvailable",
                input_mimetype,
            ),
            (
                "complexOutputDataSetup.defaultMimetypeIfAvailable",
                output_mimetype,
            ),
        ];
        for (field, mimetype) in mime_fields {
            if let Some(mime) = mimetype {
                if !formats::KNOWN_MIME_TYPES.contains(&mime) {
                    issues.push(PropertyIssue {
                        severity: Severity::Warning,
                        code: PropertyIssueCode::UnknownMimeType {
                            field: field.to_string(),
                            value: mime.to_string(),
                        },
                        message: format!("{}: '{}' is not a known WPS mime type", field, mime),
                    });
                }
            }
        }
        issues
    }

    /// Check whether any issue in the slice is fatal.
    pub fn has_errors(issues: &[PropertyIssue]) -> bool {
        issues.iter().any(|issue| issue.severity == Severity::Error)
    }

    /// A valid record pointing at the public 52North demo endpoint.
    ///
    /// Used in doc examples and tests; real deployments load their record
    /// through the infrastructure layer instead.
    pub fn demo() -> Self {
        let demo_url = Url::parse("http://geoprocessing.demo.52north.org:8080/wps/WebProcessingService")
            .expect("demo endpoint URL is valid");
        Self {
            wps_services: vec![demo_url.clone()],
            service_version: ServiceVersion::default(),
            selected_service_url: demo_url,
            skip_wps_setup: true,
            reuse_geojson_output: true,
            map_start_center: MapCenter::new(-33.2551, -70.8676),
            map_start_zoom: 7,
            default_language: Language::default(),
            complex_input_data_setup: ComplexInputSetup {
                mimetype: Some(formats::MIME_GEOJSON.to_string()),
                schema: None,
                encoding: None,
            },
            complex_output_data_setup: ComplexOutputSetup {
                mimetype: Some(formats::MIME_GEOJSON.to_string()),
                schema: None,
                encoding: None,
                transmission_mode: Default::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transmission_mode::TransmissionMode;

    // ==================== Helpers ====================

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn make_properties(services: Vec<&str>, selected: &str) -> ClientProperties {
        let mut properties = ClientProperties::demo();
        properties.wps_services = services.into_iter().map(url).collect();
        properties.selected_service_url = url(selected);
        properties
    }

    // ==================== Valid records (0 issues) ====================

    #[test]
    fn demo_record_is_valid() {
        assert!(ClientProperties::demo().validate().is_empty());
    }

    #[test]
    fn selected_among_services_is_valid() {
        let properties = make_properties(
            vec![
                "https://riesgos.52north.org/wps/WebProcessingService",
                "http://tsunami-riesgos.awi.de:8080/wps/WebProcessingService",
            ],
            "http://tsunami-riesgos.awi.de:8080/wps/WebProcessingService",
        );
        assert!(properties.validate().is_empty());
    }

    // ==================== Error cases ====================

    #[test]
    fn empty_services_is_error() {
        let mut properties = ClientProperties::demo();
        properties.wps_services.clear();

        let issues = properties.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].code, PropertyIssueCode::NoServicesConfigured);
        assert!(issues[0].message.contains("no WPS endpoints configured"));
    }

    #[test]
    fn check_services_without_selected_still_checks_menu() {
        let services = vec![url("https://riesgos.52north.org/wps/WebProcessingService")];
        assert!(ClientProperties::check_services(&services, None).is_empty());

        let issues = ClientProperties::check_services(&[], None);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, PropertyIssueCode::NoServicesConfigured);
    }

    #[test]
    fn selected_outside_services_is_error() {
        let properties = make_properties(
            vec!["https://riesgos.52north.org/wps/WebProcessingService"],
            "https://wps.example.org/other/WebProcessingService",
        );

        let issues = properties.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert!(matches!(
            &issues[0].code,
            PropertyIssueCode::SelectedServiceNotOffered { url }
                if url.contains("wps.example.org")
        ));
    }

    #[test]
    fn out_of_bounds_center_is_error() {
        let mut properties = ClientProperties::demo();
        properties.map_start_center = MapCenter::new(-91.0, 0.0);

        let issues = properties.validate();
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            issues[0].code,
            PropertyIssueCode::CenterOutOfBounds { lat, .. } if lat == -91.0
        ));
    }

    #[test]
    fn nan_center_is_error() {
        let mut properties = ClientProperties::demo();
        properties.map_start_center = MapCenter::new(f64::NAN, 0.0);

        let issues = properties.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    // ==================== Warning cases ====================

    #[test]
    fn duplicate_service_warns_once() {
        let properties = make_properties(
            vec![
                "https://riesgos.52north.org/wps/WebProcessingService",
                "https://riesgos.52north.org/wps/WebProcessingService",
                "https://riesgos.52north.org/wps/WebProcessingService",
            ],
            "https://riesgos.52north.org/wps/WebProcessingService",
        );

        let issues = properties.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(matches!(
            &issues[0].code,
            PropertyIssueCode::DuplicateService { .. }
        ));
    }

    #[test]
    fn unknown_mimetype_warns() {
        let mut properties = ClientProperties::demo();
        properties.complex_output_data_setup = ComplexOutputSetup {
            mimetype: Some("aplication/vnd.geo+json".to_string()),
            schema: None,
            encoding: None,
            transmission_mode: TransmissionMode::Value,
        };

        let issues = properties.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(matches!(
            &issues[0].code,
            PropertyIssueCode::UnknownMimeType { field, .. }
                if field == "complexOutputDataSetup.defaultMimetypeIfAvailable"
        ));
    }

    // ==================== has_errors helper ====================

    #[test]
    fn has_errors_returns_true_for_errors() {
        let mut properties = ClientProperties::demo();
        properties.wps_services.clear();
        assert!(ClientProperties::has_errors(&properties.validate()));
    }

    #[test]
    fn has_errors_returns_false_for_warnings_only() {
        let properties = make_properties(
            vec![
                "https://riesgos.52north.org/wps/WebProcessingService",
                "https://riesgos.52north.org/wps/WebProcessingService",
            ],
            "https://riesgos.52north.org/wps/WebProcessingService",
        );
        assert!(!ClientProperties::has_errors(&properties.validate()));
    }

    #[test]
    fn has_errors_returns_false_for_empty() {
        let issues: Vec<PropertyIssue> = vec![];
        assert!(!ClientProperties::has_errors(&issues));
    }
}
