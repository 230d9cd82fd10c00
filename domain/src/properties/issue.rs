//! Structured validation issues for the application properties.
//!
//! Validation never stops at the first problem: every check appends to a
//! `Vec<PropertyIssue>` so a misconfigured deployment surfaces all of its
//! problems in one run. Issues carry a machine-readable code alongside the
//! human-readable message.

/// Severity level of a properties issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the properties cannot be used by the client.
    Error,
    /// Non-fatal: the properties work but may not behave as expected.
    Warning,
}

/// Identifies a specific properties issue.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyIssueCode {
    /// `wpsServices` is empty: the client has no endpoint to talk to.
    NoServicesConfigured,
    /// `selectedServiceUrl` is not a member of `wpsServices`.
    SelectedServiceNotOffered { url: String },
    /// A URL-valued field failed to parse (e.g. an unsubstituted
    /// deployment placeholder).
    InvalidUrl {
        field: String,
        value: String,
        reason: String,
    },
    /// An enum-valued field holds a value outside its valid set.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// `mapStartZoom` is negative or does not fit a zoom level.
    ZoomOutOfRange { value: i64 },
    /// `mapStartCenter` is outside the WGS84 coordinate bounds.
    CenterOutOfBounds { lat: f64, lon: f64 },
    /// An endpoint appears more than once in `wpsServices`.
    DuplicateService { url: String },
    /// A configured mime type is not one the assistant knows.
    UnknownMimeType { field: String, value: String },
}

/// A detected issue in the application properties.
#[derive(Debug, Clone)]
pub struct PropertyIssue {
    pub severity: Severity,
    pub code: PropertyIssueCode,
    pub message: String,
}
