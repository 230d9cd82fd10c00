//! Output formatter trait

use assist_domain::{ClientProperties, PropertyIssue};

/// Trait for formatting the application properties record
pub trait PropertiesFormatter {
    /// Format the complete properties record
    fn format(&self, properties: &ClientProperties) -> String;

    /// Format the endpoint list only (concise output)
    fn format_services(&self, properties: &ClientProperties) -> String;

    /// Format a validation report
    fn format_report(&self, issues: &[PropertyIssue]) -> String;
}
