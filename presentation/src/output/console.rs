//! Console output formatter for the application properties record

use crate::output::formatter::PropertiesFormatter;
use assist_domain::{ClientProperties, PropertyIssue, Severity, known_keys};
use colored::Colorize;

/// Formats the properties record for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete properties record
    pub fn format(properties: &ClientProperties) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("WPS Client Properties"));
        output.push('\n');

        // Active service
        output.push_str(&format!(
            "{} {}\n",
            "Endpoint:".cyan().bold(),
            properties.selected_service_url
        ));
        output.push_str(&format!(
            "{} WPS {}\n",
            "Protocol:".cyan().bold(),
            properties.service_version
        ));

        // Candidate endpoints
        output.push_str(&Self::section_header("Configured endpoints"));
        output.push_str(&Self::endpoint_lines(properties));

        // Client behaviour
        output.push_str(&Self::section_header("Client behaviour"));
        output.push_str(&format!(
            "  Skip setup dialog:    {}\n",
            Self::yes_no(properties.skip_wps_setup)
        ));
        output.push_str(&format!(
            "  Reuse GeoJSON output: {}\n",
            Self::yes_no(properties.reuse_geojson_output)
        ));
        output.push_str(&format!(
            "  Default language:     {}\n",
            properties.default_language
        ));

        // Map viewport
        output.push_str(&Self::section_header("Map"));
        output.push_str(&format!(
            "  Start center: {}\n",
            properties.map_start_center
        ));
        output.push_str(&format!("  Start zoom:   {}\n", properties.map_start_zoom));

        // Complex data format setups
        let input = &properties.complex_input_data_setup;
        output.push_str(&Self::section_header("Complex input data"));
        output.push_str(&Self::setup_lines(
            input.mimetype.as_deref(),
            input.schema.as_deref(),
            input.encoding.as_deref(),
        ));

        let out = &properties.complex_output_data_setup;
        output.push_str(&Self::section_header("Complex output data"));
        output.push_str(&Self::setup_lines(
            out.mimetype.as_deref(),
            out.schema.as_deref(),
            out.encoding.as_deref(),
        ));
        output.push_str(&format!(
            "  Transmission mode: {}\n",
            out.transmission_mode
        ));

        output.push_str(&Self::footer());

        output
    }

    /// Format the endpoint list only (concise output)
    pub fn format_services(properties: &ClientProperties) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Configured WPS endpoints ===".cyan().bold()
        ));

        output.push_str(&Self::endpoint_lines(properties));

        output.push_str(&format!(
            "\n{} WPS {}\n",
            "Protocol version:".dimmed(),
            properties.service_version
        ));

        output
    }

    /// Format a validation report
    pub fn format_report(issues: &[PropertyIssue]) -> String {
        if issues.is_empty() {
            return format!("{}\n", "properties OK: no issues found".green());
        }

        let mut output = String::new();
        let mut errors = 0;
        let mut warnings = 0;

        for issue in issues {
            let tag = match issue.severity {
                Severity::Error => {
                    errors += 1;
                    "error".red().bold()
                }
                Severity::Warning => {
                    warnings += 1;
                    "warning".yellow().bold()
                }
            };
            output.push_str(&format!("  {} {}\n", tag, issue.message));
        }

        output.push_str(&format!(
            "\n{} error(s), {} warning(s)\n",
            errors, warnings
        ));

        output
    }

    /// Format the property key registry
    pub fn format_keys() -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Known property keys"));
        output.push('\n');

        for info in known_keys() {
            output.push_str(&format!("\n{}\n", info.key.yellow().bold()));
            output.push_str(&format!("  {}\n", info.description));
            if !info.valid_values.is_empty() {
                output.push_str(&format!(
                    "  {} {}\n",
                    "values:".dimmed(),
                    info.valid_values.join(", ")
                ));
            }
            output.push_str(&format!("  {} {}\n", "env:".dimmed(), info.env_var));
        }

        output.push_str(&Self::footer());

        output
    }

    fn endpoint_lines(properties: &ClientProperties) -> String {
        let mut output = String::new();
        for service in &properties.wps_services {
            if *service == properties.selected_service_url {
                output.push_str(&format!(
                    "  * {} {}\n",
                    service,
                    "(selected)".green().bold()
                ));
            } else {
                output.push_str(&format!("  * {}\n", service));
            }
        }
        output
    }

    fn setup_lines(
        mimetype: Option<&str>,
        schema: Option<&str>,
        encoding: Option<&str>,
    ) -> String {
        format!(
            "  Mime type: {}\n  Schema:    {}\n  Encoding:  {}\n",
            Self::optional(mimetype),
            Self::optional(schema),
            Self::optional(encoding)
        )
    }

    fn optional(value: Option<&str>) -> String {
        match value {
            Some(value) => value.to_string(),
            None => "(protocol default)".dimmed().to_string(),
        }
    }

    fn yes_no(flag: bool) -> &'static str {
        if flag { "yes" } else { "no" }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl PropertiesFormatter for ConsoleFormatter {
    fn format(&self, properties: &ClientProperties) -> String {
        Self::format(properties)
    }

    fn format_services(&self, properties: &ClientProperties) -> String {
        Self::format_services(properties)
    }

    fn format_report(&self, issues: &[PropertyIssue]) -> String {
        Self::format_report(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assist_domain::PropertyIssueCode;

    fn issue(severity: Severity, message: &str) -> PropertyIssue {
        PropertyIssue {
            severity,
            code: PropertyIssueCode::NoServicesConfigured,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_empty_report_says_ok() {
        let report = ConsoleFormatter::format_report(&[]);
        assert!(report.contains("no issues found"));
    }

    #[test]
    fn test_report_counts_severities() {
        let issues = vec![
            issue(Severity::Error, "wpsServices: no WPS endpoints configured"),
            issue(Severity::Warning, "first warning"),
            issue(Severity::Warning, "second warning"),
        ];

        let report = ConsoleFormatter::format_report(&issues);
        assert!(report.contains("no WPS endpoints configured"));
        assert!(report.contains("1 error(s), 2 warning(s)"));
    }

    #[test]
    fn test_keys_listing_names_every_key() {
        let listing = ConsoleFormatter::format_keys();
        assert!(listing.contains("serviceVersion"));
        assert!(listing.contains("reuseGeoJSONOutput"));
        assert!(listing.contains("WPS_ASSIST_DEFAULT_LANGUAGE"));
    }
}
