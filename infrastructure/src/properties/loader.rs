//! Properties file loader with multi-source merging

use super::file::{FileProperties, InvalidProperties};
use assist_domain::{ClientProperties, PropertyIssue};
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable prefix for property overrides.
pub const ENV_PREFIX: &str = "WPS_ASSIST_";

/// Loading or converting the properties failed.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read application properties: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error(transparent)]
    Invalid(#[from] InvalidProperties),
}

/// Properties loader that handles file discovery and merging
pub struct PropertiesLoader;

impl PropertiesLoader {
    /// Load properties from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit properties path (if provided)
    /// 2. `WPS_ASSIST_*` environment variables
    /// 3. Project root: `./application_properties.json` or `./wps-assist.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/wps-assist/properties.toml`
    /// 5. Fallback: `~/.config/wps-assist/properties.toml`
    /// 6. Default values
    ///
    /// Discovered sources are merged only when present; a missing
    /// explicit path is an error, never a silent fallback.
    pub fn load(properties_path: Option<&PathBuf>) -> Result<FileProperties, LoadError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileProperties::default()));

        // Add global properties (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                debug!("merging global properties from {}", global_path.display());
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        // Add project-level properties
        if let Some(path) = Self::project_config_path() {
            debug!("merging project properties from {}", path.display());
            figment = Self::merge_file(figment, &path);
        }

        // Environment overrides, mapped onto the camelCase wire keys
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .lowercase(false)
                .map(|key| env_key_to_wire(key.as_str()).into())
                .split("__"),
        );

        // Add explicit properties path (highest priority, must exist)
        if let Some(path) = properties_path {
            debug!("merging properties from {}", path.display());
            figment = Self::merge_file_exact(figment, path);
        }

        Ok(figment.extract().map_err(Box::new)?)
    }

    /// Load only default properties (for --no-config)
    pub fn load_defaults() -> FileProperties {
        FileProperties::default()
    }

    /// Load and convert into the validated domain record in one step.
    ///
    /// Returns the record plus any surviving warnings.
    pub fn load_validated(
        properties_path: Option<&PathBuf>,
    ) -> Result<(ClientProperties, Vec<PropertyIssue>), LoadError> {
        let file = Self::load(properties_path)?;
        Ok(file.to_properties()?)
    }

    /// Merge a discovered properties file, choosing the format by
    /// extension. Missing files merge as empty data.
    fn merge_file(figment: Figment, path: &Path) -> Figment {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => figment.merge(Json::file(path)),
            _ => figment.merge(Toml::file(path)),
        }
    }

    /// Merge a properties file that must exist. A missing file surfaces
    /// as a figment error on extraction.
    fn merge_file_exact(figment: Figment, path: &Path) -> Figment {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => figment.merge(Json::file_exact(path)),
            _ => figment.merge(Toml::file_exact(path)),
        }
    }

    /// Get the global properties file path
    ///
    /// Returns XDG_CONFIG_HOME/wps-assist/properties.toml if set,
    /// otherwise falls back to ~/.config/wps-assist/properties.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("wps-assist").join("properties.toml"))
    }

    /// Get the project-level properties file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["application_properties.json", "wps-assist.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Print the properties file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Properties sources (in priority order):");

        // Environment overrides
        if std::env::vars().any(|(key, _)| key.starts_with(ENV_PREFIX)) {
            println!("  [FOUND] Env:     {}* variables", ENV_PREFIX);
        } else {
            println!("  [     ] Env:     {}* variables", ENV_PREFIX);
        }

        // Project properties
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./application_properties.json or ./wps-assist.toml");
        }

        // Global properties
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

/// Translate a `WPS_ASSIST_*` environment key (prefix already stripped)
/// into the camelCase wire key it overrides.
///
/// `__` is kept as the nesting separator so the provider can split the
/// mapped key afterwards. The legacy wire spells GeoJSON with four
/// capitals, which no camelCase derivation produces, so that segment is
/// special-cased.
fn env_key_to_wire(key: &str) -> String {
    key.to_lowercase()
        .split("__")
        .map(camelize_segment)
        .collect::<Vec<_>>()
        .join("__")
}

fn camelize_segment(segment: &str) -> String {
    if segment == "reuse_geo_json_output" {
        return "reuseGeoJSONOutput".to_string();
    }
    let mut parts = segment.split('_');
    let mut camel = String::new();
    if let Some(first) = parts.next() {
        camel.push_str(first);
    }
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            camel.extend(first.to_uppercase());
            camel.push_str(chars.as_str());
        }
    }
    camel
}
