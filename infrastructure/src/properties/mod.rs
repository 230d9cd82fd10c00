//! Application properties loading for wps-assist
//!
//! This module handles file I/O and merging of properties from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file (`.json` or `.toml`)
//! 2. `WPS_ASSIST_*` environment variables
//! 3. Project root: `./application_properties.json` or `./wps-assist.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/wps-assist/properties.toml`
//! 5. Default values

mod file;
mod loader;

pub use file::{
    DEFAULT_WPS_SERVICES, FileComplexInputSetup, FileComplexOutputSetup, FileProperties,
    InvalidProperties, SaveError,
};
pub use loader::{ENV_PREFIX, LoadError, PropertiesLoader};
