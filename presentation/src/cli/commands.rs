//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the properties record
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Text,
    /// JSON in the application_properties.json wire shape
    Json,
}

/// CLI arguments for wps-assist
#[derive(Parser, Debug)]
#[command(name = "wps-assist")]
#[command(author, version, about = "Inspect and validate WPS web client application properties")]
#[command(long_about = r#"
wps-assist loads the application properties of an OGC WPS web client,
validates them and shows what the client would actually run with.

Properties are loaded from (in priority order):
1. --config <path>     Explicit properties file (.json or .toml)
2. WPS_ASSIST_*        Environment variable overrides
3. ./application_properties.json or ./wps-assist.toml   Project-level properties
4. ~/.config/wps-assist/properties.toml   Global properties

Example:
  wps-assist show
  wps-assist show --output json
  wps-assist validate --config staging.toml
  WPS_ASSIST_SERVICE_VERSION=1.0.0 wps-assist show
"#)]
pub struct Cli {
    /// Subcommand to run (defaults to show)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to properties file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of properties files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show properties file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands of wps-assist
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the resolved properties record
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
    /// Validate the properties and list every issue found
    Validate,
    /// Write a properties file populated with the default values
    Init {
        /// Destination file (.json or .toml)
        #[arg(default_value = "application_properties.json")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// List the configured WPS endpoints
    Services,
    /// List every known property key with its valid values
    Keys,
}
