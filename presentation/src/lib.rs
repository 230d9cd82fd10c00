//! Presentation layer for wps-assist
//!
//! This crate contains CLI definitions and output formatters
//! for the application properties record.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::PropertiesFormatter;
