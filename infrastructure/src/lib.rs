//! Infrastructure layer for wps-assist
//!
//! This crate contains the wire-format structs for the legacy
//! `applicationProperties` file and the multi-source loader that merges
//! defaults, config files, and environment overrides.

pub mod properties;

// Re-export commonly used types
pub use properties::{
    FileComplexInputSetup, FileComplexOutputSetup, FileProperties, InvalidProperties, LoadError,
    PropertiesLoader, SaveError,
};
