//! Domain layer for wps-assist
//!
//! This crate contains the value objects and the validated application
//! properties record for a WPS (OGC Web Processing Service) web client.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## ClientProperties
//!
//! The central type is [`ClientProperties`]: an immutable record of
//! everything the client needs before it talks to a WPS server:
//!
//! - **Endpoints**: candidate service URLs and the selected one
//! - **Protocol**: WPS version and complex data format defaults
//! - **Viewport**: map start center and zoom
//! - **UI**: start dialog behavior and language
//!
//! ## Validation
//!
//! A record is checked with [`ClientProperties::validate`], which returns
//! every detected [`PropertyIssue`] instead of stopping at the first one.
//! Issues carry a [`Severity`]; only `Error` issues make a record unusable.

pub mod core;
pub mod formats;
pub mod map;
pub mod properties;

// Re-export commonly used types
pub use core::{
    error::DomainError, language::Language, service_version::ServiceVersion,
    transmission_mode::TransmissionMode,
};
pub use map::center::MapCenter;
pub use properties::{
    complex_data::{ComplexInputSetup, ComplexOutputSetup},
    issue::{PropertyIssue, PropertyIssueCode, Severity},
    keys::{PropertyKeyInfo, known_keys, lookup_key},
    record::ClientProperties,
};
