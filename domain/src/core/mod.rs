//! Core domain concepts shared across all subdomains.
//!
//! - [`service_version::ServiceVersion`] — supported WPS protocol versions
//! - [`language::Language`] — supported UI languages
//! - [`transmission_mode::TransmissionMode`] — WPS 2.0 output transmission modes
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod language;
pub mod service_version;
pub mod transmission_mode;
