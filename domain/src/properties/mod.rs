//! The application properties record and its validation.
//!
//! - [`record::ClientProperties`] — the immutable, validated properties record
//! - [`complex_data::ComplexInputSetup`] / [`complex_data::ComplexOutputSetup`]
//!   — format defaults for WPS complex inputs and outputs
//! - [`issue::PropertyIssue`] — structured validation issues with severity
//! - [`keys::known_keys`] — metadata registry for every property key

pub mod complex_data;
pub mod issue;
pub mod keys;
pub mod record;
