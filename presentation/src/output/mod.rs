//! Output formatting module
//!
//! Console rendering for the properties record, validation reports,
//! and the property key registry.

pub mod console;
pub mod formatter;
