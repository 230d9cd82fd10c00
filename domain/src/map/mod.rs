//! Map viewport concepts.
//!
//! - [`center::MapCenter`] — the start center of the map view

pub mod center;
