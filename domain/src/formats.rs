//! Well-known WPS exchange formats.
//!
//! Mime types and schema locations commonly produced or consumed by the
//! geoprocessing services the assistant targets. Used for the built-in
//! complex data defaults and to flag likely typos in configured formats.

// ==================== Mime types ====================

/// GeoJSON feature collections.
pub const MIME_GEOJSON: &str = "application/vnd.geo+json";
/// Plain JSON documents.
pub const MIME_JSON: &str = "application/json";
/// XML documents (GML, QuakeML, Shakemap, ...).
pub const MIME_XML: &str = "text/xml";
/// GeoTIFF raster data.
pub const MIME_GEOTIFF: &str = "image/geotiff";
/// Zipped payloads (e.g. shapefiles).
pub const MIME_ZIP: &str = "application/zip";
/// Plain text.
pub const MIME_TEXT_PLAIN: &str = "text/plain";

/// Every mime type the assistant knows how to handle.
pub const KNOWN_MIME_TYPES: [&str; 6] = [
    MIME_GEOJSON,
    MIME_JSON,
    MIME_XML,
    MIME_GEOTIFF,
    MIME_ZIP,
    MIME_TEXT_PLAIN,
];

// ==================== Schema locations ====================

/// GML 3.2.1 feature schema.
pub const SCHEMA_GML_3_2_1: &str = "http://schemas.opengis.net/gml/3.2.1/base/feature.xsd";
/// QuakeML 1.2 seismic event schema.
pub const SCHEMA_QUAKEML_1_2: &str = "http://quakeml.org/xmlns/quakeml/1.2/QuakeML-1.2.xsd";
/// USGS Shakemap ground motion schema.
pub const SCHEMA_SHAKEMAP: &str =
    "http://earthquake.usgs.gov/eqcenter/shakemap/xml/schemas/shakemap.xsd";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_mime_types_contains_defaults() {
        assert!(KNOWN_MIME_TYPES.contains(&MIME_GEOJSON));
        assert!(KNOWN_MIME_TYPES.contains(&MIME_XML));
    }
}
