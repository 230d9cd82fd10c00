//! Map center value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Geographic start center of the map view (Value Object)
///
/// Serializes to the wire form `[lat, lon]`, a two-element array,
/// matching what the map component consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCenter {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lon: f64,
}

impl MapCenter {
    pub const LAT_MIN: f64 = -90.0;
    pub const LAT_MAX: f64 = 90.0;
    pub const LON_MIN: f64 = -180.0;
    pub const LON_MAX: f64 = 180.0;

    /// Create a new map center
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check that both coordinates are plausible WGS84 degrees.
    ///
    /// NaN compares false against every bound, so it is never in bounds.
    pub fn in_bounds(&self) -> bool {
        (Self::LAT_MIN..=Self::LAT_MAX).contains(&self.lat)
            && (Self::LON_MIN..=Self::LON_MAX).contains(&self.lon)
    }
}

impl std::fmt::Display for MapCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}

impl Serialize for MapCenter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [self.lat, self.lon].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MapCenter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [lat, lon] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(MapCenter { lat, lon })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_as_pair() {
        let center = MapCenter::new(-33.2551, -70.8676);
        let json = serde_json::to_string(&center).unwrap();
        assert_eq!(json, "[-33.2551,-70.8676]");
    }

    #[test]
    fn test_deserialize_from_pair() {
        let center: MapCenter = serde_json::from_str("[52.52, 13.405]").unwrap();
        assert_eq!(center, MapCenter::new(52.52, 13.405));
    }

    #[test]
    fn test_deserialize_rejects_wrong_length() {
        assert!(serde_json::from_str::<MapCenter>("[1.0]").is_err());
        assert!(serde_json::from_str::<MapCenter>("[1.0, 2.0, 3.0]").is_err());
    }

    #[test]
    fn test_in_bounds() {
        assert!(MapCenter::new(-33.2551, -70.8676).in_bounds());
        assert!(MapCenter::new(90.0, 180.0).in_bounds());
        assert!(!MapCenter::new(90.5, 0.0).in_bounds());
        assert!(!MapCenter::new(0.0, -180.1).in_bounds());
    }

    #[test]
    fn test_nan_is_out_of_bounds() {
        assert!(!MapCenter::new(f64::NAN, 0.0).in_bounds());
        assert!(!MapCenter::new(0.0, f64::NAN).in_bounds());
    }
}
