use serde::{Deserialize, Serialize};

/// A `(latitude, longitude)` pair in decimal degrees.
///
/// Plain value type: two coordinates are the same point exactly when both
/// parts compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `true` when neither part is NaN or infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Sum of both axes; the one-dimensional key the nearest-house score is built on.
    #[must_use]
    pub fn axis_sum(&self) -> f64 {
        self.lat + self.lng
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lat_then_lng() {
        assert_eq!(Coordinate::new(43.45, -80.49).to_string(), "43.45, -80.49");
    }

    #[test]
    fn is_finite_rejects_nan_and_infinity() {
        assert!(Coordinate::new(1.0, 2.0).is_finite());
        assert!(!Coordinate::new(f64::NAN, 2.0).is_finite());
        assert!(!Coordinate::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn serializes_as_lat_lng_object() {
        let json = serde_json::to_value(Coordinate::new(1.5, -2.25)).unwrap();
        assert_eq!(json, serde_json::json!({ "lat": 1.5, "lng": -2.25 }));
    }

    #[test]
    fn deserializes_from_lat_lng_object() {
        let c: Coordinate = serde_json::from_str(r#"{"lat": 43.45, "lng": -80.49}"#).unwrap();
        assert_eq!(c, Coordinate::new(43.45, -80.49));
    }

    #[test]
    fn axis_sum_adds_both_parts() {
        assert_eq!(Coordinate::new(1.0, -3.0).axis_sum(), -2.0);
    }
}
