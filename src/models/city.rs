//! City (graph node) type.

use serde::{Deserialize, Serialize};

/// Identity of a node in the graph. Stable small integer supplied with the data.
pub type NodeId = usize;

/// Conventional start node for itineraries.
pub const ORIGIN: NodeId = 0;

/// Mean Earth radius in kilometres, used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A city in the reference data.
///
/// Cities are read-only: the tour construction never creates or modifies
/// them. City 0 is conventionally the itinerary origin.
///
/// # Examples
///
/// ```
/// use greedy_tour::models::City;
///
/// let cdmx = City::new(0, "Ciudad de México", 19.4326, -99.1332);
/// let gdl = City::new(1, "Guadalajara", 20.6597, -103.3496);
/// assert_eq!(cdmx.id(), 0);
/// let d = cdmx.distance_to(&gdl);
/// assert!(d > 450.0 && d < 470.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    id: NodeId,
    name: String,
    lat: f64,
    lng: f64,
}

impl City {
    /// Creates a new city at the given latitude/longitude (degrees).
    pub fn new(id: NodeId, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id,
            name: name.into(),
            lat,
            lng,
        }
    }

    /// City id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle (haversine) distance to another city, in kilometres.
    pub fn distance_to(&self, other: &City) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let dphi = (other.lat - self.lat).to_radians();
        let dlambda = (other.lng - self.lng).to_radians();

        let a = (dphi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_new() {
        let c = City::new(3, "Monterrey", 25.6866, -100.3161);
        assert_eq!(c.id(), 3);
        assert_eq!(c.name(), "Monterrey");
        assert_eq!(c.lat(), 25.6866);
        assert_eq!(c.lng(), -100.3161);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let c = City::new(0, "A", 19.0, -99.0);
        assert!(c.distance_to(&c).abs() < 1e-10);
    }

    #[test]
    fn test_distance_one_degree_of_latitude() {
        let a = City::new(0, "A", 0.0, 0.0);
        let b = City::new(1, "B", 1.0, 0.0);
        // 2πR / 360
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((a.distance_to(&b) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = City::new(0, "A", 19.43, -99.13);
        let b = City::new(1, "B", 21.16, -86.85);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_city_json_shape() {
        let c: City =
            serde_json::from_str(r#"{"id": 2, "name": "Puebla", "lat": 19.04, "lng": -98.2}"#)
                .expect("valid city");
        assert_eq!(c.id(), 2);
        assert_eq!(c.name(), "Puebla");
    }
}
