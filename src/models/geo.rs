//! Geographic coordinates resolved from an IP address

use serde::{Deserialize, Serialize};

/// Coordinates and locality metadata returned by the geolocation service.
///
/// Only `latitude` and `longitude` feed the next pipeline stage; the locality
/// fields are decoded for logging and are optional because the service omits
/// them for unlisted addresses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoCoordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Country code (ISO 3166-1 alpha-2)
    #[serde(default)]
    pub country_code: Option<String>,
    /// Country name
    #[serde(default)]
    pub country_name: Option<String>,
    /// City name
    #[serde(default)]
    pub city: Option<String>,
    /// Postal code
    #[serde(default)]
    pub postal: Option<String>,
    /// State or region
    #[serde(default)]
    pub state: Option<String>,
    /// The address the lookup was performed for, echoed back by the service
    #[serde(default, rename = "IPv4")]
    pub ipv4: Option<String>,
}

impl GeoCoordinates {
    /// Format the coordinate pair as fixed-precision decimal degrees
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4},{:.4}", self.latitude, self.longitude)
    }

    /// Human-readable locality for logging, when the service provided one
    #[must_use]
    pub fn locality(&self) -> Option<String> {
        match (&self.city, &self.country_code) {
            (Some(city), Some(country)) => Some(format!("{city}, {country}")),
            (Some(city), None) => Some(city.clone()),
            (None, Some(country)) => Some(country.clone()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_geolocation_response() {
        let fixture = r#"{
            "country_code": "US",
            "country_name": "United States",
            "city": "New York",
            "postal": "10001",
            "latitude": 40.7128,
            "longitude": -74.0060,
            "IPv4": "203.0.113.7",
            "state": "New York"
        }"#;

        let geo: GeoCoordinates = serde_json::from_str(fixture).unwrap();
        assert_eq!(geo.latitude, 40.7128);
        assert_eq!(geo.longitude, -74.0060);
        assert_eq!(geo.city.as_deref(), Some("New York"));
        assert_eq!(geo.ipv4.as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn test_decode_without_locality_metadata() {
        let fixture = r#"{"latitude": 51.5074, "longitude": -0.1278}"#;

        let geo: GeoCoordinates = serde_json::from_str(fixture).unwrap();
        assert_eq!(geo.latitude, 51.5074);
        assert!(geo.city.is_none());
        assert!(geo.locality().is_none());
    }

    #[test]
    fn test_decode_missing_coordinates_is_an_error() {
        let fixture = r#"{"city": "Nowhere"}"#;
        assert!(serde_json::from_str::<GeoCoordinates>(fixture).is_err());
    }

    #[test]
    fn test_format_coordinates() {
        let geo = GeoCoordinates {
            latitude: 40.712_834,
            longitude: -74.006_012,
            country_code: None,
            country_name: None,
            city: None,
            postal: None,
            state: None,
            ipv4: None,
        };
        assert_eq!(geo.format_coordinates(), "40.7128,-74.0060");
    }

    #[test]
    fn test_locality_formatting() {
        let mut geo: GeoCoordinates =
            serde_json::from_str(r#"{"latitude": 0.0, "longitude": 0.0}"#).unwrap();
        geo.city = Some("Boston".to_string());
        geo.country_code = Some("US".to_string());
        assert_eq!(geo.locality().as_deref(), Some("Boston, US"));

        geo.country_code = None;
        assert_eq!(geo.locality().as_deref(), Some("Boston"));
    }
}
