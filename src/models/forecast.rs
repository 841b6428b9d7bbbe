//! Grid points and hourly forecast schemas for the weather service

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Response of the grid points lookup mapping coordinates to grid metadata
#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

/// Subset of the grid metadata the pipeline consumes
#[derive(Debug, Deserialize)]
pub struct PointsProperties {
    /// URL of the hourly forecast resource for the looked-up coordinates
    #[serde(rename = "forecastHourly")]
    pub forecast_hourly: String,
}

/// Response of the hourly forecast endpoint
#[derive(Debug, Deserialize)]
pub struct HourlyForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    /// Forecast periods in chronological order, as returned by the service
    pub periods: Vec<ForecastPeriod>,
}

/// One discrete time-bounded forecast record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastPeriod {
    /// Period start, carrying the location's UTC offset
    #[serde(rename = "startTime")]
    pub start_time: DateTime<FixedOffset>,
    /// Temperature as a whole number in `temperature_unit`
    pub temperature: i32,
    /// Temperature unit symbol, e.g. "F"
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: String,
    /// Short human-readable conditions description
    #[serde(rename = "shortForecast")]
    pub short_forecast: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_points_response() {
        let fixture = r#"{
            "properties": {
                "gridId": "OKX",
                "gridX": 33,
                "gridY": 35,
                "forecast": "https://api.weather.gov/gridpoints/OKX/33,35/forecast",
                "forecastHourly": "https://api.weather.gov/gridpoints/OKX/33,35/forecast/hourly"
            }
        }"#;

        let points: PointsResponse = serde_json::from_str(fixture).unwrap();
        assert_eq!(
            points.properties.forecast_hourly,
            "https://api.weather.gov/gridpoints/OKX/33,35/forecast/hourly"
        );
    }

    #[test]
    fn test_decode_hourly_period() {
        let fixture = r#"{
            "properties": {
                "periods": [
                    {
                        "number": 1,
                        "name": "",
                        "startTime": "2026-08-07T14:00:00-04:00",
                        "endTime": "2026-08-07T15:00:00-04:00",
                        "temperature": 74,
                        "temperatureUnit": "F",
                        "windSpeed": "10 mph",
                        "shortForecast": "Partly Sunny"
                    }
                ]
            }
        }"#;

        let forecast: HourlyForecastResponse = serde_json::from_str(fixture).unwrap();
        let period = &forecast.properties.periods[0];
        assert_eq!(period.temperature, 74);
        assert_eq!(period.temperature_unit, "F");
        assert_eq!(period.short_forecast, "Partly Sunny");
        assert_eq!(period.start_time.to_rfc3339(), "2026-08-07T14:00:00-04:00");
    }

    #[test]
    fn test_decode_malformed_start_time_is_an_error() {
        let fixture = r#"{
            "properties": {
                "periods": [
                    {
                        "startTime": "next tuesday",
                        "temperature": 74,
                        "temperatureUnit": "F",
                        "shortForecast": "Sunny"
                    }
                ]
            }
        }"#;

        assert!(serde_json::from_str::<HourlyForecastResponse>(fixture).is_err());
    }
}
