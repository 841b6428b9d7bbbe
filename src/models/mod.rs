//! Data models for the `localcast` pipeline
//!
//! This module contains the typed schemas for each upstream response shape:
//! - Geo: coordinates and locality metadata resolved from an IP address
//! - Forecast: grid points lookup and hourly forecast periods

pub mod forecast;
pub mod geo;

// Re-export all public types for convenient access
pub use forecast::{ForecastPeriod, ForecastProperties, HourlyForecastResponse, PointsResponse};
pub use geo::GeoCoordinates;
