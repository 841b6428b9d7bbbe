//! Hourly forecast retrieval and formatting
//!
//! Third stage of the pipeline, in two steps: the points lookup maps a
//! coordinate pair onto the grid metadata that names its hourly forecast
//! resource, then that resource is fetched and its periods rendered as text.

use crate::api::ApiClient;
use crate::config::LocalcastConfig;
use crate::error::LocalcastError;
use crate::models::{ForecastPeriod, GeoCoordinates, HourlyForecastResponse, PointsResponse};
use crate::Result;
use std::fmt::Write;
use tracing::{debug, info, instrument, warn};

/// How many leading forecast periods are rendered
pub const DISPLAYED_PERIODS: usize = 12;

/// Look up the hourly forecast URL for a coordinate pair (points lookup)
#[instrument(skip(client, config, coordinates))]
pub fn lookup_hourly_endpoint(
    client: &ApiClient,
    config: &LocalcastConfig,
    coordinates: &GeoCoordinates,
) -> Result<String> {
    let url = points_url(&config.endpoints.points, coordinates);
    debug!("Points lookup URL: {}", url);

    let points: PointsResponse = client.get_json(&url)?;

    info!(
        "Hourly forecast endpoint for {}: {}",
        coordinates.format_coordinates(),
        points.properties.forecast_hourly
    );
    Ok(points.properties.forecast_hourly)
}

/// Fetch the hourly forecast periods from the endpoint the points lookup named
#[instrument(skip(client))]
pub fn fetch_hourly_periods(client: &ApiClient, url: &str) -> Result<Vec<ForecastPeriod>> {
    let forecast: HourlyForecastResponse = client.get_json(url)?;
    let periods = forecast.properties.periods;

    if periods.is_empty() {
        warn!("Forecast endpoint returned an empty period list");
        return Err(LocalcastError::NoData);
    }

    info!("Fetched {} forecast periods", periods.len());
    Ok(periods)
}

/// Render the leading forecast periods as human-readable text.
///
/// One block per period, in input order, at most [`DISPLAYED_PERIODS`] of
/// them. Timestamps are rendered in the UTC offset each period carries.
#[must_use]
pub fn format_periods(periods: &[ForecastPeriod]) -> String {
    let mut output = String::new();
    for period in periods.iter().take(DISPLAYED_PERIODS) {
        let _ = writeln!(
            output,
            "Time: {}\nTemperature: {}\u{00b0}{}\nForecast: {}\n",
            period.start_time.format("%a %b %e %H:%M (UTC%:z)"),
            period.temperature,
            period.temperature_unit,
            period.short_forecast
        );
    }
    output
}

/// Build the points URL by splicing fixed-precision coordinates into the
/// endpoint template
fn points_url(template: &str, coordinates: &GeoCoordinates) -> String {
    template
        .replace("{lat}", &format!("{:.4}", coordinates.latitude))
        .replace("{lon}", &format!("{:.4}", coordinates.longitude))
}
