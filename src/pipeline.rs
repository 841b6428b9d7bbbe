//! The forecast pipeline
//!
//! Strictly sequential composition of the three stages: discover the public
//! IP, resolve it to coordinates, then fetch and render the hourly forecast.
//! Each stage blocks until its upstream answers, and the first failure aborts
//! the run; no stage ever proceeds on degraded data.

use crate::api::ApiClient;
use crate::config::LocalcastConfig;
use crate::{forecast, geolocation, ip_resolver};
use crate::Result;
use tracing::instrument;

/// Run the full pipeline and return the rendered forecast text
#[instrument(skip(config))]
pub fn run(config: &LocalcastConfig) -> Result<String> {
    let client = ApiClient::new(&config.http)?;

    let ip = ip_resolver::resolve_public_ip(&client, config)?;
    let coordinates = geolocation::resolve_coordinates(&client, config, &ip)?;
    let hourly_url = forecast::lookup_hourly_endpoint(&client, config, &coordinates)?;
    let periods = forecast::fetch_hourly_periods(&client, &hourly_url)?;

    Ok(forecast::format_periods(&periods))
}
