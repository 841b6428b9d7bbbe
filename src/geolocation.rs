//! Geolocation resolution
//!
//! Second stage of the pipeline: maps the public IP address onto geographic
//! coordinates via the configured geolocation service. A lookup that cannot
//! be decoded aborts the pipeline; there is no usable fallback value for a
//! missing coordinate pair.

use crate::api::ApiClient;
use crate::config::LocalcastConfig;
use crate::error::LocalcastError;
use crate::models::GeoCoordinates;
use crate::Result;
use tracing::{debug, info, instrument};

/// Resolve an IP address to geographic coordinates
#[instrument(skip(client, config))]
pub fn resolve_coordinates(
    client: &ApiClient,
    config: &LocalcastConfig,
    ip: &str,
) -> Result<GeoCoordinates> {
    if ip.is_empty() {
        return Err(LocalcastError::validation("IP address cannot be empty"));
    }

    let url = lookup_url(&config.endpoints.geolocation, ip);
    debug!("Geolocation lookup URL: {}", url);

    let geo: GeoCoordinates = client.get_json(&url)?;

    info!(
        "Resolved {} to ({:.4}, {:.4})",
        ip, geo.latitude, geo.longitude
    );
    if let Some(locality) = geo.locality() {
        debug!("Reported locality: {}", locality);
    }

    Ok(geo)
}

/// Build the lookup URL by splicing the IP into the endpoint template
fn lookup_url(template: &str, ip: &str) -> String {
    template.replace("{ip}", &urlencoding::encode(ip))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpConfig;

    #[test]
    fn test_lookup_url_substitution() {
        let url = lookup_url("https://geo.example.com/json/{ip}&position=true", "203.0.113.7");
        assert_eq!(url, "https://geo.example.com/json/203.0.113.7&position=true");
    }

    #[test]
    fn test_lookup_url_encodes_unusual_input() {
        // An echo service gone wrong should not let us build a splittable URL
        let url = lookup_url("https://geo.example.com/json/{ip}", "a b/c");
        assert_eq!(url, "https://geo.example.com/json/a%20b%2Fc");
    }

    #[test]
    fn test_empty_ip_is_rejected_before_any_request() {
        let config = LocalcastConfig::default();
        let client = ApiClient::new(&HttpConfig::default()).unwrap();

        let result = resolve_coordinates(&client, &config, "");
        assert!(matches!(result, Err(LocalcastError::Validation { .. })));
    }
}
