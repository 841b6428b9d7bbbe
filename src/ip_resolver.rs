//! Public IP discovery
//!
//! First stage of the pipeline: asks an IP-echo service which address the
//! outside world sees this host as. The service answers with the bare address
//! in the response body.

use crate::api::ApiClient;
use crate::config::LocalcastConfig;
use crate::Result;
use tracing::{debug, info};

/// Resolve the caller's public IP address.
///
/// The body is trimmed of surrounding whitespace and otherwise taken at face
/// value; the echo service speaks plain text, not JSON, and there is no
/// status or format contract to check against.
pub fn resolve_public_ip(client: &ApiClient, config: &LocalcastConfig) -> Result<String> {
    debug!("Requesting public IP from {}", config.endpoints.ip_echo);

    let body = client.get_text(&config.endpoints.ip_echo)?;
    let ip = body.trim().to_string();

    info!("Resolved public IP: {}", ip);
    Ok(ip)
}
