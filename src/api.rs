//! HTTP client for the pipeline's upstream services
//!
//! Wraps a single explicitly constructed `reqwest` blocking client so the
//! whole pipeline shares one connection pool and tests can point every stage
//! at a mock server through the endpoint configuration. Each request is
//! attempted exactly once; there is no retry or backoff layer.

use crate::config::HttpConfig;
use crate::error::LocalcastError;
use crate::Result;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Shared HTTP client for all pipeline stages
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    /// Create a new client from the HTTP configuration
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());

        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let client = builder
            .build()
            .map_err(|e| LocalcastError::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Issue a GET request and return the response body as text.
    ///
    /// The status line is deliberately not inspected: the IP-echo contract
    /// accepts any body as an answer. JSON callers go through [`get_json`],
    /// which does check it.
    ///
    /// [`get_json`]: ApiClient::get_json
    pub fn get_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;
        let body = response.text()?;
        Ok(body)
    }

    /// Issue a GET request and decode the JSON response body into `T`.
    ///
    /// Fails with `Upstream` on a non-success status (the body is discarded
    /// unread) and with `Decode` when the body does not match `T`.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upstream returned HTTP {} for {}", status, url);
            return Err(LocalcastError::upstream(status.as_u16()));
        }

        let data = response.json::<T>()?;
        Ok(data)
    }
}
