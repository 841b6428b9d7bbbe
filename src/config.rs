//! Configuration management for the `localcast` pipeline
//!
//! Handles loading configuration from files and environment variables, and
//! provides validation for all configuration settings. Every upstream endpoint
//! the pipeline talks to is an override point here, so tests (and provider
//! changes) never require code edits.

use crate::LocalcastError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `localcast` pipeline
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocalcastConfig {
    /// Upstream service endpoints
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Upstream service endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// IP-echo service returning the caller's public IP as plain text
    #[serde(default = "default_ip_echo_url")]
    pub ip_echo: String,
    /// Geolocation lookup URL template; `{ip}` is replaced with the address
    #[serde(default = "default_geolocation_url")]
    pub geolocation: String,
    /// Grid points lookup URL template; `{lat}`/`{lon}` are replaced with
    /// the resolved coordinates
    #[serde(default = "default_points_url")]
    pub points: String,
}

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User agent sent on every request (the weather service rejects
    /// agent-less clients)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds; absent means no timeout
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_ip_echo_url() -> String {
    "https://api.ipify.org".to_string()
}

fn default_geolocation_url() -> String {
    "https://geolocation-db.com/json/{ip}&position=true".to_string()
}

fn default_points_url() -> String {
    "https://api.weather.gov/points/{lat},{lon}".to_string()
}

fn default_user_agent() -> String {
    format!("localcast/{}", env!("CARGO_PKG_VERSION"))
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            ip_echo: default_ip_echo_url(),
            geolocation: default_geolocation_url(),
            points: default_points_url(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_seconds: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LocalcastConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path()
                .filter(|path| path.exists())
                .unwrap_or_else(|| PathBuf::from("config/default.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with LOCALCAST_ prefix
        builder = builder.add_source(
            Environment::with_prefix("LOCALCAST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: LocalcastConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("localcast").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_endpoints()?;
        self.validate_http()?;
        self.validate_logging()?;
        Ok(())
    }

    /// Validate upstream endpoint URLs and templates
    fn validate_endpoints(&self) -> Result<()> {
        for (name, url) in [
            ("ip_echo", &self.endpoints.ip_echo),
            ("geolocation", &self.endpoints.geolocation),
            ("points", &self.endpoints.points),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(LocalcastError::config(format!(
                    "Endpoint '{name}' must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        if !self.endpoints.geolocation.contains("{ip}") {
            return Err(LocalcastError::config(
                "Geolocation endpoint template must contain an '{ip}' placeholder",
            )
            .into());
        }

        if !self.endpoints.points.contains("{lat}") || !self.endpoints.points.contains("{lon}") {
            return Err(LocalcastError::config(
                "Points endpoint template must contain '{lat}' and '{lon}' placeholders",
            )
            .into());
        }

        Ok(())
    }

    /// Validate HTTP client settings
    fn validate_http(&self) -> Result<()> {
        if self.http.user_agent.is_empty() {
            return Err(LocalcastError::config("HTTP user agent cannot be empty").into());
        }

        if let Some(timeout) = self.http.timeout_seconds {
            if timeout == 0 || timeout > 300 {
                return Err(LocalcastError::config(
                    "HTTP timeout must be between 1 and 300 seconds",
                )
                .into());
            }
        }

        Ok(())
    }

    /// Validate logging settings
    fn validate_logging(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(LocalcastError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(LocalcastError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
