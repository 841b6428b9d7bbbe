//! `localcast` - hourly weather for wherever your public IP says you are
//!
//! This library implements a single-pass pipeline: discover the public IP,
//! resolve it to coordinates, resolve those to the matching forecast-grid
//! endpoint, then fetch and render the hourly forecast. Every upstream
//! endpoint is configurable, so the whole pipeline can run against mock
//! services in tests.

pub mod api;
pub mod config;
pub mod error;
pub mod forecast;
pub mod geolocation;
pub mod ip_resolver;
pub mod logging;
pub mod models;
pub mod pipeline;

// Re-export core types for public API
pub use api::ApiClient;
pub use config::LocalcastConfig;
pub use error::LocalcastError;
pub use models::{ForecastPeriod, GeoCoordinates};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, LocalcastError>;
