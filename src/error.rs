//! Error types and handling for the `localcast` pipeline

use thiserror::Error;

/// Main error type for the `localcast` pipeline
#[derive(Error, Debug)]
pub enum LocalcastError {
    /// Transport or connection failure talking to an upstream service
    #[error("Network error: {message}")]
    Network { message: String },

    /// Non-success HTTP status from an upstream service
    #[error("Upstream service returned HTTP {status}")]
    Upstream { status: u16 },

    /// Response body did not parse as the expected JSON shape
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// Well-formed response carrying an empty forecast period list
    #[error("Upstream returned no forecast periods")]
    NoData,

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl LocalcastError {
    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new upstream error carrying the HTTP status code
    pub fn upstream(status: u16) -> Self {
        Self::Upstream { status }
    }

    /// Create a new decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            LocalcastError::Network { .. } => {
                "Unable to reach the upstream services. Please check your internet connection."
                    .to_string()
            }
            LocalcastError::Upstream { status } => {
                format!("An upstream service answered with HTTP {status}. Please try again later.")
            }
            LocalcastError::Decode { .. } => {
                "An upstream service sent a response that could not be understood.".to_string()
            }
            LocalcastError::NoData => {
                "The weather service returned no forecast periods for your location.".to_string()
            }
            LocalcastError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            LocalcastError::Config { message } => {
                format!("Configuration error: {message}")
            }
        }
    }
}

// reqwest folds transport and body-decode failures into one error type;
// split them back into the pipeline's Network/Decode kinds.
impl From<reqwest::Error> for LocalcastError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode {
                message: err.to_string(),
            }
        } else {
            Self::Network {
                message: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let network_err = LocalcastError::network("connection refused");
        assert!(matches!(network_err, LocalcastError::Network { .. }));

        let upstream_err = LocalcastError::upstream(503);
        assert!(matches!(
            upstream_err,
            LocalcastError::Upstream { status: 503 }
        ));

        let decode_err = LocalcastError::decode("missing field `latitude`");
        assert!(matches!(decode_err, LocalcastError::Decode { .. }));

        let validation_err = LocalcastError::validation("IP address cannot be empty");
        assert!(matches!(validation_err, LocalcastError::Validation { .. }));
    }

    #[test]
    fn test_upstream_display_carries_status() {
        let err = LocalcastError::upstream(500);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_user_messages() {
        let network_err = LocalcastError::network("test");
        assert!(network_err.user_message().contains("internet connection"));

        let upstream_err = LocalcastError::upstream(502);
        assert!(upstream_err.user_message().contains("502"));

        let no_data_err = LocalcastError::NoData;
        assert!(no_data_err.user_message().contains("no forecast periods"));

        let validation_err = LocalcastError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }
}
