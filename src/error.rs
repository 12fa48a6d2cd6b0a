//! Error types and handling for the temperatures service

use thiserror::Error;

/// Message carried by [`TemperatureError::InvalidLocationFormat`]
pub const INVALID_LOCATION_MESSAGE: &str =
    "Must be in the format 01001001 for CEP or -23.55028,-46.63389 for Coordinates";

/// Main error type for the temperatures service
#[derive(Error, Debug)]
pub enum TemperatureError {
    /// The location is neither a CEP nor a coordinate pair
    #[error("{}", INVALID_LOCATION_MESSAGE)]
    InvalidLocationFormat,

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The request to an upstream provider could not be completed
    #[error("{provider} request failed: {source}")]
    Network {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// An upstream provider answered with a non-success status
    #[error("{provider} responded with status {status}: {body}")]
    Upstream {
        provider: &'static str,
        status: u16,
        body: String,
    },

    /// An upstream provider answered with a body we could not decode
    #[error("Failed to parse {provider} response: {message}")]
    Parse {
        provider: &'static str,
        message: String,
    },
}

impl TemperatureError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new network error for `provider`
    #[must_use]
    pub fn network(provider: &'static str, source: reqwest::Error) -> Self {
        Self::Network { provider, source }
    }

    /// Create a new upstream status error, truncating the body
    pub fn upstream<S: AsRef<str>>(provider: &'static str, status: u16, body: S) -> Self {
        Self::Upstream {
            provider,
            status,
            body: truncate_body(body.as_ref()),
        }
    }

    /// Create an upstream status error from a body read that may have failed
    pub fn upstream_response(
        provider: &'static str,
        status: u16,
        body: reqwest::Result<String>,
    ) -> Self {
        match body {
            Ok(body) => Self::upstream(provider, status, body),
            Err(e) => Self::upstream(provider, status, format!("<unreadable body: {e}>")),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(provider: &'static str, message: S) -> Self {
        Self::Parse {
            provider,
            message: message.into(),
        }
    }

    /// True for errors raised by an upstream provider
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Upstream { .. } | Self::Parse { .. }
        )
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
