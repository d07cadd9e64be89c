//! Transport-level error types for the ResRobot client.

use std::fmt;

/// Errors from fetching trips: network, auth, or an unusable envelope.
#[derive(Debug)]
pub enum TransportError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status or error code
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// Rate limited or quota exhausted
    RateLimited,

    /// Invalid access key or unauthorized
    Unauthorized,

    /// Client is missing required configuration
    NotConfigured(String),

    /// Recorded mock data could not be loaded
    MockData(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Http(e) => write!(f, "HTTP error: {e}"),
            TransportError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            TransportError::Api {
                status,
                code,
                message,
            } => {
                write!(f, "API error {status}")?;
                if let Some(code) = code {
                    write!(f, " [{code}]")?;
                }
                write!(f, ": {message}")
            }
            TransportError::RateLimited => write!(f, "rate limited by ResRobot API"),
            TransportError::Unauthorized => write!(f, "unauthorized (invalid access key)"),
            TransportError::NotConfigured(msg) => write!(f, "not configured: {msg}"),
            TransportError::MockData(msg) => write!(f, "mock data error: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Http(err)
    }
}
