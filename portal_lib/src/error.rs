//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding configuration, session storage and input validation failures.
#[derive(Debug)]
pub enum PortalError {
    /// An error from the underlying API client.
    Api(portal_api::Error),
    /// Configuration is missing or malformed.
    Config(String),
    /// The session file could not be read or written.
    Session(std::io::Error),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl PortalError {
    /// One sentence suitable for showing to a user.
    ///
    /// API failures go through the normalizer; local failures are already
    /// phrased for the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(e) => portal_api::user_message(e),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Session(e) => write!(f, "Session storage error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for PortalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Session(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<portal_api::Error> for PortalError {
    fn from(e: portal_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

impl From<std::io::Error> for PortalError {
    fn from(e: std::io::Error) -> Self {
        Self::Session(e)
    }
}
