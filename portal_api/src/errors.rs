//! Error types for the API client.

use serde::{Deserialize, Serialize};

/// Errors that can occur when making API requests.
///
/// Each variant is one failure category the transport or the response
/// handler can produce. [`crate::normalize::user_message`] reduces any of
/// them to a single sentence for display.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The server could not be reached at all (connection refused, TLS failure).
    #[error("Failed to fetch: {0}")]
    Unreachable(String),
    /// A network-level failure after the request was issued (timeout, reset, DNS).
    #[error("NetworkError: {0}")]
    Network(String),
    /// The backend answered with a GraphQL-style `errors` list.
    #[error("{}", join_messages(.0))]
    GraphQl(Vec<GraphQlError>),
    /// The API returned a non-success status.
    #[error("Request failed with status {status}: {message}")]
    HttpStatus { status: u16, message: String },
    /// A success response whose body was not valid JSON.
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// The request URL could not be constructed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// A credential could not be encoded as a header value.
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Serialize(String),
    /// The caller cancelled the request before it completed.
    #[error("Request cancelled")]
    Cancelled,
}

/// One entry of a GraphQL-style `errors` array.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
}

impl GraphQlError {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

fn join_messages(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            Error::Unreachable(e.to_string())
        } else if e.is_builder() {
            Error::InvalidUrl(e.to_string())
        } else {
            Error::Network(e.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::InvalidUrl(e.to_string())
    }
}
