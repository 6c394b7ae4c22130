//! Authentication headers derived from stored credentials.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::Error;

/// Read-only snapshot of the caller's credentials.
///
/// Built once from the stored session and handed to the [`crate::Client`];
/// header builders read it at call time and never mutate it.
#[derive(Clone, Debug, Default)]
pub struct AuthContext {
    authorization: Option<HeaderValue>,
}

impl AuthContext {
    /// A context with no credentials. Requests go out without `Authorization`.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A context carrying a bearer token.
    pub fn with_bearer(token: &str) -> Result<Self, Error> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim())).map_err(|e| {
            tracing::error!("Stored token is not a valid header value: {}", e);
            Error::InvalidHeader(e.to_string())
        })?;
        value.set_sensitive(true);
        Ok(Self {
            authorization: Some(value),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.authorization.is_some()
    }

    /// Headers for read-only calls.
    pub fn auth_header(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(value) = &self.authorization {
            headers.insert(AUTHORIZATION, value.clone());
        }
        headers
    }

    /// Headers for mutating calls: [`Self::auth_header`] plus a JSON content type.
    pub fn auth_header_to_post(&self) -> HeaderMap {
        let mut headers = self.auth_header();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}
