//! HTTP client for the academic portal backend.

use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    query::Query,
    request::RequestDescriptor,
    response::handle_response,
    types::Envelope,
    AuthContext, CancelToken, Error,
};

/// Default request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Base URLs of the backend services.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Root of the academic API (admin, teacher, student, calendar resources).
    pub academic_api: String,
    /// Root of the login service.
    pub teacher_login_api: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Points every service at one root. Used for testing with wiremock.
    pub fn single(base_url: &str) -> Self {
        Self {
            academic_api: base_url.to_string(),
            teacher_login_api: base_url.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Which configured root a resource lives under.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Base {
    Academic,
    TeacherLogin,
}

/// HTTP client for the academic portal backend.
///
/// Holds the read-only [`AuthContext`] it was built with; every request
/// reads its headers from there. Every call runs under a [`CancelToken`]
/// and resolves to [`Error::Cancelled`] once that token fires.
pub struct Client {
    http: reqwest::Client,
    config: ApiConfig,
    auth: AuthContext,
    cancel: CancelToken,
}

impl Client {
    /// Creates a client for the given services and credentials.
    pub fn new(config: ApiConfig, auth: AuthContext) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::from(e)
            })?;
        Ok(Self {
            http,
            config,
            auth,
            cancel: CancelToken::new(),
        })
    }

    /// Creates an anonymous client with every service at `base_url`.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ApiConfig::single(base_url), AuthContext::anonymous())
    }

    /// Replaces the token the service methods run under.
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Replaces the credentials, e.g. after a login in the same process.
    pub fn with_auth(mut self, auth: AuthContext) -> Self {
        self.set_auth(auth);
        self
    }

    pub fn set_auth(&mut self, auth: AuthContext) {
        self.auth = auth;
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) fn url(
        &self,
        base: Base,
        segments: &[&str],
        query: Option<&impl Query>,
    ) -> Result<Url, Error> {
        let root = match base {
            Base::Academic => &self.config.academic_api,
            Base::TeacherLogin => &self.config.teacher_login_api,
        };
        let mut url = Url::parse(root).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", root, e);
            Error::from(e)
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot carry a path: {}", root);
                Error::InvalidUrl(root.to_string())
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    /// Builds a GET descriptor with the read-only auth headers.
    pub(crate) fn get_request(&self, url: Url) -> RequestDescriptor {
        RequestDescriptor::get(url, self.auth.auth_header())
    }

    /// Builds a POST descriptor with the mutating auth headers.
    pub(crate) fn post_request<B: Serialize + ?Sized>(
        &self,
        url: Url,
        payload: &B,
    ) -> Result<RequestDescriptor, Error> {
        RequestDescriptor::post(url, self.auth.auth_header_to_post(), payload)
    }

    /// Sends `request` under the client's own cancellation token.
    pub async fn execute(&self, request: RequestDescriptor) -> Result<Envelope, Error> {
        self.execute_with(request, &self.cancel).await
    }

    /// Sends `request` and passes the response through [`handle_response`].
    ///
    /// Resolves to [`Error::Cancelled`] if `cancel` fires first; the in-flight
    /// request is dropped and its result is never delivered.
    pub async fn execute_with(
        &self,
        request: RequestDescriptor,
        cancel: &CancelToken,
    ) -> Result<Envelope, Error> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        tracing::debug!("{} {}", request.method(), request.url());

        let call = async {
            let resp = request.into_request(&self.http).send().await.map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::from(e)
            })?;
            let status = resp.status().as_u16();
            let body = resp.text().await.map_err(|e| {
                tracing::error!("Failed to read response body: {}", e);
                Error::from(e)
            })?;
            handle_response(status, &body)
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Request cancelled by caller");
                Err(Error::Cancelled)
            }
            result = call => result,
        }
    }

    /// Sends `request` and deserializes the envelope into `T`.
    pub(crate) async fn execute_as<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> Result<T, Error> {
        let envelope = self.execute(request).await?;
        serde_json::from_value(envelope).map_err(|e| {
            tracing::error!("Failed to parse resource: {}", e);
            Error::Parse(e.to_string())
        })
    }
}
