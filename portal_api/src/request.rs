//! Request descriptors: the method, headers and body of one outbound call.

use reqwest::header::HeaderMap;
use serde::Serialize;
use url::Url;

use crate::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Method::Get => "GET",
                Method::Post => "POST",
            }
        )
    }
}

/// Description of one HTTP call. Built fresh per call and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct RequestDescriptor {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<String>,
}

impl RequestDescriptor {
    /// A GET with the given headers and no body.
    pub fn get(url: Url, headers: HeaderMap) -> Self {
        Self {
            method: Method::Get,
            url,
            headers,
            body: None,
        }
    }

    /// A POST whose body is the JSON serialization of `payload`.
    ///
    /// `headers` are stored exactly as given.
    pub fn post<B: Serialize + ?Sized>(
        url: Url,
        headers: HeaderMap,
        payload: &B,
    ) -> Result<Self, Error> {
        let body = serde_json::to_string(payload).map_err(|e| {
            tracing::error!("Failed to serialize request body: {}", e);
            Error::Serialize(e.to_string())
        })?;
        Ok(Self {
            method: Method::Post,
            url,
            headers,
            body: Some(body),
        })
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub(crate) fn into_request(self, client: &reqwest::Client) -> reqwest::RequestBuilder {
        let builder = client
            .request(self.method.into(), self.url)
            .headers(self.headers);
        match self.body {
            Some(body) => builder.body(body),
            None => builder,
        }
    }
}
