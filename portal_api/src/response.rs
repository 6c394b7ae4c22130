//! The shared response handler every call passes through.

use crate::{types::Envelope, Error, GraphQlError};

/// Reduces a status and raw body to the parsed envelope or a typed [`Error`].
///
/// A body carrying a non-empty GraphQL-style `errors` list is an error at any
/// status. Non-success statuses become [`Error::HttpStatus`] with the body's
/// `message` field when it has one. An empty success body is `null`.
pub fn handle_response(status: u16, body: &str) -> Result<Envelope, Error> {
    let parsed = serde_json::from_str::<Envelope>(body);

    if let Ok(value) = &parsed {
        if let Some(errors) = graphql_errors(value) {
            tracing::error!("Backend returned {} GraphQL error(s)", errors.len());
            return Err(Error::GraphQl(errors));
        }
    }

    if !(200..300).contains(&status) {
        let message = parsed
            .as_ref()
            .ok()
            .and_then(|v| v.get("message"))
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .or_else(|| {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| truncate_body(body));
        tracing::error!(
            "Request failed with status {}: {}",
            status,
            truncate_body(body)
        );
        return Err(Error::HttpStatus { status, message });
    }

    if body.trim().is_empty() {
        return Ok(Envelope::Null);
    }

    parsed.map_err(|e| {
        tracing::error!(
            "Failed to parse resource: {} | body: {}",
            e,
            truncate_body(body)
        );
        Error::Parse(e.to_string())
    })
}

fn graphql_errors(value: &Envelope) -> Option<Vec<GraphQlError>> {
    let errors = serde_json::from_value::<Vec<GraphQlError>>(value.get("errors")?.clone()).ok()?;
    if errors.is_empty() {
        None
    } else {
        Some(errors)
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
