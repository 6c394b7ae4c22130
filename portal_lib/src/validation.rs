use crate::error::PortalError;

pub const MAX_ID_LENGTH: usize = 64;
pub const MAX_PAYLOAD_BYTES: usize = 64 * 1024;
pub const MAX_USERNAME_LENGTH: usize = 100;
pub const MIN_YEAR: u16 = 1900;
pub const MAX_YEAR: u16 = 2200;

/// Validate an entity ID (teacher, student, form): trim, 1-64 chars of
/// letters, digits, `_` or `-`.
pub fn validate_id(kind: &str, input: &str) -> Result<String, PortalError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PortalError::InvalidInput(format!("{} id is empty", kind)));
    }
    if trimmed.len() > MAX_ID_LENGTH {
        return Err(PortalError::InvalidInput(format!(
            "{} id exceeds maximum length of {} characters",
            kind, MAX_ID_LENGTH
        )));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(PortalError::InvalidInput(format!(
            "{} id '{}' may only contain letters, digits, '_' and '-'",
            kind, trimmed
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate a calendar year.
pub fn validate_year(year: u16) -> Result<u16, PortalError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(PortalError::InvalidInput(format!(
            "year {} is outside {}-{}",
            year, MIN_YEAR, MAX_YEAR
        )))
    }
}

/// Validate a login name: trim, strip control characters, enforce length.
pub fn validate_username(input: &str) -> Result<String, PortalError> {
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(PortalError::InvalidInput("username is empty".to_string()));
    }
    if sanitized.len() > MAX_USERNAME_LENGTH {
        return Err(PortalError::InvalidInput(format!(
            "username exceeds maximum length of {} bytes",
            MAX_USERNAME_LENGTH
        )));
    }
    Ok(sanitized)
}

/// Parse a request payload supplied as JSON text. Must be a JSON object.
pub fn parse_payload(input: &str) -> Result<serde_json::Value, PortalError> {
    if input.len() > MAX_PAYLOAD_BYTES {
        return Err(PortalError::InvalidInput(format!(
            "payload exceeds maximum size of {} bytes",
            MAX_PAYLOAD_BYTES
        )));
    }
    let value: serde_json::Value = serde_json::from_str(input)
        .map_err(|e| PortalError::InvalidInput(format!("payload is not valid JSON: {}", e)))?;
    if !value.is_object() {
        return Err(PortalError::InvalidInput(
            "payload must be a JSON object".to_string(),
        ));
    }
    Ok(value)
}
