mod login;
pub use self::login::{LoginRequest, LoginResponse, Role};

/// Parsed JSON body of a successful response. No shape is asserted.
pub type Envelope = serde_json::Value;
