//! Library layer for the academic portal: configuration, stored credentials,
//! input validation and a session-aware client.
//!
//! Wraps `portal_api` so callers only supply plain IDs and payloads; the
//! stored session becomes the request credentials automatically.

pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod validation;

pub use portal_api;
pub use portal_api::types;
pub use portal_api::{user_message, AccessModuleQuery, CancelToken, Envelope};

pub use client::PortalClient;
pub use config::PortalConfig;
pub use error::PortalError;
pub use session::{Session, SessionStore};
