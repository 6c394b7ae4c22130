mod auth;
mod cancel;
mod client;
mod errors;
pub mod normalize;
mod query;
mod request;
mod response;
mod services;
pub mod types;
pub use self::auth::AuthContext;
pub use self::cancel::{CancelToken, DropGuard};
pub use self::client::{ApiConfig, Client};
pub use self::errors::{Error, GraphQlError};
pub use self::normalize::user_message;
pub use self::query::{AccessModuleQuery, Query};
pub use self::request::{Method, RequestDescriptor};
pub use self::response::handle_response;
pub use self::types::{Envelope, LoginRequest, LoginResponse, Role};
