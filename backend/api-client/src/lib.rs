//! Typed HTTP client for the meal-planning API.
//!
//! [`ApiClient`] issues requests, decodes the response envelope, and maps
//! failures onto [`ClientError`]. Mutating calls convert domain inputs into
//! request bodies through the [`copy`] layer.

pub mod api_client;
pub mod auth;
pub mod config;
pub mod copy;
pub mod error;
pub mod observability;

#[cfg(test)]
mod tests;

pub use api_client::{ApiClient, extract_query_filter_from_request};
pub use auth::{Authenticator, BearerAuthenticator, CookieAuthenticator, NoAuthentication};
pub use config::ClientConfig;
pub use copy::{copy_type, try_copy_type};
pub use error::client::ClientError;
pub use error::sentinel::{SentinelError, error_from_status_code};

pub use tokio_util::sync::CancellationToken;

pub const API_PATH_PREFIX: [&str; 2] = ["api", "v1"];
pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const USER_AGENT: &str =
    const_format::concatcp!("mealplan-api-client/", env!("CARGO_PKG_VERSION"));
