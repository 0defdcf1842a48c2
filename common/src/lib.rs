//! Shared primitives for the meal-planning API client.
//!
//! Small, dependency-light building blocks used by every other crate in the
//! workspace:
//!
//! - **models**: wire and domain data structures, query filters, envelopes
//! - **api-client**: HTTP client, error taxonomy, copy layer
//! - **mealplan**: command-line front end
//!
//! Nothing in here performs I/O.

pub mod error;
pub mod http_status;
pub mod redacted_secret;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;

#[cfg(test)]
mod tests;
