//! Data structures for the meal-planning API.
//!
//! This crate contains the shapes that cross the wire and the hand-written
//! domain types callers work with. Nothing here performs I/O.
//!
//! ## Layout
//!
//! - [`query_filter`]: page/sort/time-range filter and its query-string codec
//! - [`pagination`]: server accounting for list responses
//! - [`response`]: the generic `{data, pagination, error, details}` envelope
//! - [`types`]: hand-written domain types and creation/update inputs
//! - [`generated`]: request bodies as the API schema defines them
//!
//! Domain inputs and generated bodies evolve independently; `api-client`
//! bridges the two with its copy layer.

pub mod error;
#[cfg(any(test, feature = "fakes"))]
pub mod fakes;
pub mod generated;
pub mod pagination;
pub mod query_filter;
pub mod response;
pub mod types;

pub use common::ErrorLocation;
pub use error::envelope_error::EnvelopeError;
pub use error::model_error::ModelError;
pub use error::server_error::ServerReportedError;
pub use pagination::{Pagination, QueryFilteredResult};
pub use query_filter::builder::QueryFilterBuilder;
pub use query_filter::params::QueryParams;
pub use query_filter::{QueryFilter, SortOrder};
pub use response::{ApiError, ApiResponse, ResponseDetails};

#[cfg(test)]
mod tests;
