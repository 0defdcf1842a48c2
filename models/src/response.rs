//! The generic wire envelope.
//!
//! List endpoints answer `{data: [...], pagination: {...}}`, single-item
//! endpoints `{data: {...}}`, and either may answer `{error: {code, message}}`
//! instead. When a malformed payload carries both, the error wins.

use crate::error::envelope_error::EnvelopeError;
use crate::error::server_error::ServerReportedError;
use crate::pagination::{Pagination, QueryFilteredResult};
use crate::query_filter::QueryFilter;
use crate::ErrorLocation;

use serde::{Deserialize, Serialize};

/// Error object embedded in an envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn to_error(&self) -> ServerReportedError {
        ServerReportedError {
            code: self.code.clone(),
            message: self.message.clone(),
        }
    }
}

/// Opaque metadata the server attaches to every response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseDetails {
    #[serde(rename = "currentHouseholdID")]
    pub current_household_id: String,
    #[serde(rename = "traceID")]
    pub trace_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    #[serde(default)]
    pub details: ResponseDetails,
}

impl<T> ApiResponse<T> {
    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            pagination: None,
            error: None,
            details: ResponseDetails::default(),
        }
    }

    pub fn with_error(error: ApiError) -> Self {
        Self {
            data: None,
            pagination: None,
            error: Some(error),
            details: ResponseDetails::default(),
        }
    }

    /// `None` when the server reported no error.
    ///
    /// Check this before looking at `data`: a failed response carries no
    /// meaningful payload.
    pub fn as_error(&self) -> Option<ServerReportedError> {
        self.error.as_ref().map(ApiError::to_error)
    }

    /// The payload, unless the server reported an error or sent nothing.
    #[track_caller]
    pub fn into_data(self) -> Result<T, EnvelopeError> {
        if let Some(error) = self.as_error() {
            return Err(EnvelopeError::Server(error));
        }

        self.data.ok_or_else(|| EnvelopeError::MissingData {
            location: ErrorLocation::caller(),
        })
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn with_list(data: Vec<T>, pagination: Pagination) -> Self {
        Self {
            data: Some(data),
            pagination: Some(pagination),
            error: None,
            details: ResponseDetails::default(),
        }
    }

    /// The page of records and its pagination.
    ///
    /// A missing `data` is an empty page; missing pagination is projected
    /// from the filter that produced the request.
    pub fn into_list(
        self,
        filter: Option<&QueryFilter>,
    ) -> Result<QueryFilteredResult<T>, EnvelopeError> {
        if let Some(error) = self.as_error() {
            return Err(EnvelopeError::Server(error));
        }

        let pagination = match self.pagination {
            Some(pagination) => pagination,
            None => QueryFilteredResult::<T>::empty(filter).pagination,
        };

        Ok(QueryFilteredResult::new(
            self.data.unwrap_or_default(),
            pagination,
        ))
    }
}
