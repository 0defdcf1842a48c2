use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Shape disagreement between a domain input and its request body.
#[derive(Debug, ThisError)]
pub enum CopyError {
    #[error("Copy Shape Error: {source_type} -> {destination_type}: {message} {location}")]
    Shape {
        source_type: &'static str,
        destination_type: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error(
        "Copy Source Mismatch Error: fixup for {destination_type} expects {expected}, got {actual} {location}"
    )]
    SourceMismatch {
        destination_type: &'static str,
        expected: &'static str,
        actual: &'static str,
        location: ErrorLocation,
    },

    #[error("Copy Narrowing Error: {field} value {value} does not fit the wire type {location}")]
    Narrowing {
        field: &'static str,
        value: String,
        location: ErrorLocation,
    },

    #[error("Copy JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },
}

impl CopyError {
    #[track_caller]
    pub fn narrowing(field: &'static str, value: impl ToString) -> Self {
        CopyError::Narrowing {
            field,
            value: value.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CopyError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        CopyError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
