use crate::error::sentinel::{SentinelError, error_from_status_code};

use common::{ErrorLocation, HttpStatusCode};
use models::{EnvelopeError, ModelError, ServerReportedError};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ClientError {
    #[error("Nil Input Error: {operation} was given no input {location}")]
    NilInput {
        operation: String,
        location: ErrorLocation,
    },

    #[error("Invalid ID Error: required ID {name} is empty {location}")]
    InvalidId {
        name: String,
        location: ErrorLocation,
    },

    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Request Build Error: {message} {location}")]
    RequestBuild {
        message: String,
        location: ErrorLocation,
    },

    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("Cancelled Error: request was cancelled {location}")]
    Cancelled { location: ErrorLocation },

    #[error("Decode Error: HTTP {status_code}: {message} {location}")]
    Decode {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("API Error: HTTP {status_code}: {code}: {message} {location}")]
    Api {
        status_code: HttpStatusCode,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Status Error: HTTP {status_code}: {sentinel} {location}")]
    Status {
        status_code: HttpStatusCode,
        sentinel: SentinelError,
        location: ErrorLocation,
    },

    #[error("Unexpected Status Error: HTTP {status_code} {location}")]
    UnexpectedStatus {
        status_code: HttpStatusCode,
        location: ErrorLocation,
    },
}

impl ClientError {
    #[track_caller]
    pub fn nil_input(operation: impl Into<String>) -> Self {
        ClientError::NilInput {
            operation: operation.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_id(name: impl Into<String>) -> Self {
        ClientError::InvalidId {
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cancelled() -> Self {
        ClientError::Cancelled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(status_code: HttpStatusCode, message: impl Into<String>) -> Self {
        ClientError::Decode {
            status_code,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api(status_code: HttpStatusCode, error: ServerReportedError) -> Self {
        ClientError::Api {
            status_code,
            code: error.code,
            message: error.message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Map a failed envelope unwrap onto the client's taxonomy.
    #[track_caller]
    pub fn from_envelope(status_code: HttpStatusCode, error: EnvelopeError) -> Self {
        match error {
            EnvelopeError::Server(error) => ClientError::api(status_code, error),
            EnvelopeError::MissingData { .. } => {
                ClientError::decode(status_code, "response carried neither data nor error")
            }
        }
    }

    /// Status-derived classification for `Status` and `Api` errors.
    pub fn sentinel(&self) -> Option<SentinelError> {
        match self {
            ClientError::Status { sentinel, .. } => Some(*sentinel),
            ClientError::Api { status_code, .. } => error_from_status_code(status_code.as_u16()),
            _ => None,
        }
    }

    pub fn status_code(&self) -> Option<HttpStatusCode> {
        match self {
            ClientError::Decode { status_code, .. }
            | ClientError::Api { status_code, .. }
            | ClientError::Status { status_code, .. }
            | ClientError::UnexpectedStatus { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.sentinel() == Some(SentinelError::NotFound)
    }

    /// Raised locally, before anything reached the network.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ClientError::NilInput { .. }
                | ClientError::InvalidId { .. }
                | ClientError::Validation { .. }
        )
    }
}

impl From<url::ParseError> for ClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if error.is_builder() {
            return ClientError::RequestBuild {
                message: error.to_string(),
                location,
            };
        }

        ClientError::Transport {
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            message: error.to_string(),
            location,
        }
    }
}

impl From<ModelError> for ClientError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        let message = match error {
            ModelError::Validation { message, .. } => message,
        };
        ClientError::Validation {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
