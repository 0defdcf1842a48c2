use thiserror::Error as ThisError;

/// The fixed set of errors derived from a response status alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ThisError)]
pub enum SentinelError {
    #[error("not found")]
    NotFound,

    #[error("invalid input")]
    InvalidInput,

    #[error("unauthorized")]
    Unauthorized,

    #[error("internal server error")]
    Internal,
}

/// Classify a status code. Pure lookup; never looks at a body.
pub fn error_from_status_code(code: u16) -> Option<SentinelError> {
    match code {
        404 => Some(SentinelError::NotFound),
        400 => Some(SentinelError::InvalidInput),
        401 | 403 => Some(SentinelError::Unauthorized),
        500 => Some(SentinelError::Internal),
        _ => None,
    }
}
