use thiserror::Error as ThisError;

/// An error the server reported inside a response envelope.
///
/// Rendered as `"{code}: {message}"`.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{code}: {message}")]
pub struct ServerReportedError {
    pub code: String,
    pub message: String,
}
