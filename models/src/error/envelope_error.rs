use crate::{ErrorLocation, ServerReportedError};

use thiserror::Error as ThisError;

/// Why an envelope could not be turned into its payload.
#[derive(Debug, ThisError)]
pub enum EnvelopeError {
    #[error(transparent)]
    Server(#[from] ServerReportedError),

    #[error("Missing Data Error: response carried neither data nor error {location}")]
    MissingData { location: ErrorLocation },
}
