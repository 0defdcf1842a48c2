use api_client::ClientError;
use api_client::error::config::ConfigError;
use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Errors surfaced by the command-line front end.
///
/// Library errors are flattened to their message; the location recorded is
/// where the CLI received them.
#[derive(Debug, Error)]
pub enum MealplanError {
    /// Error from this app
    #[error("Mealplan Error: {message} {location}")]
    Mealplan {
        message: String,
        location: ErrorLocation,
    },

    /// Configuration could not be loaded or credentials resolved
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// A request to the API failed
    #[error("Client Error: {message} {location}")]
    Client {
        message: String,
        location: ErrorLocation,
    },

    /// A response could not be rendered
    #[error("Output Error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },
}

impl From<ConfigError> for MealplanError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        MealplanError::Config {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for MealplanError {
    #[track_caller]
    fn from(error: ClientError) -> Self {
        MealplanError::Client {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for MealplanError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        MealplanError::Output {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
