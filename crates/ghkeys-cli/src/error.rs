use crate::WriteError;

use std::panic::Location;
use std::process::ExitCode;

use error_location::ErrorLocation;
use ghkeys_config::ConfigError;
use thiserror::Error;

/// Exit status used when the run is interrupted (128 + SIGINT)
pub const EXIT_INTERRUPTED: u8 = 130;

/// Errors that abort a run
#[derive(Error, Debug)]
pub enum CliError {
    #[error("No usernames supplied {location}")]
    NoUsers { location: ErrorLocation },

    #[error("HTTP client error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON serialization error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("Interrupted before all users were fetched; nothing was written")]
    Interrupted,
}

impl CliError {
    #[track_caller]
    pub fn no_users() -> Self {
        CliError::NoUsers {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        CliError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        CliError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Interrupted => ExitCode::from(EXIT_INTERRUPTED),
            _ => ExitCode::FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
