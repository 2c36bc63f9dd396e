use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config directory not found")]
    NoConfigDir,
}

impl ConfigError {
    /// Create a fetch settings error
    #[track_caller]
    pub fn fetch<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Fetch",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an output settings error
    #[track_caller]
    pub fn output<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Output",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
