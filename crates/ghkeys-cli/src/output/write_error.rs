use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors committing formatted output to its destination
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("File {path} already exists. Use --force to overwrite. {location}")]
    AlreadyExists {
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error("Failed to write {target}: {source} {location}")]
    Io {
        target: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },
}

impl WriteError {
    #[track_caller]
    pub fn already_exists(path: &Path) -> Self {
        WriteError::AlreadyExists {
            path: path.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap an I/O failure on `target` (a path or `<stdout>`)
    #[track_caller]
    pub fn io(target: impl Into<String>, source: std::io::Error) -> Self {
        WriteError::Io {
            target: target.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn io_at(path: &Path, source: std::io::Error) -> Self {
        Self::io(path.display().to_string(), source)
    }
}

pub type Result<T> = std::result::Result<T, WriteError>;
