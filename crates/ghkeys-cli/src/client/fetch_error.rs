use thiserror::Error;

/// Why keys for a single user could not be fetched.
///
/// These errors are rendered into the output next to the user they belong
/// to, so they carry only the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("User not found")]
    NotFound,

    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("{message}")]
    Network { message: String },

    #[error("Malformed response: {message}")]
    Malformed { message: String },
}

impl FetchError {
    /// Convert a transport error from sending the request
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return FetchError::Network {
                message: String::from("Request timed out"),
            };
        }

        FetchError::Network {
            message: err.to_string(),
        }
    }

    /// Convert an error from reading the response body
    pub fn from_body(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_request() || err.is_connect() {
            return FetchError::from_reqwest(err);
        }

        FetchError::Malformed {
            message: err.to_string(),
        }
    }
}
