use crate::FetchError;

/// Outcome of fetching one requested username.
///
/// Built once when its fetch completes and read-only afterwards. A failed
/// fetch carries no keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserKeyResult {
    user: String,
    outcome: Result<Vec<String>, FetchError>,
}

impl UserKeyResult {
    pub fn new(user: impl Into<String>, outcome: Result<Vec<String>, FetchError>) -> Self {
        Self {
            user: user.into(),
            outcome,
        }
    }

    pub fn success(user: impl Into<String>, keys: Vec<String>) -> Self {
        Self::new(user, Ok(keys))
    }

    pub fn failure(user: impl Into<String>, error: FetchError) -> Self {
        Self::new(user, Err(error))
    }

    /// The username exactly as requested
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Key lines in remote order; empty on failure
    pub fn keys(&self) -> &[String] {
        match &self.outcome {
            Ok(keys) => keys,
            Err(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.outcome.as_ref().err()
    }

    pub fn is_failure(&self) -> bool {
        self.outcome.is_err()
    }
}
