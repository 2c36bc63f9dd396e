use crate::FetchError;

use std::future::Future;

/// Source of a user's published public keys.
///
/// One call is one request: implementations do not retry.
pub trait KeyFetcher: Send + Sync {
    /// Fetch the raw key lines for `user`, in the order the remote returns them.
    ///
    /// A user that exists but publishes no keys yields `Ok(vec![])`.
    fn fetch(&self, user: &str) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send;
}
