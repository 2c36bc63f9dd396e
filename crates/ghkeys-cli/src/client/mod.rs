pub(crate) mod fetch_error;
pub(crate) mod github_client;
pub(crate) mod key_fetcher;

pub use fetch_error::FetchError;
pub use github_client::{GitHubClient, split_key_lines};
pub use key_fetcher::KeyFetcher;
