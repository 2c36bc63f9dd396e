//! ghkeys library
//!
//! Fetches SSH public keys published by GitHub users, renders them as
//! plain text, inline-commented lines or JSON, and writes them to stdout or
//! a file.

pub mod aggregator;
pub mod cli;
pub mod client;
pub mod error;
pub mod logger;
pub mod output;
pub mod pipeline;
pub mod user_key_result;

#[cfg(test)]
mod tests;

pub use aggregator::Aggregator;
pub use cli::Cli;
pub use client::{FetchError, GitHubClient, KeyFetcher, split_key_lines};
pub use error::{CliError, EXIT_INTERRUPTED, Result as CliResult};
pub use output::{
    Destination, ERROR_LINE_PREFIX, OutputConfig, OutputMode, WriteError, WriteResult,
    expand_home, format, write_to,
};
pub use pipeline::{RunSummary, run};
pub use user_key_result::UserKeyResult;
