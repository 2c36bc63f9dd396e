use crate::OutputConfig;

use std::path::PathBuf;

use clap::Parser;
use ghkeys_config::{Config, FailOn, LogLevel};

#[derive(Parser, Debug)]
#[command(name = "ghkeys")]
#[command(about = "Fetch SSH public keys from GitHub users")]
#[command(version)]
pub struct Cli {
    /// GitHub usernames
    #[arg(required = true, value_name = "USERS")]
    pub users: Vec<String>,

    /// Append the username to the end of each key
    #[arg(short, long)]
    pub inline_comments: bool,

    /// Output JSON instead of SSH keys
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Append to ~/.ssh/authorized_keys (or --output file if given)
    #[arg(short, long)]
    pub append: bool,

    /// Write keys to the specified file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing --output file
    #[arg(short, long)]
    pub force: bool,

    /// Exit non-zero when fetches fail: never, any or all
    #[arg(long, value_name = "POLICY")]
    pub fail_on: Option<FailOn>,

    /// Maximum number of concurrent requests
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Base URL of the key listing service
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl Cli {
    /// Command-line flags win over config file and environment values.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(concurrency) = self.concurrency {
            config.fetch.concurrency = concurrency;
        }
        if let Some(timeout) = self.timeout {
            config.fetch.timeout_secs = timeout;
        }
        if let Some(ref base_url) = self.base_url {
            config.fetch.base_url = base_url.clone();
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if let Some(fail_on) = self.fail_on {
            config.output.fail_on = fail_on;
        }
    }

    pub fn output_config(&self, config: &Config) -> OutputConfig {
        OutputConfig {
            inline_comments: self.inline_comments,
            json: self.json,
            pretty: self.pretty,
            append: self.append,
            output_path: self.output.clone(),
            force: self.force,
            default_append_path: PathBuf::from(&config.output.authorized_keys),
        }
    }
}
