//! ghkeys - fetch SSH public keys from GitHub users
//!
//! # Examples
//!
//! ```bash
//! ghkeys alice bob
//! ghkeys alice bob --append
//! ghkeys alice bob --output ssh_keys.txt
//! ghkeys alice bob --json --pretty
//! ghkeys alice bob --inline-comments
//! ```

use ghkeys_cli::{Aggregator, Cli, CliError, CliResult, GitHubClient, logger, run};
use ghkeys_config::Config;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::warn;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

async fn execute(cli: Cli) -> CliResult<ExitCode> {
    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    let output = cli.output_config(&config);
    let client = GitHubClient::from_config(&config.fetch)?;
    let aggregator = Aggregator::new(client, config.fetch.concurrency);
    let mut stdout = io::stdout();

    let summary = tokio::select! {
        result = run(&aggregator, &cli.users, &output, &mut stdout) => result?,
        _ = tokio::signal::ctrl_c() => return Err(CliError::Interrupted),
    };

    let fail_on = config.output.fail_on;
    if fail_on.should_fail(summary.total, summary.failed) {
        warn!(
            "{} of {} user(s) failed (fail-on: {})",
            summary.failed, summary.total, fail_on
        );
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
