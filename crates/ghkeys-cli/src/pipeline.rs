use crate::{
    Aggregator, CliError, CliResult, Destination, KeyFetcher, OutputConfig, OutputMode,
    UserKeyResult, format, write_to,
};

use std::io::Write;

use log::{info, warn};

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Users requested
    pub total: usize,
    /// Users whose fetch failed
    pub failed: usize,
    /// Key lines fetched across all users
    pub keys: usize,
    /// `None` when nothing was written
    pub destination: Option<Destination>,
}

/// Fetch, format and write keys for `usernames`.
///
/// Destination conflicts are checked before any request is made. Every fetch
/// completes before formatting starts; after that the run does not yield
/// again, so dropping this future mid-way never leaves a partial write.
pub async fn run<F, W>(
    aggregator: &Aggregator<F>,
    usernames: &[String],
    config: &OutputConfig,
    stdout: &mut W,
) -> CliResult<RunSummary>
where
    F: KeyFetcher,
    W: Write,
{
    if usernames.is_empty() {
        return Err(CliError::no_users());
    }

    let target = Destination::resolve(config);
    target.preflight()?;

    let results = aggregator.aggregate(usernames).await;

    let failed = report_failures(&results);
    let keys = results.iter().map(|r| r.keys().len()).sum();
    let mut summary = RunSummary {
        total: results.len(),
        failed,
        keys,
        destination: None,
    };

    if keys == 0 {
        warn!("No keys fetched.");

        // Stdout always shows per-user outcomes; only a key file is left untouched
        if target != Destination::Stdout && !OutputMode::from_config(config).is_json() {
            return Ok(summary);
        }
    }

    let text = format(&results, config)?;
    let destination = write_to(&text, config, stdout)?;

    match &destination {
        Destination::Append(_) => info!("Appended keys to {destination}"),
        Destination::Overwrite { .. } => info!("Wrote keys to {destination}"),
        Destination::Stdout => {}
    }

    summary.destination = Some(destination);
    Ok(summary)
}

/// Log each failed user and return how many failed.
fn report_failures(results: &[UserKeyResult]) -> usize {
    results
        .iter()
        .filter_map(|result| result.error().map(|error| (result.user(), error)))
        .inspect(|(user, error)| warn!("{user}: {error}"))
        .count()
}
