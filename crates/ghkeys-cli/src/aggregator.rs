use crate::{KeyFetcher, UserKeyResult};

use futures::stream::{self, StreamExt};
use log::debug;

/// Fetches keys for a list of users with bounded concurrency.
///
/// Results come back in the order the users were requested, one per entry,
/// duplicates included. A failed fetch is recorded on its own result and never
/// affects the others.
pub struct Aggregator<F> {
    fetcher: F,
    concurrency: usize,
}

impl<F: KeyFetcher> Aggregator<F> {
    /// `concurrency` is clamped to at least one request in flight.
    pub fn new(fetcher: F, concurrency: usize) -> Self {
        Self {
            fetcher,
            concurrency: concurrency.max(1),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub async fn aggregate(&self, usernames: &[String]) -> Vec<UserKeyResult> {
        let fetcher = &self.fetcher;

        // One slot per input position; completion order only decides which
        // slot is filled next.
        let mut slots: Vec<Option<UserKeyResult>> = Vec::with_capacity(usernames.len());
        slots.resize_with(usernames.len(), || None);

        let mut completed = stream::iter(usernames.iter().enumerate())
            .map(|(index, user)| async move {
                let outcome = fetcher.fetch(user).await;
                match &outcome {
                    Ok(keys) => debug!("{user}: {} key(s)", keys.len()),
                    Err(e) => debug!("{user}: fetch failed: {e}"),
                }
                (index, UserKeyResult::new(user.as_str(), outcome))
            })
            .buffer_unordered(self.concurrency);

        while let Some((index, result)) = completed.next().await {
            slots[index] = Some(result);
        }

        slots.into_iter().flatten().collect()
    }
}
