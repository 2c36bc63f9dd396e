
use crate::{FetchError, KeyFetcher, UserKeyResult};

use std::collections::HashMap;
use std::sync::Mutex;

struct Stub {
    yields: usize,
    outcome: Result<Vec<String>, FetchError>,
}

/// In-memory fetcher. Unknown users are `NotFound`; `delayed` users yield to
/// the runtime a number of times before answering, which reorders completion.
#[derive(Default)]
pub(crate) struct StubFetcher {
    responses: HashMap<String, Stub>,
    calls: Mutex<Vec<String>>,
    completed: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_keys(mut self, user: &str, keys: &[&str]) -> Self {
        let keys = keys.iter().map(|k| k.to_string()).collect();
        self.responses.insert(
            user.to_string(),
            Stub {
                yields: 0,
                outcome: Ok(keys),
            },
        );
        self
    }

    pub(crate) fn with_error(mut self, user: &str, error: FetchError) -> Self {
        self.responses.insert(
            user.to_string(),
            Stub {
                yields: 0,
                outcome: Err(error),
            },
        );
        self
    }

    pub(crate) fn delayed(mut self, user: &str, yields: usize) -> Self {
        if let Some(stub) = self.responses.get_mut(user) {
            stub.yields = yields;
        }
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn completed(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

impl KeyFetcher for StubFetcher {
    async fn fetch(&self, user: &str) -> Result<Vec<String>, FetchError> {
        self.calls.lock().unwrap().push(user.to_string());

        let stub = self.responses.get(user);
        for _ in 0..stub.map_or(0, |s| s.yields) {
            tokio::task::yield_now().await;
        }

        self.completed.lock().unwrap().push(user.to_string());
        stub.map_or(Err(FetchError::NotFound), |s| s.outcome.clone())
    }
}

pub(crate) fn users(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

pub(crate) fn ok(user: &str, keys: &[&str]) -> UserKeyResult {
    UserKeyResult::success(user, keys.iter().map(|k| k.to_string()).collect())
}
