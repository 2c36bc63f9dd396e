use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Exit policy for per-user fetch failures.
///
/// Fetch failures are always reported inside the output. This policy only
/// decides whether they also turn into a non-zero process exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailOn {
    /// Never fail the process because of fetch failures
    #[default]
    Never,
    /// Fail if at least one user could not be fetched
    Any,
    /// Fail only if every user could not be fetched
    All,
}

impl FailOn {
    /// Whether a run with `failed` failures out of `total` users should exit non-zero.
    pub fn should_fail(self, total: usize, failed: usize) -> bool {
        match self {
            FailOn::Never => false,
            FailOn::Any => failed > 0,
            FailOn::All => total > 0 && failed == total,
        }
    }
}

impl FromStr for FailOn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "never" => Ok(FailOn::Never),
            "any" => Ok(FailOn::Any),
            "all" => Ok(FailOn::All),
            other => Err(format!(
                "invalid fail-on policy '{other}' (expected never, any or all)"
            )),
        }
    }
}

impl fmt::Display for FailOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailOn::Never => "never",
            FailOn::Any => "any",
            FailOn::All => "all",
        };
        f.write_str(name)
    }
}
