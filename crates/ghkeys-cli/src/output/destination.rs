use crate::{OutputConfig, WriteError, WriteResult};

use std::fmt;
use std::path::{Path, PathBuf};

/// Where formatted output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    /// Add to the end of the file, creating it if needed
    Append(PathBuf),
    /// Replace the file; refused for an existing file unless `force`
    Overwrite { path: PathBuf, force: bool },
}

impl Destination {
    /// Resolve the destination from config. Paths starting with `~` are
    /// expanded against the home directory.
    pub fn resolve(config: &OutputConfig) -> Self {
        if config.append {
            let path = config
                .output_path
                .as_deref()
                .unwrap_or(config.default_append_path.as_path());
            return Destination::Append(expand_home(path));
        }

        match &config.output_path {
            Some(path) => Destination::Overwrite {
                path: expand_home(path),
                force: config.force,
            },
            None => Destination::Stdout,
        }
    }

    /// Fail early if committing to this destination is already known to be refused.
    pub fn preflight(&self) -> WriteResult<()> {
        match self {
            Destination::Overwrite { path, force: false } if path.exists() => {
                Err(WriteError::already_exists(path))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str("<stdout>"),
            Destination::Append(path) | Destination::Overwrite { path, .. } => {
                write!(f, "{}", path.display())
            }
        }
    }
}

/// Expand a leading `~` component to the home directory.
///
/// Paths without `~`, or with no resolvable home directory, are returned as-is.
pub fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }

    path.to_path_buf()
}
