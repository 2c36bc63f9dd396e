use std::path::PathBuf;

/// Presentation and destination options, resolved before the pipeline runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Append the username to each key line instead of grouping under headers
    pub inline_comments: bool,
    /// Emit JSON; wins over `inline_comments`
    pub json: bool,
    /// Indent JSON output
    pub pretty: bool,
    /// Append to `output_path` (or `default_append_path`) instead of stdout
    pub append: bool,
    pub output_path: Option<PathBuf>,
    /// Allow replacing an existing `output_path` when not appending
    pub force: bool,
    /// Conventional authorized-keys file used by `append` without `output_path`
    pub default_append_path: PathBuf,
}
