use crate::OutputConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// `# user` header, key lines, blank separator
    Plain,
    /// `<key> <user>` per key, no headers
    Inline,
    Json { pretty: bool },
}

impl OutputMode {
    /// JSON takes precedence over inline comments when both are set.
    pub fn from_config(config: &OutputConfig) -> Self {
        if config.json {
            OutputMode::Json {
                pretty: config.pretty,
            }
        } else if config.inline_comments {
            OutputMode::Inline
        } else {
            OutputMode::Plain
        }
    }

    pub fn is_json(self) -> bool {
        matches!(self, OutputMode::Json { .. })
    }
}
