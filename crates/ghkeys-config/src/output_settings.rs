use crate::{ConfigError, ConfigErrorResult, DEFAULT_AUTHORIZED_KEYS, FailOn};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Append target used by `--append` when no `--output` is given
    pub authorized_keys: String,
    pub fail_on: FailOn,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            authorized_keys: String::from(DEFAULT_AUTHORIZED_KEYS),
            fail_on: FailOn::default(),
        }
    }
}

impl OutputSettings {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.authorized_keys.trim().is_empty() {
            return Err(ConfigError::output("output.authorized_keys cannot be empty"));
        }

        Ok(())
    }
}
