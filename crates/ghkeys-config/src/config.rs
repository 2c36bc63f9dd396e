use crate::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    FetchConfig, LoggingConfig, OutputSettings,
};

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub logging: LoggingConfig,
    pub output: OutputSettings,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for GHKEYS_CONFIG_DIR env var, else use the platform config dir
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply GHKEYS_* environment variable overrides
    ///
    /// The config directory is never created. Does NOT validate - call
    /// validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: GHKEYS_CONFIG_DIR env var > <platform config dir>/ghkeys
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.fetch.validate()?;
        self.output.validate()?;

        Ok(())
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        debug!("Configuration loaded:");
        debug!(
            "  fetch: {} (timeout {}s, concurrency {})",
            self.fetch.base_url, self.fetch.timeout_secs, self.fetch.concurrency
        );
        debug!("  user_agent: {}", self.fetch.user_agent);
        debug!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
        debug!(
            "  output: authorized_keys={}, fail_on={}",
            self.output.authorized_keys, self.output.fail_on
        );
    }

    fn apply_env_overrides(&mut self) {
        // Fetch
        Self::apply_env_string("GHKEYS_BASE_URL", &mut self.fetch.base_url);
        Self::apply_env_parse("GHKEYS_TIMEOUT_SECS", &mut self.fetch.timeout_secs);
        Self::apply_env_parse("GHKEYS_CONCURRENCY", &mut self.fetch.concurrency);
        Self::apply_env_string("GHKEYS_USER_AGENT", &mut self.fetch.user_agent);

        // Logging
        Self::apply_env_parse("GHKEYS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("GHKEYS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("GHKEYS_LOG_FILE", &mut self.logging.file);

        // Output
        Self::apply_env_string("GHKEYS_AUTHORIZED_KEYS", &mut self.output.authorized_keys);
        Self::apply_env_parse("GHKEYS_FAIL_ON", &mut self.output.fail_on);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
