mod config;
mod error;
mod fail_on;
mod fetch_config;
mod log_level;
mod logging_config;
mod output_settings;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use fail_on::FailOn;
pub use fetch_config::FetchConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use output_settings::OutputSettings;

pub const CONFIG_DIR_ENV: &str = "GHKEYS_CONFIG_DIR";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const CONFIG_DIR_NAME: &str = "ghkeys";

pub const PROJECT_URL: &str = "https://github.com/bjornmorten/ghkeys";

const DEFAULT_BASE_URL: &str = "https://github.com";
const DEFAULT_AUTHORIZED_KEYS: &str = "~/.ssh/authorized_keys";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
