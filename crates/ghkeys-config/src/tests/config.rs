use crate::tests::{EnvGuard, setup_config_dir, write_config};
use crate::{Config, FailOn, LogLevel};

use googletest::assert_that;
use googletest::prelude::{anything, eq, none, ok, some};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.fetch.base_url, eq("https://github.com"));
    assert_that!(config.fetch.timeout_secs, eq(20));
    assert_that!(config.fetch.concurrency, eq(8));
    assert_that!(config.logging.level, eq(LogLevel(LevelFilter::Info)));
    assert_that!(config.logging.file, none());
    assert_that!(
        config.output.authorized_keys,
        eq("~/.ssh/authorized_keys")
    );
    assert_that!(config.output.fail_on, eq(FailOn::Never));
}

#[test]
#[serial]
fn given_no_config_file_when_load_then_config_dir_is_not_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested");
    let _dir = EnvGuard::set(crate::CONFIG_DIR_ENV, nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(nested.exists(), eq(false));
}

#[test]
#[serial]
fn given_defaults_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_default_user_agent_then_names_tool_and_project() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert!(config.fetch.user_agent.starts_with("ghkeys/"));
    assert!(config.fetch.user_agent.contains(crate::PROJECT_URL));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
            [fetch]
            base_url = "http://127.0.0.1:9000"
            concurrency = 4

            [logging]
            level = "debug"
            file = "/tmp/ghkeys.log"

            [output]
            authorized_keys = "/srv/keys/authorized_keys"
            fail_on = "all"
        "#,
    );

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.fetch.base_url, eq("http://127.0.0.1:9000"));
    assert_that!(config.fetch.concurrency, eq(4));
    assert_that!(config.fetch.timeout_secs, eq(20));
    assert_that!(config.logging.level, eq(LogLevel(LevelFilter::Debug)));
    assert_that!(config.logging.file, some(eq("/tmp/ghkeys.log")));
    assert_that!(
        config.output.authorized_keys,
        eq("/srv/keys/authorized_keys")
    );
    assert_that!(config.output.fail_on, eq(FailOn::All));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
            [fetch]
            concurrency = 4
        "#,
    );
    let _concurrency = EnvGuard::set("GHKEYS_CONCURRENCY", "16");
    let _fail_on = EnvGuard::set("GHKEYS_FAIL_ON", "any");
    let _colored = EnvGuard::set("GHKEYS_LOG_COLORED", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.fetch.concurrency, eq(16));
    assert_that!(config.output.fail_on, eq(FailOn::Any));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_unparseable_env_var_when_load_then_keeps_previous_value() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("GHKEYS_TIMEOUT_SECS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.fetch.timeout_secs, eq(20));
}
