use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, none, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Session secret
// =========================================================================

#[test]
#[serial]
fn given_no_session_secret_when_validate_then_error_names_env_var() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::remove("MP_SESSION_SECRET");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("MP_SESSION_SECRET"));
}

#[test]
#[serial]
fn given_short_session_secret_when_validate_then_error_mentions_32_chars() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("MP_SESSION_SECRET", "tooshort");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("32"));
}

#[test]
#[serial]
fn given_session_secret_of_32_chars_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("MP_SESSION_SECRET", "0123456789abcdef0123456789abcdef");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_secret_in_config_toml_when_loaded_then_it_is_ignored() {
    // The secret is env-only: a committed config.toml must not be able to
    // smuggle one in.
    let (temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::remove("MP_SESSION_SECRET");
    std::fs::write(
        temp.path().join("config.toml"),
        "[session]\nsecret = \"0123456789abcdef0123456789abcdef\"\n",
    )
    .unwrap();

    let config = Config::load().unwrap();

    assert_that!(config.session.secret, none());
}
