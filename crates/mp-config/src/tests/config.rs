use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::eq;
use serial_test::serial;

#[test]
#[serial]
fn given_no_config_file_when_loaded_then_defaults_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::remove("MP_SESSION_SECRET");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.host.as_str(), eq("127.0.0.1"));
    assert_that!(config.server.port, eq(8000));
    assert_that!(config.database.path.as_str(), eq("users.db"));
    assert_that!(config.assets.dir.as_str(), eq("static"));
}

#[test]
#[serial]
fn given_config_toml_when_loaded_then_file_values_apply() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 9100

            [database]
            path = "members.db"
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9100));
    assert_that!(config.database.path.as_str(), eq("members.db"));
}

#[test]
#[serial]
fn given_env_override_when_loaded_then_env_wins_over_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server]\nport = 9100\n").unwrap();
    let _port = EnvGuard::set("MP_SERVER_PORT", "9200");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9200));
}

#[test]
#[serial]
fn given_config_dir_when_database_path_resolved_then_it_is_inside_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let db_path = config.database_path().unwrap();

    // Then
    assert!(db_path.starts_with(temp.path()));
    assert!(db_path.ends_with("users.db"));
}
