use std::env;

use pretty_assertions::assert_eq;
use serial_test::serial;
use volunteer_shifts::config::Config;
use volunteer_shifts::services::ShiftGrouping;

mod common;

const KEYS: [&str; 7] = [
    "DATABASE_URL",
    "DATABASE_MAX_CONNECTIONS",
    "HOST",
    "PORT",
    "ENVIRONMENT",
    "BASE_URL",
    "SHIFT_GROUPING",
];

// Runs `f` with the given overrides, restoring the previous environment afterwards
fn with_env<T>(overrides: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    let original_values: Vec<(&str, Option<String>)> =
        KEYS.iter().map(|key| (*key, env::var(key).ok())).collect();

    unsafe {
        for key in KEYS {
            env::remove_var(key);
        }
        for (key, value) in overrides {
            env::set_var(key, value);
        }
    }

    let result = f();

    unsafe {
        for (key, value) in original_values {
            match value {
                Some(val) => env::set_var(key, val),
                None => env::remove_var(key),
            }
        }
    }

    result
}

#[test]
#[serial]
fn test_config_from_env_with_defaults() {
    common::setup_test_env();

    let config = with_env(&[], Config::from_env_only).unwrap();

    assert_eq!(
        config.database_url,
        "postgres://@localhost:5432/volunteer_shifts"
    );
    assert_eq!(config.database_max_connections, 10);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
    assert_eq!(config.environment, "development");
    assert_eq!(config.client_base_url, "http://localhost:3000");
    assert_eq!(config.shift_grouping, ShiftGrouping::Adjacent);
}

#[test]
#[serial]
fn test_config_from_env_with_custom_values() {
    common::setup_test_env();

    let config = with_env(
        &[
            ("DATABASE_URL", "postgres://ops@db:5432/shifts"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
            ("HOST", "0.0.0.0"),
            ("PORT", "3001"),
            ("ENVIRONMENT", "production"),
            ("BASE_URL", "https://ops.example.org"),
            ("SHIFT_GROUPING", "strict"),
        ],
        Config::from_env_only,
    )
    .unwrap();

    assert_eq!(config.database_url, "postgres://ops@db:5432/shifts");
    assert_eq!(config.database_max_connections, 4);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3001);
    assert_eq!(config.environment, "production");
    assert_eq!(config.client_base_url, "https://ops.example.org");
    assert_eq!(config.shift_grouping, ShiftGrouping::Strict);
}

#[test]
#[serial]
fn test_config_invalid_numbers_fall_back_to_defaults() {
    let config = with_env(
        &[("PORT", "not-a-port"), ("DATABASE_MAX_CONNECTIONS", "-3")],
        Config::from_env_only,
    )
    .unwrap();

    assert_eq!(config.port, 8080);
    assert_eq!(config.database_max_connections, 10);
}

#[test]
#[serial]
fn test_config_rejects_unknown_shift_grouping() {
    let result = with_env(&[("SHIFT_GROUPING", "sorted")], Config::from_env_only);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Invalid shift grouping"));
}

#[test]
fn test_config_environment_detection() {
    let mut config = Config::test_config();
    assert!(!config.is_development());

    config.environment = "production".to_string();
    assert!(!config.is_development());

    config.environment = "development".to_string();
    assert!(config.is_development());
}

#[test]
fn test_server_address_formatting() {
    let mut config = Config::test_config();
    config.host = "192.168.1.1".to_string();
    config.port = 9000;

    assert_eq!(config.server_address(), "192.168.1.1:9000");
}
