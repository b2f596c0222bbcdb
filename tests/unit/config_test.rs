//! Configuration loading through files and `LIGHTER_ACCOUNT__*` variables
//!
//! These tests mutate the process environment, so they run serially.

use lighter_account::config::*;
use serial_test::serial;
use std::env;

mod utils {
    /// Clean up environment variables with the LIGHTER_ACCOUNT prefix
    pub fn clean_env_vars() {
        let keys: Vec<String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(super::ENV_PREFIX))
            .map(|(k, _)| k)
            .collect();

        for key in keys {
            unsafe { std::env::remove_var(&key) };
        }
        unsafe { std::env::remove_var("APP_ENV") };
    }
}

#[test]
#[serial]
fn load_default_config() {
    utils::clean_env_vars();

    let config = load().expect("default configuration should load");

    assert_eq!(config.app.name, "lighter-account");
    assert_eq!(config.app.environment, "development");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.auth.session_cookie, "session");
    assert_eq!(config.auth.session_lifetime, 3600);
    assert!(!config.auth.secure_cookie);
    assert_eq!(config.auth.argon2.memory_cost, 65536);
    assert!(config.security.headers.enabled);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
#[serial]
fn production_overrides() {
    utils::clean_env_vars();
    unsafe { env::set_var("APP_ENV", "production") };

    let config = load().expect("production configuration should load");
    utils::clean_env_vars();

    assert_eq!(config.app.environment, "production");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080, "unset keys fall back to default.toml");
    assert!(config.auth.secure_cookie);
    assert_eq!(config.security.headers.hsts_max_age, 31536000);
    assert!(config.observability.json);
}

#[test]
#[serial]
fn environment_variables_take_precedence() {
    utils::clean_env_vars();
    unsafe {
        env::set_var("APP_ENV", "production");
        env::set_var("LIGHTER_ACCOUNT__SERVER__PORT", "9090");
        env::set_var("LIGHTER_ACCOUNT__AUTH__SESSION_COOKIE", "SID");
        env::set_var("LIGHTER_ACCOUNT__OBSERVABILITY__JSON", "false");
    }

    let config = load().expect("configuration should load");
    utils::clean_env_vars();

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.auth.session_cookie, "SID");
    assert!(!config.observability.json);
    assert_eq!(config.server.host, "0.0.0.0");
}

#[test]
#[serial]
fn invalid_values_are_rejected() {
    utils::clean_env_vars();
    unsafe { env::set_var("LIGHTER_ACCOUNT__AUTH__SESSION_COOKIE", "bad cookie") };

    let result = load();
    utils::clean_env_vars();

    match result {
        Err(ConfigError::ValidationError(message)) => {
            assert!(message.contains("session_cookie"))
        }
        other => panic!("expected a validation error, got {:?}", other),
    }
}

#[test]
#[serial]
fn unparsable_values_fail_to_load() {
    utils::clean_env_vars();
    unsafe { env::set_var("LIGHTER_ACCOUNT__SERVER__PORT", "not-a-port") };

    let result = load();
    utils::clean_env_vars();

    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[test]
fn defaults_are_valid() {
    let config = AppConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.server.address(), ("127.0.0.1".to_string(), 8080));
    assert_eq!(config.auth.session_lifetime().as_secs(), 3600);
}
