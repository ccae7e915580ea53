//! Configuration parsing through the injected getter.

use paddock_core::config::{
    ConfigError, RaceConfig, TransportConfig, DEFAULT_BASE_DRIFT, DEFAULT_CRASH_BASE,
    DEFAULT_RACE_DISTANCE, DEFAULT_TICK_MS, ENV_RACE_DISTANCE, ENV_TICK_MS,
    ENV_TRANSPORT_TIMEOUT_MS,
};
use std::collections::HashMap;

fn getter(pairs: &[(&str, &str)]) -> impl FnMut(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn race_config_defaults_when_unset() {
    let config = RaceConfig::from_env_with(getter(&[])).expect("defaults");
    assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
    assert_eq!(config.race_distance, DEFAULT_RACE_DISTANCE);
    assert_eq!(config.base_drift, DEFAULT_BASE_DRIFT);
    assert_eq!(config.crash_base, DEFAULT_CRASH_BASE);
    assert_eq!(config.write_retries, 0);
}

#[test]
fn race_config_reads_overrides() {
    let config = RaceConfig::from_env_with(getter(&[
        ("TICK_MS", "50"),
        ("RACE_DISTANCE", "750"),
        ("BASE_DRIFT", "0"),
        ("WRITE_RETRIES", "3"),
    ]))
    .expect("overrides");
    assert_eq!(config.tick_ms, 50);
    assert_eq!(config.race_distance, 750.0);
    assert_eq!(config.base_drift, 0.0);
    assert_eq!(config.write_retries, 3);
}

#[test]
fn race_config_rejects_garbage_numbers() {
    let err = RaceConfig::from_env_with(getter(&[("TICK_MS", "fast")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::Invalid {
            key: ENV_TICK_MS,
            value: "fast".to_string(),
        }
    );
}

#[test]
fn race_config_rejects_nonpositive_distance() {
    let err = RaceConfig::from_env_with(getter(&[("RACE_DISTANCE", "0")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::Invalid {
            key: ENV_RACE_DISTANCE,
            value: "0".to_string(),
        }
    );
}

#[test]
fn transport_config_requires_api_base() {
    let err = TransportConfig::from_env_with(getter(&[("ADMIN_TOKEN", "s3cret")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { key: "API_BASE" }));
}

#[test]
fn transport_config_requires_a_credential() {
    let err =
        TransportConfig::from_env_with(getter(&[("API_BASE", "http://localhost:3001")]))
            .unwrap_err();
    assert!(matches!(err, ConfigError::Missing { key: "ADMIN_SECRET" }));
}

#[test]
fn admin_secret_is_accepted_as_alias() {
    let config = TransportConfig::from_env_with(getter(&[
        ("API_BASE", "http://localhost:3001"),
        ("ADMIN_SECRET", "legacy-secret"),
    ]))
    .expect("alias");
    assert_eq!(config.admin_token, "legacy-secret");
}

#[test]
fn admin_token_wins_over_the_alias() {
    let config = TransportConfig::from_env_with(getter(&[
        ("API_BASE", "http://localhost:3001"),
        ("ADMIN_TOKEN", "current"),
        ("ADMIN_SECRET", "legacy"),
    ]))
    .expect("both set");
    assert_eq!(config.admin_token, "current");
}

#[test]
fn transport_timeout_parses_or_rejects() {
    let config = TransportConfig::from_env_with(getter(&[
        ("API_BASE", "http://localhost:3001"),
        ("ADMIN_TOKEN", "t"),
        ("TRANSPORT_TIMEOUT_MS", "2500"),
    ]))
    .expect("timeout");
    assert_eq!(config.timeout_ms, Some(2500));

    let err = TransportConfig::from_env_with(getter(&[
        ("API_BASE", "http://localhost:3001"),
        ("ADMIN_TOKEN", "t"),
        ("TRANSPORT_TIMEOUT_MS", "soon"),
    ]))
    .unwrap_err();
    assert_eq!(
        err,
        ConfigError::Invalid {
            key: ENV_TRANSPORT_TIMEOUT_MS,
            value: "soon".to_string(),
        }
    );
}
