//! Environment-style configuration for the simulation and its transport.
//!
//! Keys are read through an injectable getter so tests never touch the
//! process environment. In tests, use RaceConfig::default_test().

use thiserror::Error;

pub const ENV_API_BASE: &str = "API_BASE";
pub const ENV_ADMIN_TOKEN: &str = "ADMIN_TOKEN";
pub const ENV_ADMIN_SECRET: &str = "ADMIN_SECRET";
pub const ENV_TICK_MS: &str = "TICK_MS";
pub const ENV_RACE_DISTANCE: &str = "RACE_DISTANCE";
pub const ENV_BASE_DRIFT: &str = "BASE_DRIFT";
pub const ENV_TRANSPORT_TIMEOUT_MS: &str = "TRANSPORT_TIMEOUT_MS";
pub const ENV_WRITE_RETRIES: &str = "WRITE_RETRIES";

pub const DEFAULT_TICK_MS: u64 = 200;
pub const DEFAULT_RACE_DISTANCE: f64 = 5000.0;
pub const DEFAULT_BASE_DRIFT: f64 = 5.0;
pub const DEFAULT_CRASH_BASE: f64 = 0.002;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required key {key}")]
    Missing { key: &'static str },

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Simulation parameters for one race.
#[derive(Debug, Clone)]
pub struct RaceConfig {
    /// Fixed pause between ticks, in milliseconds. Zero skips the sleep.
    pub tick_ms: u64,
    /// Distance a racer must cover to finish.
    pub race_distance: f64,
    /// Magnitude of the per-tick noise term.
    pub base_drift: f64,
    /// Baseline crash probability per racer per tick, before the
    /// aggression and consistency terms are added.
    pub crash_base: f64,
    /// Extra attempts per failed price push. Zero preserves the original
    /// no-retry behavior.
    pub write_retries: u32,
}

impl RaceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    pub fn from_env_with<F>(mut getter: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let config = Self {
            tick_ms: parse_or(&mut getter, ENV_TICK_MS, DEFAULT_TICK_MS)?,
            race_distance: parse_or(&mut getter, ENV_RACE_DISTANCE, DEFAULT_RACE_DISTANCE)?,
            base_drift: parse_or(&mut getter, ENV_BASE_DRIFT, DEFAULT_BASE_DRIFT)?,
            crash_base: DEFAULT_CRASH_BASE,
            write_retries: parse_or(&mut getter, ENV_WRITE_RETRIES, 0)?,
        };
        if config.race_distance <= 0.0 {
            return Err(ConfigError::Invalid {
                key: ENV_RACE_DISTANCE,
                value: config.race_distance.to_string(),
            });
        }
        if config.base_drift < 0.0 {
            return Err(ConfigError::Invalid {
                key: ENV_BASE_DRIFT,
                value: config.base_drift.to_string(),
            });
        }
        Ok(config)
    }

    /// Config with hardcoded values for use in tests: no sleeping, a
    /// short track, and the default physics.
    pub fn default_test() -> Self {
        Self {
            tick_ms: 0,
            race_distance: 500.0,
            base_drift: DEFAULT_BASE_DRIFT,
            crash_base: DEFAULT_CRASH_BASE,
            write_retries: 0,
        }
    }
}

/// Connection parameters for the HTTP transport.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Endpoint root, e.g. "http://localhost:3001".
    pub api_base: String,
    /// Write-authorization credential, sent as a bearer token.
    pub admin_token: String,
    /// Per-request timeout. None leaves requests unbounded, matching the
    /// original behavior where a hung remote stalls the loop.
    pub timeout_ms: Option<u64>,
}

impl TransportConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    pub fn from_env_with<F>(mut getter: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let api_base = required(&mut getter, ENV_API_BASE)?;
        // ADMIN_TOKEN is canonical; ADMIN_SECRET is the legacy alias.
        let admin_token = match getter(ENV_ADMIN_TOKEN).filter(|v| !v.trim().is_empty()) {
            Some(token) => token,
            None => required(&mut getter, ENV_ADMIN_SECRET)?,
        };
        let timeout_ms = match getter(ENV_TRANSPORT_TIMEOUT_MS) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: ENV_TRANSPORT_TIMEOUT_MS,
                value: raw,
            })?),
            None => None,
        };
        Ok(Self {
            api_base,
            admin_token,
            timeout_ms,
        })
    }
}

fn required<F>(getter: &mut F, key: &'static str) -> Result<String, ConfigError>
where
    F: FnMut(&str) -> Option<String>,
{
    let value = getter(key).ok_or(ConfigError::Missing { key })?;
    if value.trim().is_empty() {
        return Err(ConfigError::Missing { key });
    }
    Ok(value)
}

fn parse_or<F, T>(getter: &mut F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: FnMut(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match getter(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}
