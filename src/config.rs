///! Environment-backed configuration
///!
///! All settings come from the process environment, loaded once at startup
///! into an immutable `Config` that is passed explicitly to each component.
///! The three secrets are required; the endpoint and retry period have
///! defaults and accept overrides.

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingEnv(Vec<String>),

    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    /// Homework statuses endpoint (override: PRACTICUM_ENDPOINT)
    pub endpoint: String,
    /// Pause between polling cycles (override: RETRY_PERIOD, in seconds)
    pub retry_period: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Reports every
    /// missing required variable by name in one error.
    fn load(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .filter(|key| get(key).is_none())
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingEnv(missing));
        }

        let retry_period = match get("RETRY_PERIOD") {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    key: "RETRY_PERIOD",
                    value: raw,
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_RETRY_PERIOD_SECS),
        };

        Ok(Self {
            practicum_token: get("PRACTICUM_TOKEN").unwrap(),
            telegram_token: get("TELEGRAM_TOKEN").unwrap(),
            telegram_chat_id: get("TELEGRAM_CHAT_ID").unwrap(),
            endpoint: get("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            retry_period,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars = env(vars);
        Config::load(|key| vars.get(key).cloned())
    }

    const FULL: [(&str, &str); 3] = [
        ("PRACTICUM_TOKEN", "practicum-secret"),
        ("TELEGRAM_TOKEN", "telegram-secret"),
        ("TELEGRAM_CHAT_ID", "12345"),
    ];

    #[test]
    fn loads_with_all_required_vars() {
        let config = load(&FULL).unwrap();
        assert_eq!(config.practicum_token, "practicum-secret");
        assert_eq!(config.telegram_token, "telegram-secret");
        assert_eq!(config.telegram_chat_id, "12345");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.retry_period, Duration::from_secs(600));
    }

    #[test]
    fn every_missing_subset_is_reported_by_name() {
        // All 7 proper subsets of the required set
        for mask in 0..7u32 {
            let present: Vec<(&str, &str)> = FULL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, kv)| *kv)
                .collect();
            let expected_missing: Vec<&str> = FULL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) == 0)
                .map(|(_, (k, _))| *k)
                .collect();

            match load(&present) {
                Err(ConfigError::MissingEnv(missing)) => {
                    assert_eq!(missing, expected_missing, "mask {mask:#b}");
                }
                other => panic!("expected MissingEnv for mask {mask:#b}, got {other:?}"),
            }
        }
    }

    #[test]
    fn endpoint_and_retry_period_overrides() {
        let mut vars = FULL.to_vec();
        vars.push(("PRACTICUM_ENDPOINT", "http://localhost:9999/statuses/"));
        vars.push(("RETRY_PERIOD", "5"));
        let config = load(&vars).unwrap();
        assert_eq!(config.endpoint, "http://localhost:9999/statuses/");
        assert_eq!(config.retry_period, Duration::from_secs(5));
    }

    #[test]
    fn non_numeric_retry_period_is_rejected() {
        let mut vars = FULL.to_vec();
        vars.push(("RETRY_PERIOD", "soon"));
        let err = load(&vars).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "RETRY_PERIOD", .. }
        ));
    }
}
