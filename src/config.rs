use std::{env, fmt::Display, net::SocketAddr, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {key} value '{value}': {message}")]
    Invalid {
        key: &'static str,
        value: String,
        message: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub db_path: String,
    pub schema_path: String,
    pub firestore_project: Option<String>,
    pub firestore_api_key: Option<String>,
    /// Overrides the REST endpoint, e.g. `http://localhost:8080/v1` for the emulator.
    pub firestore_base_url: Option<String>,
    pub firestore_max_attempts: u64,
    /// JSON array of bids written into the local store at startup.
    pub seed_file: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            addr: try_load("BID_RADAR_ADDR", "127.0.0.1:3000")?,
            max_workers: try_load("BID_RADAR_WORKERS", "8")?,
            db_path: try_load("BID_RADAR_DB", "bid_radar.sqlite3")?,
            schema_path: try_load("BID_RADAR_SCHEMA", "sql/schema.sql")?,
            firestore_project: optional("FIRESTORE_PROJECT_ID"),
            firestore_api_key: optional("FIRESTORE_API_KEY"),
            firestore_base_url: optional("FIRESTORE_BASE_URL"),
            firestore_max_attempts: try_load("FIRESTORE_MAX_ATTEMPTS", "3")?,
            seed_file: optional("BID_RADAR_SEED_FILE"),
        })
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = optional(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            value: raw.clone(),
            message: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_defaults() {
        let workers: usize = try_load("BID_RADAR_TEST_UNSET_WORKERS", "8").unwrap();
        assert_eq!(workers, 8);
    }

    #[test]
    fn firestore_overrides_are_read() {
        env::set_var("FIRESTORE_BASE_URL", "http://localhost:8080/v1");
        env::set_var("FIRESTORE_MAX_ATTEMPTS", "5");
        let config = Config::load().unwrap();
        env::remove_var("FIRESTORE_BASE_URL");
        env::remove_var("FIRESTORE_MAX_ATTEMPTS");

        assert_eq!(config.firestore_base_url.as_deref(), Some("http://localhost:8080/v1"));
        assert_eq!(config.firestore_max_attempts, 5);
    }

    #[test]
    fn reports_unparseable_values() {
        env::set_var("BID_RADAR_TEST_BAD_ADDR", "not-an-address");
        let err = try_load::<SocketAddr>("BID_RADAR_TEST_BAD_ADDR", "127.0.0.1:3000").unwrap_err();
        assert!(err.to_string().contains("BID_RADAR_TEST_BAD_ADDR"));
    }
}
