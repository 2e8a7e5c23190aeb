//! Server configuration read from the environment.

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

pub const ADDR_VAR: &str = "MATRIX_SERVER_ADDR";
pub const DATABASE_URL_VAR: &str = "MATRIX_DATABASE_URL";
pub const HISTORY_LIMIT_VAR: &str = "MATRIX_HISTORY_LIMIT";

const DEFAULT_ADDR: &str = "127.0.0.1:50051";
const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_HISTORY_LIMIT: u32 = 50;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    Addr { var: &'static str, value: String },

    #[error("{var} must be a positive integer, got {value}")]
    HistoryLimit { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    /// Rows returned by `History` when the request asks for 0.
    pub history_limit: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds a config from any variable source; unset variables fall back
    /// to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_value = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_value.parse().map_err(|_| ConfigError::Addr {
            var: ADDR_VAR,
            value: addr_value.clone(),
        })?;

        let database_url =
            lookup(DATABASE_URL_VAR).unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let history_limit = match lookup(HISTORY_LIMIT_VAR) {
            None => DEFAULT_HISTORY_LIMIT,
            Some(value) => match value.parse::<u32>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    return Err(ConfigError::HistoryLimit {
                        var: HISTORY_LIMIT_VAR,
                        value,
                    })
                }
            },
        };

        Ok(Self {
            addr,
            database_url,
            history_limit,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 50051)),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            (ADDR_VAR, "0.0.0.0:6000"),
            (DATABASE_URL_VAR, "sqlite://history.db"),
            (HISTORY_LIMIT_VAR, "10"),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 6000);
        assert_eq!(config.database_url, "sqlite://history.db");
        assert_eq!(config.history_limit, 10);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_lookup(lookup(&[(ADDR_VAR, "localhost")])),
            Err(ConfigError::Addr { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[(HISTORY_LIMIT_VAR, "0")])),
            Err(ConfigError::HistoryLimit { .. })
        ));
    }
}
