//! Configuration lue depuis l'environnement (et un éventuel fichier `.env`).

use std::{path::PathBuf, str::FromStr};

use dotenv::dotenv;
use log::LevelFilter;
use thiserror::Error;

use crate::consts::DEFAULT_LOG_FILE;

pub const LOG_FILE_VAR: &str = "SNACKPOS_LOG_FILE";
pub const LOG_LEVEL_VAR: &str = "SNACKPOS_LOG_LEVEL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level in SNACKPOS_LOG_LEVEL: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Charge `.env` s'il existe, puis lit les variables d'environnement.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(LOG_FILE_VAR).filter(|p| !p.trim().is_empty()) {
            config.log_file = PathBuf::from(path);
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level =
                LevelFilter::from_str(level.trim()).map_err(|_| ConfigError::InvalidLogLevel(level))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_in(&[
            (LOG_FILE_VAR, "/tmp/pos.log"),
            (LOG_LEVEL_VAR, "debug"),
        ]))
        .unwrap();
        assert_eq!(config.log_file, PathBuf::from("/tmp/pos.log"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_level() {
        let result = Config::from_lookup(lookup_in(&[(LOG_LEVEL_VAR, "loud")]));
        assert!(matches!(result, Err(ConfigError::InvalidLogLevel(level)) if level == "loud"));
    }
}
