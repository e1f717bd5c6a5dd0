use std::path::PathBuf;
use thiserror::Error;

pub const CATALOG_VAR: &str = "CONNECTIONS_CATALOG";
pub const SEED_VAR: &str = "CONNECTIONS_SEED";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("couldn't load environment variable '{key}': {message}")]
pub struct ConfigError {
    key: &'static str,
    message: String,
}

/// Settings for the binary, read from the environment.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// JSON puzzle catalog to play from instead of the built-in one.
    pub catalog_path: Option<PathBuf>,
    /// Seed for a reproducible game.
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let catalog_path = get(CATALOG_VAR).map(PathBuf::from);
        let seed = match get(SEED_VAR) {
            Some(seed) => Some(seed.trim().parse::<u64>().map_err(|e| ConfigError {
                key: SEED_VAR,
                message: e.to_string(),
            })?),
            None => None,
        };

        Ok(Config { catalog_path, seed })
    }
}
