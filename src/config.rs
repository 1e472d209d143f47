//! Service configuration from the environment

use std::path::PathBuf;
use thiserror::Error;

use crate::related::TARGET;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub catalog_path: PathBuf,
    pub related_limit: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: 8083, catalog_path: PathBuf::from("data/catalog.json"), related_limit: TARGET }
    }
}

impl AppConfig {
    /// Reads `PORT`, `CATALOG_PATH` and `RELATED_PRODUCTS_LIMIT`, falling back
    /// to defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match lookup("PORT") {
            Some(v) => v.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue { key: "PORT", value: v })?,
            None => defaults.port,
        };
        let catalog_path = lookup("CATALOG_PATH").map(PathBuf::from).unwrap_or(defaults.catalog_path);
        let related_limit = match lookup("RELATED_PRODUCTS_LIMIT") {
            Some(v) => match v.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => return Err(ConfigError::InvalidValue { key: "RELATED_PRODUCTS_LIMIT", value: v }),
            },
            None => defaults.related_limit,
        };
        Ok(Self { port, catalog_path, related_limit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.port, 8083);
        assert_eq!(cfg.related_limit, 4);
        assert_eq!(cfg.catalog_path, PathBuf::from("data/catalog.json"));
    }

    #[test]
    fn test_overrides() {
        let cfg = AppConfig::from_lookup(lookup(&[("PORT", "9000"), ("CATALOG_PATH", "/srv/catalog.json"), ("RELATED_PRODUCTS_LIMIT", "6")])).unwrap();
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.related_limit, 6);
        assert_eq!(cfg.catalog_path, PathBuf::from("/srv/catalog.json"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(AppConfig::from_lookup(lookup(&[("PORT", "http")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("RELATED_PRODUCTS_LIMIT", "0")])).is_err());
    }
}
