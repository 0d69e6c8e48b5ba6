//! Configuration management for the price catalog tools.

use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::pricing::default_prices_url;
use crate::{Error, Result};

/// Default path of the generated price map, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "price_map.json";

/// Connection settings for the managed document database, loaded from
/// environment variables with a fallback default for every key.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    /// Account endpoint
    pub host: String,
    /// Account key; empty when not configured
    pub master_key: String,
    /// Database id
    pub database_id: String,
    /// Container id
    pub container_id: String,
}

impl DatabaseSettings {
    /// Load settings from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary lookup, falling back to defaults for
    /// missing keys.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            host: get("ACCOUNT_HOST", "https://localhost:8081/"),
            master_key: get("ACCOUNT_KEY", ""),
            database_id: get("COSMOS_DATABASE", "ToDoList"),
            container_id: get("COSMOS_CONTAINER", "Items"),
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.master_key.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("master_key", &key)
            .field("database_id", &self.database_id)
            .field("container_id", &self.container_id)
            .finish()
    }
}

/// Settings for the price fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// First page to request
    pub start_url: String,
    /// Where the aggregated price map is written
    pub output_path: PathBuf,
}

impl FetcherConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let start_url = lookup("PRICES_START_URL").unwrap_or_else(default_prices_url);
        if !(start_url.starts_with("https://") || start_url.starts_with("http://")) {
            return Err(Error::Config(format!(
                "PRICES_START_URL must be an http(s) URL, got {:?}",
                start_url
            )));
        }

        let output_path = lookup("PRICE_MAP_OUTPUT").unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());
        if output_path.trim().is_empty() {
            return Err(Error::Config("PRICE_MAP_OUTPUT must not be empty".to_string()));
        }

        Ok(Self {
            start_url,
            output_path: PathBuf::from(output_path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_database_defaults() {
        let settings = DatabaseSettings::from_lookup(lookup_from(&[]));
        assert_eq!(settings.host, "https://localhost:8081/");
        assert_eq!(settings.master_key, "");
        assert_eq!(settings.database_id, "ToDoList");
        assert_eq!(settings.container_id, "Items");
        assert_eq!(settings, DatabaseSettings::default());
    }

    #[test]
    fn test_database_overrides() {
        let settings = DatabaseSettings::from_lookup(lookup_from(&[
            ("ACCOUNT_HOST", "https://acct.documents.example.com:443/"),
            ("ACCOUNT_KEY", "c2VjcmV0"),
            ("COSMOS_CONTAINER", "Orders"),
        ]));
        assert_eq!(settings.host, "https://acct.documents.example.com:443/");
        assert_eq!(settings.master_key, "c2VjcmV0");
        assert_eq!(settings.database_id, "ToDoList");
        assert_eq!(settings.container_id, "Orders");
    }

    #[test]
    fn test_debug_redacts_key() {
        let settings = DatabaseSettings::from_lookup(lookup_from(&[("ACCOUNT_KEY", "c2VjcmV0")]));
        let printed = format!("{:?}", settings);
        assert!(!printed.contains("c2VjcmV0"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_fetcher_defaults() {
        let config = FetcherConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.start_url, default_prices_url());
        assert_eq!(config.output_path, PathBuf::from("price_map.json"));
    }

    #[test]
    fn test_fetcher_rejects_bad_values() {
        let err = FetcherConfig::from_lookup(lookup_from(&[("PRICES_START_URL", "ftp://x")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = FetcherConfig::from_lookup(lookup_from(&[("PRICE_MAP_OUTPUT", "  ")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
