// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config service and storage port for the `contour` CLI.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// Key under which [`CliConfig`] is persisted.
pub const CLI_CONFIG_KEY: &str = "contour";

/// Storage port for raw config blobs (keyed by logical name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw config blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}

/// Serializes config values as JSON and delegates storage to a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Create a new service using the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Load and deserialize a config value for `key`. Returns `Ok(None)` if missing.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) => {
                if bytes.is_empty() {
                    return Ok(None);
                }
                let value = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            Err(ConfigError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Serialize and persist a config value for `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }
}

/// How `contour check` renders its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Persisted CLI preferences. Missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Regions smaller than this are reported without their outline.
    pub min_area: f32,
    /// Default report format.
    pub format: OutputFormat,
    /// Default `tracing` filter directive; `RUST_LOG` still applies.
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            min_area: 1.0,
            format: OutputFormat::Table,
            log_level: "info".to_owned(),
        }
    }
}

impl CliConfig {
    /// Applies command-line overrides on top of stored values.
    pub fn with_overrides(
        mut self,
        format: Option<OutputFormat>,
        min_area: Option<f32>,
        log_level: Option<&str>,
    ) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(min_area) = min_area {
            self.min_area = min_area;
        }
        if let Some(level) = log_level {
            level.clone_into(&mut self.log_level);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemStore {
        blobs: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl ConfigStore for MemStore {
        fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
            self.blobs
                .borrow()
                .get(key)
                .cloned()
                .ok_or(ConfigError::NotFound)
        }

        fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
            self.blobs.borrow_mut().insert(key.to_owned(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn missing_key_loads_as_none() {
        let service = ConfigService::new(MemStore::default());
        let loaded: Option<CliConfig> = service.load(CLI_CONFIG_KEY).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn saved_config_loads_back() {
        let service = ConfigService::new(MemStore::default());
        let cfg = CliConfig {
            min_area: 4.5,
            format: OutputFormat::Json,
            log_level: "debug".into(),
        };
        service.save(CLI_CONFIG_KEY, &cfg).unwrap();
        let loaded: Option<CliConfig> = service.load(CLI_CONFIG_KEY).unwrap();
        assert_eq!(loaded, Some(cfg));
    }

    #[test]
    fn partial_blob_fills_defaults() {
        let store = MemStore::default();
        store.save_raw(CLI_CONFIG_KEY, br#"{"format":"json"}"#).unwrap();
        let service = ConfigService::new(store);
        let loaded: CliConfig = service.load(CLI_CONFIG_KEY).unwrap().unwrap();
        assert_eq!(loaded.format, OutputFormat::Json);
        assert_eq!(loaded.min_area, 1.0);
    }

    #[test]
    fn malformed_blob_is_serde_error() {
        let store = MemStore::default();
        store.save_raw(CLI_CONFIG_KEY, b"{not json").unwrap();
        let service = ConfigService::new(store);
        let err = service.load::<CliConfig>(CLI_CONFIG_KEY).unwrap_err();
        assert!(matches!(err, ConfigError::Serde(_)));
    }

    #[test]
    fn overrides_win_over_stored_values() {
        let cfg = CliConfig::default().with_overrides(Some(OutputFormat::Json), None, Some("warn"));
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.min_area, 1.0);
        assert_eq!(cfg.log_level, "warn");
    }
}
