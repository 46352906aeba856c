use crate::{DEFAULT_POPULATE_DEPTH, read::ReadMode};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use tracing::debug;

pub const API_PREFIX_KEY: &str = "CMSWIRE_API_PREFIX";
pub const POPULATE_DEPTH_KEY: &str = "CMSWIRE_POPULATE_DEPTH";
pub const READ_MODE_KEY: &str = "CMSWIRE_READ_MODE";

pub const DEFAULT_API_PREFIX: &str = "/api";

///
/// ConfigError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

///
/// ClientConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix of every request path, without a trailing slash.
    pub api_prefix: String,
    pub populate_depth: usize,
    pub read_mode: ReadMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            populate_depth: DEFAULT_POPULATE_DEPTH,
            read_mode: ReadMode::default(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by whichever keys `lookup` knows.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(prefix) = lookup(API_PREFIX_KEY) {
            config.api_prefix = normalize_prefix(&prefix);
        }

        if let Some(depth) = lookup(POPULATE_DEPTH_KEY) {
            config.populate_depth = depth.trim().parse().map_err(|_| ConfigError::Invalid {
                key: POPULATE_DEPTH_KEY,
                value: depth.clone(),
            })?;
        }

        if let Some(mode) = lookup(READ_MODE_KEY) {
            config.read_mode = mode.parse().map_err(|_| ConfigError::Invalid {
                key: READ_MODE_KEY,
                value: mode.clone(),
            })?;
        }

        debug!(
            api_prefix = %config.api_prefix,
            populate_depth = config.populate_depth,
            read_mode = %config.read_mode,
            "client config loaded"
        );

        Ok(config)
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub fn with_api_prefix(mut self, prefix: &str) -> Self {
        self.api_prefix = normalize_prefix(prefix);
        self
    }

    #[must_use]
    pub const fn with_populate_depth(mut self, depth: usize) -> Self {
        self.populate_depth = depth;
        self
    }

    #[must_use]
    pub const fn with_read_mode(mut self, mode: ReadMode) -> Self {
        self.read_mode = mode;
        self
    }
}

// "/api/" and "api" both become "/api"; "/" becomes "".
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');

    if trimmed.is_empty() || trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();

        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.populate_depth, DEFAULT_POPULATE_DEPTH);
        assert_eq!(config.read_mode, ReadMode::Strict);
    }

    #[test]
    fn keys_override_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_PREFIX_KEY, "cms/v2/"),
            (POPULATE_DEPTH_KEY, " 5 "),
            (READ_MODE_KEY, "LENIENT"),
        ]))
        .unwrap();

        assert_eq!(config.api_prefix, "/cms/v2");
        assert_eq!(config.populate_depth, 5);
        assert_eq!(config.read_mode, ReadMode::Lenient);
    }

    #[test]
    fn invalid_values_name_their_key() {
        let err = ClientConfig::from_lookup(lookup(&[(POPULATE_DEPTH_KEY, "deep")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: POPULATE_DEPTH_KEY,
                value: "deep".to_string(),
            }
        );

        let err = ClientConfig::from_lookup(lookup(&[(READ_MODE_KEY, "loose")])).unwrap_err();
        assert!(err.to_string().contains(READ_MODE_KEY));
    }

    #[test]
    fn serde_document_fills_missing_fields_with_defaults() {
        let config: ClientConfig =
            serde_json::from_value(serde_json::json!({ "read_mode": "lenient" })).unwrap();

        assert_eq!(config.api_prefix, DEFAULT_API_PREFIX);
        assert_eq!(config.read_mode, ReadMode::Lenient);
    }

    #[test]
    fn prefixes_are_normalized() {
        assert_eq!(normalize_prefix("/api/"), "/api");
        assert_eq!(normalize_prefix("api"), "/api");
        assert_eq!(normalize_prefix("/"), "");
        assert_eq!(
            ClientConfig::default().with_api_prefix("").api_prefix,
            ""
        );
    }
}
