// Configuration model: the orchestration-supplied snapshot and the
// exporter's native configuration mapping

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Default location of the orchestration-supplied configuration snapshot.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/exporter-agent/config.yaml";

/// A scalar configuration value as delivered by the orchestration platform.
///
/// Values arrive loosely typed; a port can legitimately show up as `5000`
/// or `"5000"` and validation has to tell the difference between a value
/// that is unset and one that is present but malformed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    #[default]
    Null,
    Int(i64),
    String(String),
}

impl ConfigValue {
    /// Whether this value counts as "set". Null, the empty string and the
    /// integer zero all mean unset.
    pub fn is_set(&self) -> bool {
        match self {
            ConfigValue::Null => false,
            ConfigValue::Int(value) => *value != 0,
            ConfigValue::String(value) => !value.is_empty(),
        }
    }

    /// Integer view of the value, parsing string representations.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Null => None,
            ConfigValue::Int(value) => Some(*value),
            ConfigValue::String(value) => value.trim().parse().ok(),
        }
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

/// Immutable configuration snapshot supplied by the orchestration platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalConfig {
    #[serde(rename = "controller-url")]
    pub controller_url: ConfigValue,
    #[serde(rename = "juju-user")]
    pub juju_user: ConfigValue,
    #[serde(rename = "juju-password")]
    pub juju_password: ConfigValue,
    /// Scrape interval in minutes
    #[serde(rename = "scrape-interval")]
    pub scrape_interval: ConfigValue,
    #[serde(rename = "scrape-port")]
    pub scrape_port: ConfigValue,
    /// Scrape timeout in seconds
    #[serde(rename = "scrape-timeout")]
    pub scrape_timeout: ConfigValue,
}

impl Default for ExternalConfig {
    fn default() -> Self {
        Self {
            controller_url: ConfigValue::Null,
            juju_user: ConfigValue::Null,
            juju_password: ConfigValue::Null,
            scrape_interval: ConfigValue::Int(5),
            scrape_port: ConfigValue::Int(5000),
            scrape_timeout: ConfigValue::Int(30),
        }
    }
}

const NULL: ConfigValue = ConfigValue::Null;

impl ExternalConfig {
    /// Load a snapshot from path, falling back to defaults if not found
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: ExternalConfig = serde_yaml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Look up an option by its external name.
    pub fn option(&self, name: &str) -> &ConfigValue {
        match name {
            "controller-url" => &self.controller_url,
            "juju-user" => &self.juju_user,
            "juju-password" => &self.juju_password,
            "scrape-interval" => &self.scrape_interval,
            "scrape-port" => &self.scrape_port,
            "scrape-timeout" => &self.scrape_timeout,
            _ => &NULL,
        }
    }

    /// Scrape timeout in seconds, defaulting when unset or malformed.
    pub fn scrape_timeout_secs(&self) -> u64 {
        self.scrape_timeout
            .as_int()
            .and_then(|value| u64::try_from(value).ok())
            .unwrap_or(30)
    }
}

/// The exporter's native configuration mapping, written out as YAML.
///
/// Backed by an ordered map so repeated serialization of the same
/// configuration produces byte-identical output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NativeConfig(BTreeMap<String, ConfigValue>);

impl NativeConfig {
    pub fn insert(&mut self, key: &str, value: ConfigValue) {
        self.0.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Integer view of a key, if present and numeric.
    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(ConfigValue::as_int)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
