//! Stress run configuration.
//!
//! Values are layered: built-in defaults, then an optional JSON file, then
//! command-line overrides. Validation runs on the merged result.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StressConfig {
    /// Ring capacity. Non-positive values are allowed and give a ring that
    /// rejects everything.
    pub capacity: i64,
    pub producers: usize,
    pub consumers: usize,
    /// Push attempts per producer thread.
    pub ops_per_producer: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            producers: 4,
            consumers: 4,
            ops_per_producer: 10_000,
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub capacity: Option<i64>,
    pub producers: Option<usize>,
    pub consumers: Option<usize>,
    pub ops_per_producer: Option<usize>,
}

impl StressConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&data)?;
        tracing::debug!("Loaded stress config from {:?}", path);
        Ok(config)
    }

    /// Merge defaults, an optional file and overrides, then validate.
    pub fn resolve(path: Option<&Path>, overrides: &Overrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(capacity) = overrides.capacity {
            config.capacity = capacity;
        }
        if let Some(producers) = overrides.producers {
            config.producers = producers;
        }
        if let Some(consumers) = overrides.consumers {
            config.consumers = consumers;
        }
        if let Some(ops) = overrides.ops_per_producer {
            config.ops_per_producer = ops;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.producers == 0 {
            return Err(ConfigError::Invalid(
                "at least one producer is required".to_string(),
            ));
        }
        if self.ops_per_producer == 0 {
            return Err(ConfigError::Invalid(
                "ops_per_producer must be at least 1".to_string(),
            ));
        }
        if self.producers.checked_mul(self.ops_per_producer).is_none() {
            return Err(ConfigError::Invalid(format!(
                "{} producers x {} ops overflows",
                self.producers, self.ops_per_producer
            )));
        }
        Ok(())
    }

    pub fn total_attempts(&self) -> usize {
        self.producers * self.ops_per_producer
    }
}
