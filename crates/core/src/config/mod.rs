// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reporter configuration
//!
//! ```toml
//! [collector]
//! base_uri = "https://collector.example.com"
//! token = "secret"
//! timeout = "30s"
//!
//! [logs]
//! max_chunk_size = 10240
//! flush_interval = "3s"
//! ```

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default chunk threshold in bytes
pub const DEFAULT_MAX_CHUNK_SIZE: NonZeroUsize = match NonZeroUsize::new(10 * 1024) {
    Some(n) => n,
    None => unreachable!(),
};

/// Default interval between scheduled flushes
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_secs(3);

/// Default request timeout for the collector
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Log writer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Chunk threshold in bytes; zero is rejected when parsing
    pub max_chunk_size: NonZeroUsize,
    #[serde(with = "humantime_serde")]
    pub flush_interval: Duration,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            flush_interval: DEFAULT_FLUSH_INTERVAL,
        }
    }
}

impl LogConfig {
    pub fn with_max_chunk_size(mut self, max_chunk_size: NonZeroUsize) -> Self {
        self.max_chunk_size = max_chunk_size;
        self
    }

    pub fn with_flush_interval(mut self, interval: Duration) -> Self {
        self.flush_interval = interval;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.flush_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "logs.flush_interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Where and how to reach the remote collector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorConfig {
    pub base_uri: String,
    pub token: String,
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

impl CollectorConfig {
    pub fn new(base_uri: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_uri.is_empty() {
            return Err(ConfigError::Invalid("base_uri cannot be empty".to_string()));
        }
        if self.token.is_empty() {
            return Err(ConfigError::Invalid("token cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Base URI with a scheme and without a trailing slash.
    ///
    /// `http://` is assumed when no scheme is given.
    pub fn base_url(&self) -> String {
        let has_scheme =
            self.base_uri.starts_with("http://") || self.base_uri.starts_with("https://");
        let mut url = if has_scheme {
            self.base_uri.clone()
        } else {
            format!("http://{}", self.base_uri)
        };
        if url.ends_with('/') {
            url.pop();
        }
        url
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReporterConfig {
    #[serde(default)]
    pub collector: Option<CollectorConfig>,
    #[serde(default)]
    pub logs: LogConfig,
}

impl ReporterConfig {
    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ReporterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logs.validate()?;
        if let Some(collector) = &self.collector {
            collector.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
