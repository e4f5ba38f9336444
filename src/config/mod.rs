//! Configuration management for the bulk processor
//!
//! This module handles loading, validation, and management of all processor configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{BulkError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Batching configuration
    #[serde(default)]
    pub bulk: BulkConfig,
    /// HTTP transport configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// Read failures surface as [`BulkError::Io`], malformed YAML as
    /// [`BulkError::Yaml`] and invalid values as [`BulkError::Config`].
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = serde_yaml::from_str(&content)?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Recognised keys: `BULK_ROOT_URL`, `BULK_BATCH_SIZE`, `BULK_BATCH_MAX_BYTES`,
    /// `BULK_HTTP_TIMEOUT`, `BULK_LOG_LEVEL`, `BULK_LOG_FORMAT`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(root_url) = lookup("BULK_ROOT_URL") {
            config.bulk.root_url = root_url;
        }
        if let Some(batch_size) = lookup("BULK_BATCH_SIZE") {
            config.bulk.batch_size = batch_size
                .parse()
                .map_err(|e| BulkError::Config(format!("Invalid batch size: {}", e)))?;
        }
        if let Some(max_bytes) = lookup("BULK_BATCH_MAX_BYTES") {
            config.bulk.batch_max_size_bytes = max_bytes
                .parse()
                .map_err(|e| BulkError::Config(format!("Invalid batch max bytes: {}", e)))?;
        }
        if let Some(timeout) = lookup("BULK_HTTP_TIMEOUT") {
            config.http.timeout_secs = timeout
                .parse()
                .map_err(|e| BulkError::Config(format!("Invalid timeout: {}", e)))?;
        }
        if let Some(level) = lookup("BULK_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(format) = lookup("BULK_LOG_FORMAT") {
            config.logging.format = format.parse().map_err(BulkError::Config)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.bulk
            .validate()
            .map_err(|e| BulkError::Config(format!("Bulk config error: {}", e)))?;

        self.http
            .validate()
            .map_err(|e| BulkError::Config(format!("HTTP config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| BulkError::Config(format!("Logging config error: {}", e)))?;

        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.bulk = self.bulk.merge(other.bulk);
        self.http = self.http.merge(other.http);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| BulkError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
