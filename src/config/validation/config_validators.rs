//! Configuration validators

use super::trait_def::Validate;
use super::url::validate_endpoint_url;
use crate::config::models::*;
use reqwest::header::{HeaderName, HeaderValue};
use tracing::debug;

impl Validate for BulkConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating bulk configuration");

        validate_endpoint_url(&self.root_url, "Bulk root_url")?;

        if self.batch_size == 0 {
            return Err("Bulk batch_size must be greater than 0".to_string());
        }

        if self.batch_max_size_bytes == 0 {
            return Err("Bulk batch_max_size_bytes must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for HttpConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating HTTP configuration");

        if self.timeout_secs == 0 {
            return Err("HTTP timeout must be greater than 0".to_string());
        }

        if self.connect_timeout_secs == 0 {
            return Err("HTTP connect timeout must be greater than 0".to_string());
        }

        for (name, value) in &self.default_headers {
            HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| format!("Invalid header name '{}': {}", name, e))?;
            HeaderValue::from_str(value)
                .map_err(|e| format!("Invalid header value for '{}': {}", name, e))?;
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        match self.level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(()),
            other => Err(format!("Unknown log level: {}", other)),
        }
    }
}
