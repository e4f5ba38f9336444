//! Bulk batching configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Batching thresholds and bulk endpoint location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkConfig {
    /// Root URL of the indexing backend; `/_bulk` is appended
    ///
    /// Has no default: an empty value fails validation.
    #[serde(default)]
    pub root_url: String,
    /// Flush once this many operations are buffered
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Flush once the buffered NDJSON exceeds this many bytes
    #[serde(default = "default_batch_max_size_bytes")]
    pub batch_max_size_bytes: usize,
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            root_url: String::new(),
            batch_size: default_batch_size(),
            batch_max_size_bytes: default_batch_max_size_bytes(),
        }
    }
}

impl BulkConfig {
    /// Create a configuration pointing at `root_url` with default thresholds
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
            ..Default::default()
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_batch_max_size_bytes(mut self, bytes: usize) -> Self {
        self.batch_max_size_bytes = bytes;
        self
    }

    /// Full URL of the bulk endpoint
    pub fn bulk_url(&self) -> String {
        format!("{}/_bulk", self.root_url.trim_end_matches('/'))
    }

    /// Merge bulk configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.root_url.is_empty() {
            self.root_url = other.root_url;
        }
        if other.batch_size != default_batch_size() {
            self.batch_size = other.batch_size;
        }
        if other.batch_max_size_bytes != default_batch_max_size_bytes() {
            self.batch_max_size_bytes = other.batch_max_size_bytes;
        }
        self
    }
}
