//! Configuration data models
//!
//! This module defines all configuration structures used by the bulk processor.

pub mod bulk;
pub mod http;
pub mod logging;

// Re-export all configuration types
pub use bulk::*;
pub use http::*;
pub use logging::*;

/// Default maximum number of operations per bulk request
pub fn default_batch_size() -> usize {
    1000
}

/// Default maximum bulk request body size in bytes
pub fn default_batch_max_size_bytes() -> usize {
    10 * 1024 * 1024 // 10MB
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    60
}

/// Default connect timeout in seconds
pub fn default_connect_timeout() -> u64 {
    10
}

/// Default HTTP user agent
pub fn default_user_agent() -> String {
    format!("bulk-processor-rs/{}", env!("CARGO_PKG_VERSION"))
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
