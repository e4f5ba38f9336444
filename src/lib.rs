//! # bulk-processor-rs
//!
//! Client-side batching for Elasticsearch-style `_bulk` endpoints.
//!
//! ## Features
//!
//! - **Batching**: index, create, update and delete calls are buffered as NDJSON
//! - **Thresholds**: a batch is sent once it reaches an operation count or byte size
//! - **Classification**: every response item is sorted into created, updated,
//!   deleted, no-change or error buckets
//! - **Listeners**: registered observers receive each non-empty bucket
//! - **Pluggable transport**: bring your own HTTP stack or use the bundled reqwest one
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bulk_processor::{BulkProcessor, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/bulk.yaml").await?;
//!     let processor = BulkProcessor::from_config(&config)?;
//!
//!     processor
//!         .index("articles", &serde_json::json!({"title": "Rust"}), Some("1"))
//!         .await?;
//!
//!     let stats = processor.close().await?;
//!     println!("{} created, {} errors", stats.created, stats.errors);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::{BulkConfig, Config};
pub use utils::error::{BulkError, Result};
pub use utils::logging::init_logging;

pub use core::bulk::{
    AggregateStats, BulkOperation, BulkProcessedItem, BulkProcessor, BulkProcessorListener,
    BulkTransport, OperationType, OutcomeKind, ReqwestTransport, TransportResponse,
};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Crate name
    pub name: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            name: NAME,
        }
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
