//! Pending NDJSON batch and flush thresholds

use super::operation::BulkOperation;
use crate::config::BulkConfig;
use crate::utils::error::Result;

/// Payloads at or below this many bytes are suspicious once the operation limit is hit
const NEAR_EMPTY_PAYLOAD_BYTES: usize = 5;

/// Limits that trigger a flush
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub max_operations: usize,
    pub max_bytes: usize,
}

impl From<&BulkConfig> for Thresholds {
    fn from(config: &BulkConfig) -> Self {
        Self {
            max_operations: config.batch_size,
            max_bytes: config.batch_max_size_bytes,
        }
    }
}

/// Why a batch has to be flushed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushReason {
    /// Buffered bytes exceed the byte limit
    ByteLimit,
    /// Buffered operations reached the operation limit
    OperationLimit,
}

/// Operations accumulated since the last flush
///
/// `operation_count == 0` exactly when `payload` is empty.
#[derive(Debug, Default)]
pub struct PendingBatch {
    payload: String,
    operation_count: usize,
}

impl PendingBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.operation_count == 0
    }

    pub fn operation_count(&self) -> usize {
        self.operation_count
    }

    /// UTF-8 byte size of the buffered payload
    pub fn byte_size(&self) -> usize {
        self.payload.len()
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Encode and append one operation
    ///
    /// Encoding happens into a scratch buffer first, so a failure leaves the
    /// batch exactly as it was.
    pub fn push(&mut self, operation: &BulkOperation) -> Result<()> {
        let encoded = operation.to_ndjson()?;
        self.payload.push_str(&encoded);
        self.operation_count += 1;
        Ok(())
    }

    /// Decide whether the batch must be flushed; the byte limit wins
    pub fn flush_reason(&self, thresholds: &Thresholds) -> Option<FlushReason> {
        if self.byte_size() > thresholds.max_bytes {
            Some(FlushReason::ByteLimit)
        } else if self.operation_count >= thresholds.max_operations {
            Some(FlushReason::OperationLimit)
        } else {
            None
        }
    }

    /// Counted operations but almost no payload; points at a caller bug
    pub fn is_suspiciously_small(&self) -> bool {
        self.operation_count > 0 && self.byte_size() <= NEAR_EMPTY_PAYLOAD_BYTES
    }

    /// Take the payload and operation count, leaving the batch empty
    pub fn take(&mut self) -> (String, usize) {
        let count = std::mem::take(&mut self.operation_count);
        (std::mem::take(&mut self.payload), count)
    }
}
