//! Running totals over every batch a processor has flushed

use super::classify::{BulkProcessedItem, ClassifiedBatch};
use serde::{Deserialize, Serialize};

/// Aggregate outcome counters, monotonically increasing for a processor's lifetime
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub created: u64,
    pub updated: u64,
    pub deleted: u64,
    pub no_changes: u64,
    pub errors: u64,
    /// Every item that came back with an error
    pub error_entries: Vec<BulkProcessedItem>,
    /// Flushes whose response was parsed and classified
    pub batches: u64,
    /// Operations handed to the transport, whether or not the response parsed
    pub operations_sent: u64,
}

impl AggregateStats {
    /// Fold one classified batch into the totals
    pub fn record(&mut self, batch: &ClassifiedBatch) {
        self.created += batch.created.len() as u64;
        self.updated += batch.updated.len() as u64;
        self.deleted += batch.deleted.len() as u64;
        self.no_changes += batch.no_changes.len() as u64;
        self.errors += batch.errors.len() as u64;
        self.error_entries.extend(batch.errors.iter().cloned());
        self.batches += 1;
    }

    pub fn record_sent(&mut self, operations: usize) {
        self.operations_sent += operations as u64;
    }

    /// Items that reached a known outcome
    pub fn total_processed(&self) -> u64 {
        self.created + self.updated + self.deleted + self.no_changes + self.errors
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}
