//! Listener doubles

use bulk_processor::{BulkProcessedItem, BulkProcessorListener};
use parking_lot::Mutex;
use std::sync::Arc;

/// Records every callback as `(slot, ids)`
#[derive(Default)]
pub struct RecordingListener {
    calls: Mutex<Vec<(&'static str, Vec<String>)>>,
}

impl RecordingListener {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<(&'static str, Vec<String>)> {
        self.calls.lock().clone()
    }

    /// Ids delivered to `slot`, flattened across calls
    pub fn ids(&self, slot: &str) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter(|(name, _)| *name == slot)
            .flat_map(|(_, ids)| ids.clone())
            .collect()
    }

    fn record(&self, slot: &'static str, entries: &[BulkProcessedItem]) {
        assert!(!entries.is_empty(), "listener slot {} called with no entries", slot);
        self.calls
            .lock()
            .push((slot, entries.iter().map(|e| e.id.clone()).collect()));
    }
}

impl BulkProcessorListener for RecordingListener {
    fn created(&self, entries: &[BulkProcessedItem]) {
        self.record("created", entries);
    }

    fn updated(&self, entries: &[BulkProcessedItem]) {
        self.record("updated", entries);
    }

    fn deleted(&self, entries: &[BulkProcessedItem]) {
        self.record("deleted", entries);
    }

    fn errors(&self, entries: &[BulkProcessedItem]) {
        self.record("errors", entries);
    }

    fn no_changes(&self, entries: &[BulkProcessedItem]) {
        self.record("no_changes", entries);
    }
}

/// Listener that only cares about errors
#[derive(Default)]
pub struct ErrorCounter {
    pub count: Mutex<usize>,
}

impl BulkProcessorListener for ErrorCounter {
    fn errors(&self, entries: &[BulkProcessedItem]) {
        *self.count.lock() += entries.len();
    }
}
