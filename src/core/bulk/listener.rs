//! Listener notification for processed batches

use super::classify::{BulkProcessedItem, ClassifiedBatch};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Receives the classified items of every flushed batch
///
/// Every callback has a no-op default, so implementors only override the
/// outcomes they care about. Callbacks are never invoked with an empty slice.
/// They run while the processor holds its batch lock and must not call back
/// into the processor.
pub trait BulkProcessorListener: Send + Sync {
    fn created(&self, _entries: &[BulkProcessedItem]) {}

    fn updated(&self, _entries: &[BulkProcessedItem]) {}

    fn deleted(&self, _entries: &[BulkProcessedItem]) {}

    fn errors(&self, _entries: &[BulkProcessedItem]) {}

    fn no_changes(&self, _entries: &[BulkProcessedItem]) {}
}

/// Insertion-ordered set of listeners, compared by reference
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: RwLock<Vec<Arc<dyn BulkProcessorListener>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, listener: Arc<dyn BulkProcessorListener>) {
        self.listeners.write().push(listener);
    }

    /// Remove the first registration of `listener`; returns whether one was found
    pub fn remove(&self, listener: &Arc<dyn BulkProcessorListener>) -> bool {
        let mut listeners = self.listeners.write();
        match listeners.iter().position(|l| Arc::ptr_eq(l, listener)) {
            Some(pos) => {
                listeners.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.read().is_empty()
    }

    /// Notify every listener in registration order, skipping empty buckets
    pub fn dispatch(&self, batch: &ClassifiedBatch) {
        // Snapshot so listeners may register or remove others from a callback
        let listeners: Vec<_> = self.listeners.read().clone();
        debug!(listeners = listeners.len(), items = batch.len(), "Dispatching bulk results");

        for listener in &listeners {
            if !batch.created.is_empty() {
                listener.created(&batch.created);
            }
            if !batch.updated.is_empty() {
                listener.updated(&batch.updated);
            }
            if !batch.deleted.is_empty() {
                listener.deleted(&batch.deleted);
            }
            if !batch.errors.is_empty() {
                listener.errors(&batch.errors);
            }
            if !batch.no_changes.is_empty() {
                listener.no_changes(&batch.no_changes);
            }
        }
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}
