//! Bulk processor: accumulate, flush, classify, notify

use super::batch::{FlushReason, PendingBatch, Thresholds};
use super::classify::{BatchSummary, ClassifiedBatch};
use super::listener::{BulkProcessorListener, ListenerRegistry};
use super::operation::BulkOperation;
use super::response::BulkResponse;
use super::stats::AggregateStats;
use super::transport::{BulkTransport, NDJSON_CONTENT_TYPE, ReqwestTransport, TransportResponse};
use crate::config::{BulkConfig, Config, Validate};
use crate::utils::error::{BulkError, Result};
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Buffer and totals, always mutated together under one lock
#[derive(Debug, Default)]
struct ProcessorState {
    batch: PendingBatch,
    stats: AggregateStats,
}

/// Batches document operations into bulk requests
///
/// Each operation call appends to an in-memory NDJSON buffer and flushes it
/// through the transport once a threshold is crossed. Appending, the
/// threshold checks and the flush itself run under a single async mutex, so
/// an `Arc<BulkProcessor>` can be shared between producers; a producer that
/// triggers a flush waits for the round trip to finish.
///
/// ```rust,no_run
/// use bulk_processor::{BulkConfig, BulkProcessor, ReqwestTransport};
/// use bulk_processor::config::HttpConfig;
/// use std::sync::Arc;
///
/// # async fn run() -> bulk_processor::Result<()> {
/// let transport = Arc::new(ReqwestTransport::new(&HttpConfig::default())?);
/// let processor = BulkProcessor::new(BulkConfig::new("http://localhost:9200"), transport)?;
///
/// processor.index("docs", &serde_json::json!({"title": "hello"}), None).await?;
/// processor.delete("docs", "stale-id").await?;
///
/// let stats = processor.close().await?;
/// println!("created {} documents", stats.created);
/// # Ok(())
/// # }
/// ```
pub struct BulkProcessor {
    config: BulkConfig,
    bulk_url: String,
    thresholds: Thresholds,
    transport: Arc<dyn BulkTransport>,
    listeners: ListenerRegistry,
    state: Mutex<ProcessorState>,
}

impl BulkProcessor {
    /// Create a processor that sends batches through `transport`
    pub fn new(config: BulkConfig, transport: Arc<dyn BulkTransport>) -> Result<Self> {
        config.validate().map_err(BulkError::Config)?;

        let bulk_url = config.bulk_url();
        let thresholds = Thresholds::from(&config);
        info!(
            url = %bulk_url,
            batch_size = config.batch_size,
            batch_max_size_bytes = config.batch_max_size_bytes,
            "Bulk processor created"
        );

        Ok(Self {
            config,
            bulk_url,
            thresholds,
            transport,
            listeners: ListenerRegistry::new(),
            state: Mutex::new(ProcessorState::default()),
        })
    }

    /// Create a processor using the bundled reqwest transport
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config.http)?;
        Self::new(config.bulk.clone(), Arc::new(transport))
    }

    pub fn config(&self) -> &BulkConfig {
        &self.config
    }

    pub fn bulk_url(&self) -> &str {
        &self.bulk_url
    }

    /// Index a document, letting the server assign an id when `id` is `None`
    pub async fn index<T>(&self, index: &str, document: &T, id: Option<&str>) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.submit(BulkOperation::Index {
            index: index.to_string(),
            id: id.map(str::to_string),
            document: to_document(document)?,
        })
        .await
    }

    /// Create a document; the backend rejects it if the id already exists
    pub async fn create<T>(&self, index: &str, document: &T, id: Option<&str>) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.submit(BulkOperation::Create {
            index: index.to_string(),
            id: id.map(str::to_string),
            document: to_document(document)?,
        })
        .await
    }

    /// Partially update the document `id` with the fields of `document`
    pub async fn update<T>(&self, index: &str, document: &T, id: &str) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.submit(BulkOperation::Update {
            index: index.to_string(),
            id: id.to_string(),
            document: to_document(document)?,
        })
        .await
    }

    /// Delete the document `id`
    pub async fn delete(&self, index: &str, id: &str) -> Result<()> {
        self.submit(BulkOperation::Delete {
            index: index.to_string(),
            id: id.to_string(),
        })
        .await
    }

    /// Buffer an operation, flushing before and after as thresholds require
    pub async fn submit(&self, operation: BulkOperation) -> Result<()> {
        operation.validate()?;

        let mut state = self.state.lock().await;
        self.flush_if_needed(&mut state).await?;
        state.batch.push(&operation)?;
        self.flush_if_needed(&mut state).await
    }

    /// Send whatever is buffered; a no-op when the buffer is empty
    pub async fn flush(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        self.process_batch(&mut state).await
    }

    /// Flush the remaining operations and return the accumulated totals
    ///
    /// Safe to call more than once; later calls find the buffer empty.
    pub async fn close(&self) -> Result<AggregateStats> {
        let mut state = self.state.lock().await;
        self.process_batch(&mut state).await?;
        info!(
            created = state.stats.created,
            updated = state.stats.updated,
            deleted = state.stats.deleted,
            errors = state.stats.errors,
            "Bulk processor closed"
        );
        Ok(state.stats.clone())
    }

    /// Snapshot of the totals so far
    pub async fn stats(&self) -> AggregateStats {
        self.state.lock().await.stats.clone()
    }

    pub async fn pending_operations(&self) -> usize {
        self.state.lock().await.batch.operation_count()
    }

    pub async fn pending_bytes(&self) -> usize {
        self.state.lock().await.batch.byte_size()
    }

    pub fn add_listener(&self, listener: Arc<dyn BulkProcessorListener>) {
        self.listeners.add(listener);
    }

    /// Remove a listener by reference; returns whether it was registered
    pub fn remove_listener(&self, listener: &Arc<dyn BulkProcessorListener>) -> bool {
        self.listeners.remove(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    async fn flush_if_needed(&self, state: &mut ProcessorState) -> Result<()> {
        match state.batch.flush_reason(&self.thresholds) {
            Some(FlushReason::ByteLimit) => {
                warn!(
                    bytes = state.batch.byte_size(),
                    limit = self.thresholds.max_bytes,
                    "Batch exceeds byte limit, processing it before accepting more"
                );
                self.process_batch(state).await
            }
            Some(FlushReason::OperationLimit) => {
                if state.batch.is_suspiciously_small() {
                    warn!(
                        batch_size = self.thresholds.max_operations,
                        bytes = state.batch.byte_size(),
                        content = state.batch.payload(),
                        "Batch size reached but payload is almost empty"
                    );
                }
                self.process_batch(state).await
            }
            None => Ok(()),
        }
    }

    async fn process_batch(&self, state: &mut ProcessorState) -> Result<()> {
        if state.batch.is_empty() {
            warn!("Request to process batch was made, but batch is currently empty");
            return Ok(());
        }

        // Reset before sending: a batch is never resent by the processor
        let (payload, operations) = state.batch.take();
        state.stats.record_sent(operations);
        info!(operations, bytes = payload.len(), "Processing bulk batch");

        let response = self
            .transport
            .post(&self.bulk_url, NDJSON_CONTENT_TYPE, Bytes::from(payload))
            .await?;

        if response.status >= 400 {
            error!(
                status = response.status,
                body = %response.body_text(),
                "Bulk request returned error status"
            );
        }

        self.handle_response(state, &response).inspect_err(|e| {
            error!(
                error = %e,
                status = response.status,
                body = %response.body_text(),
                "Failed to process bulk response"
            );
        })
    }

    fn handle_response(&self, state: &mut ProcessorState, response: &TransportResponse) -> Result<()> {
        let parsed = BulkResponse::from_slice(&response.body)?;

        let classified = ClassifiedBatch::from_items(&parsed.items);
        self.listeners.dispatch(&classified);
        state.stats.record(&classified);

        if parsed.errors {
            error!("An error occurred while performing the bulk request");
        }
        for item in &classified.errors {
            error!(
                "Error of type: {}. Caused by: {}. For document id: {}, in index: {}",
                item.error_type().unwrap_or("unknown"),
                item.error_reason().unwrap_or("unknown"),
                item.id,
                item.index
            );
        }

        let summary = BatchSummary::from_response(&parsed);
        info!(
            "Bulk request took: {}, with the following results: {}",
            summary.took, summary
        );
        debug!(items = parsed.items.len(), classified = classified.len(), "Batch classified");

        Ok(())
    }
}

impl std::fmt::Debug for BulkProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BulkProcessor")
            .field("bulk_url", &self.bulk_url)
            .field("thresholds", &self.thresholds)
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl Drop for BulkProcessor {
    fn drop(&mut self) {
        let pending = self.state.get_mut().batch.operation_count();
        if pending > 0 {
            warn!(
                pending,
                "Bulk processor dropped without close(), buffered operations were not sent"
            );
        }
    }
}

fn to_document<T: Serialize + ?Sized>(document: &T) -> Result<Value> {
    serde_json::to_value(document)
        .map_err(|e| BulkError::encoding(format!("Document is not valid JSON: {}", e)))
}
