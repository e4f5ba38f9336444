//! Bulk indexing client
//!
//! Turns a stream of individual document operations into size-bounded
//! `_bulk` requests, classifies the per-item results and reports them to
//! listeners and aggregate statistics.
//!
//! - `operation`: operations and their NDJSON encoding
//! - `batch`: the pending buffer and flush thresholds
//! - `transport`: HTTP seam and the reqwest implementation
//! - `response`: bulk response model
//! - `classify`: outcome classification and per-batch summary
//! - `listener`: listener trait and registry
//! - `stats`: aggregate statistics
//! - `processor`: the processor tying it all together

pub mod batch;
pub mod classify;
pub mod listener;
pub mod operation;
pub mod processor;
pub mod response;
pub mod stats;
pub mod transport;

pub use batch::{FlushReason, PendingBatch, Thresholds};
pub use classify::{BatchSummary, BulkProcessedItem, ClassifiedBatch, OutcomeKind};
pub use listener::{BulkProcessorListener, ListenerRegistry};
pub use operation::{BulkOperation, OperationType};
pub use processor::BulkProcessor;
pub use response::{BulkResponse, BulkResponseItem, ItemOutcome};
pub use stats::AggregateStats;
pub use transport::{BulkTransport, NDJSON_CONTENT_TYPE, ReqwestTransport, TransportResponse};
