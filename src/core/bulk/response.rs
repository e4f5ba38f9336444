//! Bulk response model
//!
//! A bulk response looks like:
//!
//! ```json
//! {"took": 30, "errors": true, "items": [
//!   {"index": {"_index": "docs", "_id": "1", "status": 201, "result": "created"}},
//!   {"delete": {"_index": "docs", "_id": "2", "status": 404, "error": {"type": "..."}}}
//! ]}
//! ```
//!
//! Each item is a single-key map naming the action; it is modelled as
//! [`BulkResponseItem`] carrying the [`OperationType`] and the [`ItemOutcome`].

use super::operation::OperationType;
use crate::utils::error::{BulkError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parsed body of a bulk response
#[derive(Debug, Clone, Deserialize)]
pub struct BulkResponse {
    /// Server-side processing time in milliseconds
    pub took: u64,
    /// Whether any item failed
    pub errors: bool,
    /// One entry per submitted operation, in submission order
    pub items: Vec<BulkResponseItem>,
}

impl BulkResponse {
    /// Parse a raw response body
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body)
            .map_err(|e| BulkError::parsing(format!("Invalid bulk response: {}", e)))
    }
}

/// Server-reported outcome of one operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOutcome {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

/// One response entry: the action it answers and its outcome
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "TaggedItem")]
pub struct BulkResponseItem {
    pub operation: OperationType,
    pub outcome: ItemOutcome,
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum TaggedItem {
    Index(ItemOutcome),
    Create(ItemOutcome),
    Update(ItemOutcome),
    Delete(ItemOutcome),
}

impl From<TaggedItem> for BulkResponseItem {
    fn from(item: TaggedItem) -> Self {
        let (operation, outcome) = match item {
            TaggedItem::Index(outcome) => (OperationType::Index, outcome),
            TaggedItem::Create(outcome) => (OperationType::Create, outcome),
            TaggedItem::Update(outcome) => (OperationType::Update, outcome),
            TaggedItem::Delete(outcome) => (OperationType::Delete, outcome),
        };
        Self { operation, outcome }
    }
}
