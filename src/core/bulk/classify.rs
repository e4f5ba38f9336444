//! Classification of bulk response items

use super::operation::OperationType;
use super::response::{BulkResponse, BulkResponseItem};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::error;

/// Outcome class of a processed item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Created,
    Updated,
    Deleted,
    #[serde(rename = "noop")]
    NoOp,
    Error,
}

impl OutcomeKind {
    /// Map a server `result` string; `None` for values this client does not know
    pub fn from_result(result: &str) -> Option<Self> {
        match result {
            "created" => Some(Self::Created),
            "updated" => Some(Self::Updated),
            "deleted" => Some(Self::Deleted),
            "noop" => Some(Self::NoOp),
            _ => None,
        }
    }
}

/// Classified outcome of a single operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkProcessedItem {
    pub outcome: OutcomeKind,
    pub operation: OperationType,
    pub index: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl BulkProcessedItem {
    /// Build from a response entry; an `error` always wins over `result`
    pub fn from_response_item(item: &BulkResponseItem) -> Option<Self> {
        let outcome = &item.outcome;
        let kind = if outcome.error.is_some() {
            OutcomeKind::Error
        } else {
            OutcomeKind::from_result(outcome.result.as_deref()?)?
        };

        Some(Self {
            outcome: kind,
            operation: item.operation,
            index: outcome.index.clone(),
            id: outcome.id.clone(),
            status: outcome.status,
            error: outcome.error.clone(),
        })
    }

    pub fn is_error(&self) -> bool {
        self.outcome == OutcomeKind::Error
    }

    /// `error.type`, when the server supplied one
    pub fn error_type(&self) -> Option<&str> {
        self.error.as_ref()?.get("type")?.as_str()
    }

    /// `error.reason`, when the server supplied one
    pub fn error_reason(&self) -> Option<&str> {
        self.error.as_ref()?.get("reason")?.as_str()
    }
}

/// Items of one response, bucketed by outcome
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedBatch {
    pub created: Vec<BulkProcessedItem>,
    pub updated: Vec<BulkProcessedItem>,
    pub deleted: Vec<BulkProcessedItem>,
    pub errors: Vec<BulkProcessedItem>,
    pub no_changes: Vec<BulkProcessedItem>,
    /// Items dropped because their `result` was not recognised
    pub unrecognized: usize,
}

impl ClassifiedBatch {
    pub fn from_items(items: &[BulkResponseItem]) -> Self {
        let mut batch = Self::default();

        for item in items {
            match BulkProcessedItem::from_response_item(item) {
                Some(processed) => batch.push(processed),
                None => {
                    batch.unrecognized += 1;
                    error!(
                        operation = %item.operation,
                        index = %item.outcome.index,
                        id = %item.outcome.id,
                        result = ?item.outcome.result,
                        "Unexpected result for bulk item, dropping it"
                    );
                }
            }
        }

        batch
    }

    fn push(&mut self, item: BulkProcessedItem) {
        let bucket = match item.outcome {
            OutcomeKind::Created => &mut self.created,
            OutcomeKind::Updated => &mut self.updated,
            OutcomeKind::Deleted => &mut self.deleted,
            OutcomeKind::NoOp => &mut self.no_changes,
            OutcomeKind::Error => &mut self.errors,
        };
        bucket.push(item);
    }

    /// Number of classified items across all buckets
    pub fn len(&self) -> usize {
        self.created.len()
            + self.updated.len()
            + self.deleted.len()
            + self.errors.len()
            + self.no_changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-batch figures for the summary log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub took: u64,
    pub has_errors: bool,
    pub errors: usize,
    /// Count per server `result` value, in first-seen order
    pub results: Vec<(String, usize)>,
}

impl BatchSummary {
    /// Tally a response; every action type is counted the same way
    pub fn from_response(response: &BulkResponse) -> Self {
        let mut errors = 0;
        let mut results: Vec<(String, usize)> = Vec::new();

        for item in &response.items {
            if item.outcome.error.is_some() {
                errors += 1;
                continue;
            }
            let result = item.outcome.result.as_deref().unwrap_or("unknown");
            match results.iter_mut().find(|(name, _)| name == result) {
                Some((_, count)) => *count += 1,
                None => results.push((result.to_string(), 1)),
            }
        }

        Self {
            took: response.took,
            has_errors: response.errors,
            errors,
            results,
        }
    }

    pub fn count(&self, result: &str) -> usize {
        self.results
            .iter()
            .find(|(name, _)| name == result)
            .map_or(0, |(_, count)| *count)
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "errors: {}", self.errors)?;
        for (name, count) in &self.results {
            write!(f, ",\t{}: {}", name, count)?;
        }
        Ok(())
    }
}
