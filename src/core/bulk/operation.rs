//! Bulk operations and their NDJSON encoding
//!
//! Every operation becomes an action/metadata line, followed by a source line
//! for everything except deletes:
//!
//! ```text
//! {"index":{"_index":"docs","_id":"1"}}
//! {"title":"hello"}
//! {"delete":{"_index":"docs","_id":"2"}}
//! ```

use crate::utils::error::{BulkError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Action type of a bulk operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Index,
    Create,
    Update,
    Delete,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single document operation waiting to be batched
#[derive(Debug, Clone, PartialEq)]
pub enum BulkOperation {
    /// Index (create or replace) a document; the server assigns an id when absent
    Index {
        index: String,
        id: Option<String>,
        document: Value,
    },
    /// Create a document, failing if the id already exists
    Create {
        index: String,
        id: Option<String>,
        document: Value,
    },
    /// Partially update an existing document
    Update {
        index: String,
        id: String,
        document: Value,
    },
    /// Delete a document by id
    Delete { index: String, id: String },
}

#[derive(Serialize)]
struct ActionMetadata<'a> {
    #[serde(rename = "_index")]
    index: &'a str,
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum ActionLine<'a> {
    Index(ActionMetadata<'a>),
    Create(ActionMetadata<'a>),
    Update(ActionMetadata<'a>),
    Delete(ActionMetadata<'a>),
}

#[derive(Serialize)]
struct PartialDoc<'a> {
    doc: &'a Value,
}

impl BulkOperation {
    pub fn operation_type(&self) -> OperationType {
        match self {
            Self::Index { .. } => OperationType::Index,
            Self::Create { .. } => OperationType::Create,
            Self::Update { .. } => OperationType::Update,
            Self::Delete { .. } => OperationType::Delete,
        }
    }

    pub fn index(&self) -> &str {
        match self {
            Self::Index { index, .. }
            | Self::Create { index, .. }
            | Self::Update { index, .. }
            | Self::Delete { index, .. } => index,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Index { id, .. } | Self::Create { id, .. } => id.as_deref(),
            Self::Update { id, .. } | Self::Delete { id, .. } => Some(id),
        }
    }

    /// Reject operations the backend can never accept
    pub fn validate(&self) -> Result<()> {
        if self.index().is_empty() {
            return Err(BulkError::invalid_operation(format!(
                "{} operation requires a non-empty target index",
                self.operation_type()
            )));
        }
        if let Some(id) = self.id() {
            if id.is_empty() {
                return Err(BulkError::invalid_operation(format!(
                    "{} operation on index '{}' has an empty document id",
                    self.operation_type(),
                    self.index()
                )));
            }
        }
        Ok(())
    }

    /// Append this operation's NDJSON lines to `out`
    pub fn encode_into(&self, out: &mut String) -> Result<()> {
        let metadata = ActionMetadata {
            index: self.index(),
            id: self.id(),
        };
        let action = match self.operation_type() {
            OperationType::Index => ActionLine::Index(metadata),
            OperationType::Create => ActionLine::Create(metadata),
            OperationType::Update => ActionLine::Update(metadata),
            OperationType::Delete => ActionLine::Delete(metadata),
        };
        push_line(out, &action)?;

        match self {
            Self::Index { document, .. } | Self::Create { document, .. } => {
                push_line(out, document)?;
            }
            Self::Update { document, .. } => {
                push_line(out, &PartialDoc { doc: document })?;
            }
            Self::Delete { .. } => {}
        }

        Ok(())
    }

    /// Encode this operation into a fresh string
    pub fn to_ndjson(&self) -> Result<String> {
        let mut out = String::new();
        self.encode_into(&mut out)?;
        Ok(out)
    }
}

fn push_line<T: Serialize + ?Sized>(out: &mut String, value: &T) -> Result<()> {
    let line = serde_json::to_string(value).map_err(|e| BulkError::encoding(e.to_string()))?;
    out.push_str(&line);
    out.push('\n');
    Ok(())
}
