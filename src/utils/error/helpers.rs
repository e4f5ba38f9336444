//! Helper functions for creating specific error types

use super::types::BulkError;

/// Helper functions for creating specific errors
impl BulkError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport(message.into())
    }

    pub fn parsing<S: Into<String>>(message: S) -> Self {
        Self::Parsing(message.into())
    }

    pub fn encoding<S: Into<String>>(message: S) -> Self {
        Self::Encoding(message.into())
    }

    pub fn invalid_operation<S: Into<String>>(message: S) -> Self {
        Self::InvalidOperation(message.into())
    }
}

impl BulkError {
    /// Whether the error left the outcome of a sent batch unknown.
    ///
    /// The buffer is already cleared when this happens, so callers that need
    /// delivery guarantees must replay the original operations themselves.
    pub fn is_fatal_for_batch(&self) -> bool {
        matches!(self, Self::Parsing(_))
    }

    /// Whether the error came from the HTTP layer rather than the bulk protocol
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpClient(_) | Self::Transport(_))
    }
}
