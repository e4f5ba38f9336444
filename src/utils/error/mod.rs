//! Error handling for the bulk processor
//!
//! This module defines all error types used throughout the crate.

mod helpers;
mod types;

pub use types::{BulkError, Result};
