//! Core functionality for the bulk processor
//!
//! This module contains the batching, classification and dispatch logic.

pub mod bulk;
