//! Integration tests for bulk-processor-rs
//!
//! These tests drive the public API against a fake `_bulk` endpoint and
//! real configuration files.

pub mod config_tests;
pub mod listener_tests;
pub mod transport_tests;
