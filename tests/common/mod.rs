//! Common test utilities for bulk-processor-rs
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{fixtures, listeners::RecordingListener};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let server = fixtures::bulk_server(fixtures::all_created(2)).await;
//!     let listener = RecordingListener::shared();
//!     // ...
//! }
//! ```

pub mod fixtures;
pub mod listeners;

pub use fixtures::BulkResponseFactory;
pub use listeners::RecordingListener;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
