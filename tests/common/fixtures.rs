//! Test fixtures and data factories
//!
//! Builds bulk response bodies and a wiremock server standing in for the
//! `_bulk` endpoint.

use bulk_processor::{BulkConfig, BulkProcessor, Config};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Factory for bulk response bodies
pub struct BulkResponseFactory {
    took: u64,
    items: Vec<Value>,
}

impl BulkResponseFactory {
    pub fn new() -> Self {
        Self {
            took: 5,
            items: Vec::new(),
        }
    }

    pub fn took(mut self, took: u64) -> Self {
        self.took = took;
        self
    }

    /// Add an item with a `result`
    pub fn result(mut self, action: &str, id: &str, result: &str) -> Self {
        self.items.push(json!({
            action: {"_index": "docs", "_id": id, "status": 200, "result": result}
        }));
        self
    }

    /// Add an item carrying an `error`
    pub fn error(mut self, action: &str, id: &str, error_type: &str, reason: &str) -> Self {
        self.items.push(json!({
            action: {
                "_index": "docs",
                "_id": id,
                "status": 400,
                "error": {"type": error_type, "reason": reason}
            }
        }));
        self
    }

    pub fn build(self) -> Value {
        let errors = self
            .items
            .iter()
            .filter_map(Value::as_object)
            .flat_map(|item| item.values())
            .any(|outcome| outcome.get("error").is_some());
        json!({"took": self.took, "errors": errors, "items": self.items})
    }
}

impl Default for BulkResponseFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body where `n` index operations were all created
pub fn all_created(n: usize) -> Value {
    (0..n)
        .fold(BulkResponseFactory::new(), |factory, i| {
            factory.result("index", &i.to_string(), "created")
        })
        .build()
}

/// Start a mock server answering every `POST /_bulk` with `body`
pub async fn bulk_server(body: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/_bulk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

/// Processor pointed at `server` with the bundled reqwest transport
pub fn processor_for(server: &MockServer, batch_size: usize, max_bytes: usize) -> BulkProcessor {
    let config = Config {
        bulk: BulkConfig::new(server.uri())
            .with_batch_size(batch_size)
            .with_batch_max_size_bytes(max_bytes),
        ..Default::default()
    };
    BulkProcessor::from_config(&config).expect("valid test config")
}

/// Decode a received NDJSON body into its JSON lines
pub fn ndjson_lines(body: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(body)
        .lines()
        .map(|line| serde_json::from_str(line).expect("valid NDJSON line"))
        .collect()
}
