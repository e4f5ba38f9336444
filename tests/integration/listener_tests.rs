//! Listener dispatch through a live processor

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::fixtures::{BulkResponseFactory, bulk_server, processor_for};
    use crate::common::listeners::{ErrorCounter, RecordingListener};
    use bulk_processor::BulkProcessorListener;
    use serde_json::json;
    use std::sync::Arc;

    fn mixed_response() -> serde_json::Value {
        BulkResponseFactory::new()
            .result("index", "a", "created")
            .result("index", "b", "updated")
            .error("index", "c", "version_conflict_engine_exception", "conflict")
            .result("index", "d", "created")
            .build()
    }

    async fn send_four(processor: &bulk_processor::BulkProcessor) {
        for id in ["a", "b", "c", "d"] {
            assert_ok!(processor.index("docs", &json!({"id": id}), Some(id)).await);
        }
    }

    #[tokio::test]
    async fn test_every_listener_sees_each_bucket_once() {
        let server = bulk_server(mixed_response()).await;
        let processor = processor_for(&server, 4, 1_000_000);

        let first = RecordingListener::shared();
        let second = RecordingListener::shared();
        processor.add_listener(first.clone());
        processor.add_listener(second.clone());

        send_four(&processor).await;

        for listener in [&first, &second] {
            assert_eq!(
                listener.calls(),
                vec![
                    ("created", vec!["a".to_string(), "d".to_string()]),
                    ("updated", vec!["b".to_string()]),
                    ("errors", vec!["c".to_string()]),
                ]
            );
        }
    }

    #[tokio::test]
    async fn test_partial_listener_only_overrides_errors() {
        let server = bulk_server(mixed_response()).await;
        let processor = processor_for(&server, 4, 1_000_000);

        let counter = Arc::new(ErrorCounter::default());
        processor.add_listener(counter.clone());

        send_four(&processor).await;
        send_four(&processor).await;

        assert_eq!(*counter.count.lock(), 2);
    }

    #[tokio::test]
    async fn test_removed_listener_stops_receiving() {
        let server = bulk_server(mixed_response()).await;
        let processor = processor_for(&server, 4, 1_000_000);

        let kept = RecordingListener::shared();
        let removed = RecordingListener::shared();
        let removed_handle: Arc<dyn BulkProcessorListener> = removed.clone();
        processor.add_listener(kept.clone());
        processor.add_listener(removed_handle.clone());

        send_four(&processor).await;
        assert!(processor.remove_listener(&removed_handle));
        assert!(!processor.remove_listener(&removed_handle));
        assert_eq!(processor.listener_count(), 1);
        send_four(&processor).await;

        assert_eq!(kept.calls().len(), 6);
        assert_eq!(removed.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_no_listeners_still_counts() {
        let server = bulk_server(mixed_response()).await;
        let processor = processor_for(&server, 4, 1_000_000);

        send_four(&processor).await;

        let stats = assert_ok!(processor.close().await);
        assert_eq!(stats.created, 2);
        assert_eq!(stats.updated, 1);
        assert_eq!(stats.errors, 1);
    }
}
