//! Configuration loading tests

#[cfg(test)]
mod tests {
    use crate::{assert_err, assert_ok};
    use bulk_processor::config::LogFormat;
    use bulk_processor::{BulkError, BulkProcessor, Config};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_partial_file_uses_defaults() {
        let file = write_config("bulk:\n  root_url: \"https://es.example.com:9243/\"\n");
        let config = assert_ok!(Config::from_file(file.path()).await);

        assert_eq!(config.bulk.batch_size, 1000);
        assert_eq!(config.bulk.batch_max_size_bytes, 10 * 1024 * 1024);
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.bulk.bulk_url(), "https://es.example.com:9243/_bulk");
    }

    #[tokio::test]
    async fn test_processor_from_file() {
        let file = write_config(
            "bulk:\n  root_url: \"http://localhost:9200\"\n  batch_size: 5\nhttp:\n  timeout_secs: 5\n",
        );
        let config = assert_ok!(Config::from_file(file.path()).await);
        let processor = assert_ok!(BulkProcessor::from_config(&config));

        assert_eq!(processor.bulk_url(), "http://localhost:9200/_bulk");
        assert_eq!(processor.config().batch_size, 5);
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_yaml_error() {
        let file = write_config("bulk: [not, a, map\n");
        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(matches!(err, BulkError::Yaml(_)));
    }

    #[tokio::test]
    async fn test_missing_root_url_is_rejected() {
        let file = write_config("bulk:\n  batch_size: 5\n");
        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(matches!(err, BulkError::Config(msg) if msg.contains("root_url")));
    }

    #[tokio::test]
    async fn test_invalid_root_url_is_rejected() {
        let file = write_config("bulk:\n  root_url: \"ftp://example.com\"\n");
        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(matches!(err, BulkError::Config(msg) if msg.contains("Bulk config error")));
    }
}
