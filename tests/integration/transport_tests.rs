//! Reqwest transport tests against a mock HTTP server

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use bulk_processor::config::HttpConfig;
    use bulk_processor::{BulkTransport, ReqwestTransport};
    use bytes::Bytes;
    use std::collections::HashMap;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_post_sends_body_and_content_type() {
        let server = MockServer::start().await;
        let body = "{\"delete\":{\"_index\":\"docs\",\"_id\":\"1\"}}\n";
        Mock::given(method("POST"))
            .and(path("/_bulk"))
            .and(header("content-type", "application/x-ndjson"))
            .and(body_string(body))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"ok\":true}"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = assert_ok!(ReqwestTransport::new(&HttpConfig::default()));
        let response = assert_ok!(
            transport
                .post(
                    &format!("{}/_bulk", server.uri()),
                    "application/x-ndjson",
                    Bytes::from_static(body.as_bytes()),
                )
                .await
        );

        assert!(response.is_success());
        assert_eq!(response.body_text(), "{\"ok\":true}");
    }

    #[tokio::test]
    async fn test_default_headers_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("authorization", "ApiKey secret"))
            .and(header("user-agent", "bulk-test/1.0"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let config = HttpConfig {
            user_agent: "bulk-test/1.0".to_string(),
            default_headers: HashMap::from([(
                "Authorization".to_string(),
                "ApiKey secret".to_string(),
            )]),
            ..Default::default()
        };
        let transport = assert_ok!(ReqwestTransport::new(&config));

        let response = assert_ok!(
            transport
                .post(&server.uri(), "application/x-ndjson", Bytes::new())
                .await
        );
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_error_status_is_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let transport = assert_ok!(ReqwestTransport::new(&HttpConfig::default()));
        let response = assert_ok!(
            transport
                .post(&server.uri(), "application/x-ndjson", Bytes::from("x\n"))
                .await
        );

        assert_eq!(response.status, 503);
        assert!(!response.is_success());
        assert_eq!(response.body_text(), "unavailable");
    }

    #[tokio::test]
    async fn test_connection_failure_is_an_error() {
        let transport = assert_ok!(ReqwestTransport::new(&HttpConfig::default()));
        let result = transport
            .post("http://127.0.0.1:1/_bulk", "application/x-ndjson", Bytes::new())
            .await;

        let err = result.unwrap_err();
        assert!(err.is_transport());
    }
}
