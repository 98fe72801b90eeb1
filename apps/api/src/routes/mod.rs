pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ads::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/generate-ads",
            post(handlers::handle_generate_ads).fallback(handlers::handle_method_not_allowed),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::{CompletionService, LlmError};

    /// Stub completion service that counts calls and replays a fixed reply.
    struct StubCompletion {
        reply: Option<String>,
        calls: AtomicUsize,
    }

    impl StubCompletion {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(text.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl CompletionService for StubCompletion {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone().ok_or_else(|| LlmError::Api {
                status: 401,
                message: "Incorrect API key provided".to_string(),
            })
        }
    }

    fn app(stub: Arc<StubCompletion>) -> Router {
        build_router(AppState { llm: stub })
    }

    fn generate_request(method: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri("/api/generate-ads")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        serde_json::from_slice(&body).expect("json parse")
    }

    #[tokio::test]
    async fn test_generate_returns_parsed_candidates() {
        let stub = StubCompletion::replying(
            "Ad 1:\nPrimary Text: Buy Acme today\nHeadline: Acme Rocks\n\n\
             Ad 2:\nPrimary Text: Acme saves time\nHeadline: Try Acme",
        );
        let response = app(stub.clone())
            .oneshot(generate_request("POST", json!({"brandName": "Acme"})))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(
            json,
            json!({
                "ads": [
                    {"headline": "Acme Rocks", "primaryText": "Buy Acme today"},
                    {"headline": "Try Acme", "primaryText": "Acme saves time"}
                ]
            })
        );
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generate_failure_is_server_error_without_ads() {
        let stub = StubCompletion::failing();
        let response = app(stub.clone())
            .oneshot(generate_request("POST", json!({"brandName": "Acme"})))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = read_json(response).await;
        assert!(!json["message"].as_str().unwrap_or_default().is_empty());
        assert!(json["error"]
            .as_str()
            .unwrap_or_default()
            .contains("Incorrect API key"));
        assert!(json.get("ads").is_none());
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_non_post_is_rejected_without_calling_llm() {
        for method in ["GET", "PUT", "DELETE", "PATCH"] {
            let stub = StubCompletion::replying("unused");
            let response = app(stub.clone())
                .oneshot(generate_request(method, json!({"brandName": "Acme"})))
                .await
                .expect("response");

            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
            let json = read_json(response).await;
            assert_eq!(json["message"], "Method not allowed");
            assert_eq!(stub.calls.load(Ordering::SeqCst), 0, "{method}");
        }
    }

    #[tokio::test]
    async fn test_null_brief_fields_are_accepted() {
        let stub =
            StubCompletion::replying("Ad 1:\nPrimary Text: Buy Acme today\nHeadline: Acme Rocks");
        let response = app(stub.clone())
            .oneshot(generate_request(
                "POST",
                json!({"brandName": "Acme", "csvData": null}),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(json["ads"][0]["headline"], "Acme Rocks");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_completion_returns_empty_list() {
        let stub = StubCompletion::replying("");
        let response = app(stub)
            .oneshot(generate_request("POST", json!({})))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({"ads": []}));
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(StubCompletion::replying(""))
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "headline-api");
    }
}
