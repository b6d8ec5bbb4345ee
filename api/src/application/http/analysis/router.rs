use super::handlers::{
    analyze_text::{__path_analyze_text, analyze_text},
    classify_image::{__path_classify_image, MAX_IMAGE_SIZE, classify_image},
    get_ingredient::{__path_get_ingredient, get_ingredient},
    scan_barcode::{__path_scan_barcode, scan_barcode},
};
use crate::application::{
    client_context::client_context_middleware, http::server::app_state::AppState,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_text, classify_image, scan_barcode, get_ingredient))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analysis/text", state.args.server.root_path),
            post(analyze_text),
        )
        .route(
            &format!("{}/analysis/image", state.args.server.root_path),
            post(classify_image),
        )
        .route(
            &format!("{}/products/{{barcode}}", state.args.server.root_path),
            get(scan_barcode),
        )
        .route(
            &format!("{}/ingredients/{{name}}", state.args.server.root_path),
            get(get_ingredient),
        )
        .layer(middleware::from_fn(client_context_middleware))
        // Axum's default body limit (2 MB) is below the accepted image
        // size; leave headroom for multipart framing so the handler's
        // own size check governs.
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 1024 * 1024))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::http::server::http_server::state;
    use crate::args::{Args, LlmArgs, LogArgs, ProductDbArgs, RateLimitArgs, ServerArgs};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_args(max_requests: u32) -> Args {
        Args {
            server: ServerArgs {
                host: "127.0.0.1".to_string(),
                port: 0,
                root_path: String::new(),
                allowed_origins: vec!["http://localhost:3000".to_string()],
            },
            log: LogArgs {
                filter: "info".to_string(),
                json: false,
            },
            llm: LlmArgs {
                gemini_api_key: "test-key".to_string(),
                gemini_model: "gemini-2.0-flash".to_string(),
            },
            product_db: ProductDbArgs {
                base_url: "http://127.0.0.1:1".to_string(),
            },
            rate_limit: RateLimitArgs {
                max_requests,
                window_secs: 3600,
            },
        }
    }

    fn test_router(max_requests: u32) -> Router {
        let state = state(Arc::new(test_args(max_requests))).expect("state wires up");
        analysis_routes(state.clone()).with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    fn multipart_body(field_name: &str, payload: &[u8]) -> (String, Vec<u8>) {
        let boundary = "gutcheck-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field_name}\"; filename=\"label.jpg\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        (
            format!("multipart/form-data; boundary={boundary}"),
            body,
        )
    }

    #[tokio::test]
    async fn analyze_text_classifies_over_http() {
        let response = test_router(20)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analysis/text")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"ingredients_text":"woda, czosnek, sól"}"#,
                    ))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["status"], "RED");
        assert_eq!(json["data"]["found"][0], "Czosnek");
        assert_eq!(json["plausible_label"], true);
    }

    #[tokio::test]
    async fn analyze_text_rejects_empty_text() {
        let response = test_router(20)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analysis/text")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"ingredients_text":""}"#))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn ingredient_lookup_resolves_aliases_and_misses() {
        let router = test_router(20);

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/ingredients/proszek%20cebulowy")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["key"], "cebula");

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/ingredients/brak")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn image_route_accepts_bodies_beyond_two_megabytes() {
        // An exhausted rate budget makes the service reply before any
        // outbound vision call; reaching 429 proves a 3 MB body made it
        // through the extractor and the handler.
        let (content_type, body) = multipart_body("image", &vec![0u8; 3 * 1024 * 1024]);
        let response = test_router(0)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analysis/image")
                    .header(header::CONTENT_TYPE, content_type)
                    .body(Body::from(body))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(response.headers().contains_key(header::RETRY_AFTER));
    }

    #[tokio::test]
    async fn image_route_requires_the_image_field() {
        let (content_type, body) = multipart_body("attachment", b"not an image field");
        let response = test_router(20)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analysis/image")
                    .header(header::CONTENT_TYPE, content_type)
                    .body(Body::from(body))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Missing image field");
    }
}
