use axum::Json;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Method, Request, Uri, header};
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers::test_app_state;

/// Nothing listens on the discard port, so every upstream call fails fast.
const UNREACHABLE_ORIGIN: &str = "http://127.0.0.1:9";

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Backend stand-in that reports what it received.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> (StatusCode, Json<serde_json::Value>) {
    let authorization = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()).map(str::to_owned);
    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "method": method.as_str(),
            "uri": uri.to_string(),
            "authorization": authorization,
            "cookie": headers.contains_key(header::COOKIE),
            "body": body,
        })),
    )
}

/// Serve [`echo`] on an ephemeral port and return its origin.
async fn spawn_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, Router::new().fallback(echo)).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_returns_ok() {
    let app = api_routes(test_app_state(UNREACHABLE_ORIGIN));
    let response = app.oneshot(Request::get("/healthz").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn product_feed_reports_backend_failure() {
    let app = api_routes(test_app_state(UNREACHABLE_ORIGIN));
    let response = app.oneshot(Request::get("/api/products").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, serde_json::json!({ "error": "Failed to fetch products" }));
}

#[tokio::test]
async fn proxy_maps_unreachable_backend_to_bad_gateway() {
    let app = api_routes(test_app_state(UNREACHABLE_ORIGIN));
    let request = Request::post("/api/v1/auth/login/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"email":"a@b.test"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(body_json(response).await.get("error").is_some());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = api_routes(test_app_state(UNREACHABLE_ORIGIN));
    let response = app.oneshot(Request::get("/api/unknown").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_layer_only_when_enabled() {
    let preflight = || {
        Request::builder()
            .method("OPTIONS")
            .uri("/healthz")
            .header(header::ORIGIN, "http://elsewhere.test")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap()
    };

    let closed = api_routes(test_app_state(UNREACHABLE_ORIGIN));
    let response = closed.oneshot(preflight()).await.unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());

    let mut state = test_app_state(UNREACHABLE_ORIGIN);
    state.config = std::sync::Arc::new(crate::config::Config {
        cors_allow_any: true,
        ..(*state.config).clone()
    });
    let open = api_routes(state);
    let response = open.oneshot(preflight()).await.unwrap();
    assert_eq!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
}

#[tokio::test]
async fn proxy_replays_request_and_returns_backend_response() {
    let origin = spawn_backend().await;
    let app = api_routes(test_app_state(&origin));
    let request = Request::patch("/api/v1/me/basket-items/7/?expand=good")
        .header(header::AUTHORIZATION, "Bearer tok")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, "session=1")
        .body(Body::from(r#"{"quantity":3}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
    let echoed = body_json(response).await;
    assert_eq!(echoed["method"], "PATCH");
    assert_eq!(echoed["uri"], "/api/v1/me/basket-items/7/?expand=good");
    assert_eq!(echoed["authorization"], "Bearer tok");
    assert_eq!(echoed["cookie"], false);
    assert_eq!(echoed["body"], r#"{"quantity":3}"#);
}

#[tokio::test]
async fn product_feed_returns_backend_page() {
    let origin = spawn_backend().await;
    let app = api_routes(test_app_state(&origin));
    let response = app.oneshot(Request::get("/api/products").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let echoed = body_json(response).await;
    assert_eq!(echoed["method"], "GET");
    assert_eq!(echoed["uri"], "/api/v1/goods/");
}
