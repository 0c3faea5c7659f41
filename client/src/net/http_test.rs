use super::*;
use crate::net::types::{Category, Page};

// =============================================================
// Request planning
// =============================================================

#[test]
fn public_read_never_carries_token() {
    let plan = plan(Method::Get, "/api/v1/goods/", Some("tok")).expect("plan");
    assert_eq!(plan.bearer, None);
    assert!(plan.url.ends_with("/api/v1/goods/"));
}

#[test]
fn protected_call_attaches_bearer() {
    let plan = plan(Method::Get, "/api/v1/me/basket-items/", Some("tok")).expect("plan");
    assert_eq!(plan.bearer.as_deref(), Some("tok"));
}

#[test]
fn protected_call_without_token_fails_fast() {
    assert_eq!(plan(Method::Get, "/api/v1/me/basket/", None), Err(ApiError::NotAuthenticated));
    assert_eq!(plan(Method::Patch, "/api/v1/me/basket-items/3/", Some("")), Err(ApiError::NotAuthenticated));
}

#[test]
fn login_does_not_need_token() {
    let plan = plan(Method::Post, "/api/v1/auth/login/", None).expect("plan");
    assert_eq!(plan.bearer, None);
}

#[test]
fn cursor_url_is_reanchored() {
    let plan = plan(Method::Get, "http://backend:8000/api/v1/goods/?page=2", None).expect("plan");
    assert!(plan.url.ends_with("/api/v1/goods/?page=2"));
    assert!(!plan.url.contains("backend:8000"));
}

#[test]
fn delete_does_not_expect_body() {
    let plan = plan(Method::Delete, "/api/v1/me/basket-items/1/", Some("tok")).expect("plan");
    assert!(!plan.expects_body());
}

// =============================================================
// Status handling
// =============================================================

#[test]
fn unauthorized_clears_stored_session() {
    let failure = status_failure(401, r#"{"detail":"Token expired"}"#.to_owned());
    assert_eq!(failure.error, ApiError::SessionExpired);
    assert!(failure.clear_session);
}

#[test]
fn other_failures_keep_stored_session() {
    for status in [400, 403, 404, 500] {
        let failure = status_failure(status, "{}".to_owned());
        assert!(!failure.clear_session, "status {status}");
        assert_eq!(failure.error, ApiError::Http { status, body: "{}".to_owned() });
    }
}

#[test]
fn no_content_and_delete_skip_body() {
    let get = plan(Method::Get, "/api/v1/goods/", None).expect("plan");
    assert!(reads_body(&get, 200));
    assert!(!reads_body(&get, 204));
    let delete = plan(Method::Delete, "/api/v1/me/basket-items/1/", Some("tok")).expect("plan");
    assert!(!reads_body(&delete, 200));
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decode_parses_page() {
    let page: Page<Category> =
        decode(Some(r#"{"count":1,"next":null,"previous":null,"results":[{"id":1,"name":"Tea"}]}"#))
            .expect("page");
    assert_eq!(page.results.len(), 1);
}

#[test]
fn decode_empty_body_is_error() {
    let result: Result<Category, ApiError> = decode(None);
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn decode_malformed_body_is_error() {
    let result: Result<Category, ApiError> = decode(Some("<html>"));
    assert!(matches!(result, Err(ApiError::Decode(_))));
}
