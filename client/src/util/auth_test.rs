use super::*;

#[test]
fn error_text_prefixes_action() {
    let err = ApiError::Http { status: 500, body: r#"{"detail":"Server error"}"#.to_owned() };
    assert_eq!(error_text("Could not load basket", &err), "Could not load basket: Server error");
}

#[test]
fn error_text_for_expired_session_is_bare() {
    assert_eq!(error_text("Could not load basket", &ApiError::SessionExpired), "Session expired, please sign in again");
}

#[test]
fn error_text_for_network_failure() {
    let err = ApiError::Network("TypeError".to_owned());
    assert_eq!(error_text("Search failed", &err), "Search failed: Network error, please try again");
}

#[test]
fn login_path_is_auth_route() {
    assert_eq!(LOGIN_PATH, "/auth");
}
