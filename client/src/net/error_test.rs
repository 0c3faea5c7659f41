use super::*;

#[test]
fn status_401_is_session_expiry() {
    assert_eq!(ApiError::from_status(401, String::new()), ApiError::SessionExpired);
    assert!(ApiError::from_status(401, String::new()).requires_login());
}

#[test]
fn other_statuses_keep_body() {
    let err = ApiError::from_status(400, "{\"otp\":[\"Invalid code\"]}".to_owned());
    assert!(matches!(err, ApiError::Http { status: 400, ref body } if body.contains("Invalid code")));
    assert!(!err.requires_login());
}

#[test]
fn field_message_reads_first_drf_error() {
    let err = ApiError::Http { status: 400, body: r#"{"email":["Enter a valid email.","Second"]}"#.to_owned() };
    assert_eq!(err.field_message("email").as_deref(), Some("Enter a valid email."));
    assert_eq!(err.field_message("otp"), None);
}

#[test]
fn field_message_accepts_plain_string() {
    let err = ApiError::Http { status: 400, body: r#"{"otp":"Code expired"}"#.to_owned() };
    assert_eq!(err.field_message("otp").as_deref(), Some("Code expired"));
}

#[test]
fn field_message_ignores_non_json_body() {
    let err = ApiError::Http { status: 502, body: "Bad Gateway".to_owned() };
    assert_eq!(err.field_message("email"), None);
    assert_eq!(err.user_message(), "Request failed (502)");
}

#[test]
fn user_message_prefers_detail() {
    let err = ApiError::Http { status: 403, body: r#"{"detail":"Forbidden","name":["x"]}"#.to_owned() };
    assert_eq!(err.user_message(), "Forbidden");
}

#[test]
fn user_message_falls_back_to_any_field() {
    let err = ApiError::Http { status: 400, body: r#"{"price":["A valid number is required."]}"#.to_owned() };
    assert_eq!(err.user_message(), "A valid number is required.");
}

#[test]
fn not_authenticated_requires_login() {
    assert!(ApiError::NotAuthenticated.requires_login());
    assert!(!ApiError::Network("offline".to_owned()).requires_login());
}
