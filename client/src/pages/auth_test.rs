use super::*;

#[test]
fn field_error_prefers_field_message() {
    let err = ApiError::Http { status: 400, body: r#"{"otp":["Invalid or expired code"]}"#.to_owned() };
    assert_eq!(field_error(&err, "otp"), "Invalid or expired code");
}

#[test]
fn field_error_falls_back_to_summary() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(field_error(&err, "email"), "Network error, please try again");

    let err = ApiError::Http { status: 429, body: r#"{"detail":"Too many requests"}"#.to_owned() };
    assert_eq!(field_error(&err, "email"), "Too many requests");
}

#[test]
fn clean_code_keeps_digits() {
    assert_eq!(clean_code(" 12a3-45 6"), "123456");
    assert_eq!(clean_code(""), "");
}
