use super::*;

#[test]
fn parse_route_id_accepts_positive_numbers() {
    assert_eq!(parse_route_id(Some("42".to_owned())), Some(42));
}

#[test]
fn parse_route_id_rejects_garbage() {
    assert_eq!(parse_route_id(None), None);
    assert_eq!(parse_route_id(Some("abc".to_owned())), None);
    assert_eq!(parse_route_id(Some("0".to_owned())), None);
    assert_eq!(parse_route_id(Some("-3".to_owned())), None);
}
