use super::*;

#[test]
fn price_has_two_decimals_and_currency() {
    assert_eq!(format_price(250.0), "250.00 ₽");
    assert_eq!(format_price(0.5), "0.50 ₽");
}

#[test]
fn price_groups_thousands() {
    assert_eq!(format_price(1499.5), "1 499.50 ₽");
    assert_eq!(format_price(1_234_567.0), "1 234 567.00 ₽");
}

#[test]
fn negative_price_keeps_sign() {
    assert_eq!(format_price(-1000.0), "-1 000.00 ₽");
}

#[test]
fn timestamp_drops_seconds_and_zone() {
    assert_eq!(format_timestamp("2024-03-01T10:15:30.123Z"), "2024-03-01 10:15");
    assert_eq!(format_timestamp("2024-03-01T10:15:30+03:00"), "2024-03-01 10:15");
}

#[test]
fn unrecognized_timestamp_passes_through() {
    assert_eq!(format_timestamp(""), "");
    assert_eq!(format_timestamp("yesterday"), "yesterday");
    assert_eq!(format_timestamp("2024-03-01Tnoon"), "2024-03-01Tnoon");
}
