use super::*;

// =============================================================
// Helpers
// =============================================================

fn checkout(id: i64) -> Checkout {
    Checkout {
        id,
        created_at: "2024-05-01T12:00:00Z".to_owned(),
        updated_at: "2024-05-01T12:00:00Z".to_owned(),
        payment_total: 500.0,
        payment_method: 1,
        delivery_method: 2,
        recipient: 3,
        basket: 4,
    }
}

fn payment() -> PaymentMethod {
    PaymentMethod { id: 1, title: "Card".to_owned(), description: None }
}

fn delivery() -> DeliveryMethod {
    DeliveryMethod { id: 2, title: "Courier".to_owned(), description: None }
}

fn recipient() -> Recipient {
    Recipient {
        id: 3,
        first_name: "Anna".to_owned(),
        last_name: "Ivanova".to_owned(),
        middle_name: String::new(),
        phone: "+79001234567".to_owned(),
        email: "anna@example.com".to_owned(),
        address: "Kazan".to_owned(),
        zip_code: "420000".to_owned(),
    }
}

// =============================================================
// Checkout cleanup
// =============================================================

#[test]
fn failed_ids_reports_only_errors() {
    let results = vec![Ok(()), Err(ApiError::Network("offline".to_owned())), Ok(())];
    assert_eq!(failed_ids(&[10, 11, 12], &results), vec![11]);
}

#[test]
fn failed_ids_empty_when_all_succeed() {
    assert!(failed_ids(&[1, 2], &[Ok(()), Ok(())]).is_empty());
}

// =============================================================
// Order details
// =============================================================

#[test]
fn resolve_details_when_all_lookups_succeed() {
    let details = resolve_details(checkout(9), (Ok(payment()), Ok(delivery()), Ok(recipient()))).expect("details");
    assert_eq!(details.checkout.id, 9);
    assert_eq!(details.payment_method.title, "Card");
    assert_eq!(details.recipient.full_name(), "Ivanova Anna");
}

#[test]
fn resolve_details_skips_order_with_missing_reference() {
    let lookups = (Ok(payment()), Err(ApiError::Http { status: 404, body: String::new() }), Ok(recipient()));
    assert!(resolve_details(checkout(9), lookups).is_none());
}
