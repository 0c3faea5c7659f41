use super::*;

// =============================================================
// Products
// =============================================================

#[test]
fn product_price_accepts_json_number() {
    let product: Product = serde_json::from_value(serde_json::json!({
        "id": 7,
        "name": "Kettle",
        "price": 1499.5,
        "description": "Steel",
        "image": null,
        "category": 2
    }))
    .expect("product");
    assert_eq!(product.price, 1499.5);
    assert_eq!(product.image, None);
    assert_eq!(product.category, Some(2));
}

#[test]
fn product_price_accepts_decimal_string() {
    let product: Product =
        serde_json::from_value(serde_json::json!({"id": 1, "name": "Mug", "price": "250.00"})).expect("product");
    assert_eq!(product.price, 250.0);
    assert_eq!(product.description, None);
}

#[test]
fn product_price_rejects_garbage_string() {
    let result = serde_json::from_value::<Product>(serde_json::json!({"id": 1, "name": "Mug", "price": "cheap"}));
    assert!(result.is_err());
}

#[test]
fn product_draft_serializes_all_fields() {
    let draft = ProductDraft {
        name: "Lamp".to_owned(),
        price: 99.0,
        description: String::new(),
        image: "/media/lamp.png".to_owned(),
        category: 3,
    };
    let value = serde_json::to_value(&draft).expect("json");
    assert_eq!(value["category"], 3);
    assert_eq!(value["image"], "/media/lamp.png");
}

// =============================================================
// Pages
// =============================================================

#[test]
fn page_decodes_drf_envelope() {
    let page: Page<Category> = serde_json::from_value(serde_json::json!({
        "count": 12,
        "next": "http://backend:8000/api/v1/good-categories/?page=2",
        "previous": null,
        "results": [{"id": 1, "name": "Tea", "parent_category": null}]
    }))
    .expect("page");
    assert_eq!(page.count, 12);
    assert!(page.next.is_some());
    assert_eq!(page.results[0].name, "Tea");
    assert_eq!(page.results[0].parent_category, None);
}

#[test]
fn page_single_has_no_cursors() {
    let page = Page::single(vec![1, 2, 3]);
    assert_eq!(page.count, 3);
    assert!(page.next.is_none());
    assert!(page.previous.is_none());
}

// =============================================================
// Checkout
// =============================================================

#[test]
fn checkout_total_accepts_string_amount() {
    let checkout: Checkout = serde_json::from_value(serde_json::json!({
        "id": 4,
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-01T10:00:00Z",
        "payment_total": "1200.50",
        "payment_method": 1,
        "delivery_method": 2,
        "recipient": 9,
        "basket": 5
    }))
    .expect("checkout");
    assert_eq!(checkout.payment_total, 1200.5);
    assert_eq!(checkout.recipient, 9);
}

#[test]
fn recipient_full_name_skips_empty_middle_name() {
    let recipient = Recipient {
        id: 1,
        first_name: "Ivan".to_owned(),
        last_name: "Petrov".to_owned(),
        middle_name: String::new(),
        phone: "+7 (900) 123-45-67".to_owned(),
        email: "ivan@example.com".to_owned(),
        address: "Moscow".to_owned(),
        zip_code: "101000".to_owned(),
    };
    assert_eq!(recipient.full_name(), "Petrov Ivan");
}

// =============================================================
// Auth
// =============================================================

#[test]
fn user_info_staff_defaults_to_false() {
    let info: UserInfo = serde_json::from_value(serde_json::json!({"email": "a@b.c"})).expect("info");
    assert!(!info.staff);
}

#[test]
fn image_upload_accepts_image_url_alias() {
    let upload: ImageUpload = serde_json::from_value(serde_json::json!({"image_url": "/media/x.png"})).expect("upload");
    assert_eq!(upload.url, "/media/x.png");
    let upload: ImageUpload = serde_json::from_value(serde_json::json!({"url": "/media/y.png"})).expect("upload");
    assert_eq!(upload.url, "/media/y.png");
}
