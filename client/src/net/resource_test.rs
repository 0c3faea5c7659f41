use super::*;

#[test]
fn collection_paths_match_api() {
    assert_eq!(Product::collection_path(), "/api/v1/goods/");
    assert_eq!(Category::collection_path(), "/api/v1/good-categories/");
    assert_eq!(PaymentMethod::collection_path(), "/api/v1/payment-methods/");
    assert_eq!(DeliveryMethod::collection_path(), "/api/v1/delivery-methods/");
    assert_eq!(Checkout::collection_path(), "/api/v1/checkouts/");
}

#[test]
fn member_paths_match_endpoint_table() {
    assert_eq!(Product::member_path(3), endpoints::good(3));
    assert_eq!(Category::member_path(3), endpoints::category(3));
    assert_eq!(PaymentMethod::member_path(3), "/api/v1/payment-methods/3/");
    assert_eq!(DeliveryMethod::member_path(3), "/api/v1/delivery-methods/3/");
    assert_eq!(Checkout::member_path(3), "/api/v1/checkouts/3/");
}

#[test]
fn admin_writes_are_protected() {
    assert!(endpoints::requires_auth(Method::Post, &Product::collection_path()));
    assert!(endpoints::requires_auth(Method::Put, &Category::member_path(1)));
    assert!(endpoints::requires_auth(Method::Delete, &PaymentMethod::member_path(1)));
    assert!(endpoints::requires_auth(Method::Get, &Checkout::collection_path()));
}
