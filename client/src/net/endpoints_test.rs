use super::*;

// =============================================================
// Paths
// =============================================================

#[test]
fn member_paths_end_with_slash() {
    assert_eq!(category(4), "/api/v1/good-categories/4/");
    assert_eq!(good(12), "/api/v1/goods/12/");
    assert_eq!(basket_item(3), "/api/v1/me/basket-items/3/");
    assert_eq!(resource_member("checkouts", 9), "/api/v1/checkouts/9/");
}

#[test]
fn auth_info_has_no_trailing_slash() {
    assert_eq!(auth_info(), "/api/v1/auth/info");
    assert_eq!(auth_login(), "/api/v1/auth/login/");
    assert_eq!(auth_confirm(), "/api/v1/auth/confirm/");
}

// =============================================================
// Product queries
// =============================================================

#[test]
fn empty_query_is_plain_collection() {
    assert_eq!(ProductQuery::default().to_endpoint(), "/api/v1/goods/");
}

#[test]
fn category_query_with_ordering() {
    let endpoint = ProductQuery::in_category(5).ordered(Ordering::PriceDesc).to_endpoint();
    assert_eq!(endpoint, "/api/v1/goods/?category=5&ordering=-price");
}

#[test]
fn search_term_is_trimmed_and_encoded() {
    let endpoint = ProductQuery::search("  green tea ").to_endpoint();
    assert_eq!(endpoint, "/api/v1/goods/?search=green%20tea");
}

#[test]
fn blank_search_term_is_omitted() {
    assert_eq!(ProductQuery::search("   ").to_endpoint(), "/api/v1/goods/");
}

#[test]
fn ordering_round_trips_select_values() {
    for ordering in [Ordering::Default, Ordering::PriceAsc, Ordering::PriceDesc, Ordering::Id] {
        assert_eq!(Ordering::from_param(ordering.as_param()), ordering);
    }
    assert_eq!(Ordering::from_param("bogus"), Ordering::Default);
}

// =============================================================
// URL resolution
// =============================================================

#[test]
fn resolve_relative_path_on_origin() {
    assert_eq!(resolve_url("http://localhost:3000/", "/api/v1/goods/"), "http://localhost:3000/api/v1/goods/");
    assert_eq!(resolve_url("", "/api/v1/goods/"), "/api/v1/goods/");
}

#[test]
fn resolve_reanchors_absolute_cursor() {
    let cursor = "http://backend:8000/api/v1/goods/?category=2&page=3";
    assert_eq!(resolve_url("", cursor), "/api/v1/goods/?category=2&page=3");
    assert_eq!(resolve_url("https://shop.example", cursor), "https://shop.example/api/v1/goods/?category=2&page=3");
}

#[test]
fn strip_origin_without_path_yields_root() {
    assert_eq!(strip_origin("http://backend:8000"), "/");
}

// =============================================================
// Authorization policy
// =============================================================

#[test]
fn catalog_reads_are_public() {
    assert!(!requires_auth(Method::Get, &goods()));
    assert!(!requires_auth(Method::Get, &good(1)));
    assert!(!requires_auth(Method::Get, &categories()));
    assert!(!requires_auth(Method::Get, &resource_collection("payment-methods")));
    assert!(!requires_auth(Method::Get, "http://backend:8000/api/v1/goods/?page=2"));
}

#[test]
fn catalog_writes_are_protected() {
    assert!(requires_auth(Method::Post, &goods()));
    assert!(requires_auth(Method::Put, &category(2)));
    assert!(requires_auth(Method::Delete, &resource_member("delivery-methods", 1)));
}

#[test]
fn login_routes_are_public() {
    assert!(!requires_auth(Method::Post, &auth_login()));
    assert!(!requires_auth(Method::Post, &auth_confirm()));
}

#[test]
fn personal_routes_are_protected() {
    assert!(requires_auth(Method::Get, &basket_items()));
    assert!(requires_auth(Method::Get, &basket()));
    assert!(requires_auth(Method::Get, &auth_info()));
    assert!(requires_auth(Method::Post, &recipients()));
    assert!(requires_auth(Method::Get, &resource_collection("checkouts")));
    assert!(requires_auth(Method::Post, &images()));
}

#[test]
fn unknown_routes_default_to_protected() {
    assert!(requires_auth(Method::Get, "/api/v1/something-new/"));
}
