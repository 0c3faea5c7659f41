use super::*;

// =============================================================
// Helpers
// =============================================================

fn product(id: i64, price: f64) -> Product {
    Product { id, name: format!("P{id}"), price, description: None, image: None, category: None }
}

fn item(id: i64, good: i64, quantity: u32) -> BasketItem {
    BasketItem { id, good, quantity }
}

fn basket(lines: &[(i64, i64, u32, f64)]) -> BasketState {
    let mut state = BasketState::default();
    state.load(
        lines
            .iter()
            .map(|&(id, good, quantity, price)| BasketLine::from_item(&item(id, good, quantity), Some(product(good, price))))
            .collect(),
    );
    state
}

// =============================================================
// Quantity edits
// =============================================================

#[test]
fn increment_from_one_requests_two() {
    let state = basket(&[(10, 1, 1, 5.0)]);
    assert_eq!(state.increment(10), Some(QuantityChange { item_id: 10, quantity: 2 }));
}

#[test]
fn increment_does_not_change_state_before_apply() {
    let state = basket(&[(10, 1, 1, 5.0)]);
    let _ = state.increment(10);
    assert_eq!(state.line(10).map(|l| l.quantity), Some(1));
}

#[test]
fn apply_updates_after_success() {
    let mut state = basket(&[(10, 1, 1, 5.0)]);
    let change = state.increment(10).expect("change");
    state.apply(change);
    assert_eq!(state.line(10).map(|l| l.quantity), Some(2));
}

#[test]
fn decrement_disabled_at_one() {
    let state = basket(&[(10, 1, 1, 5.0)]);
    assert!(!state.can_decrement(10));
    assert_eq!(state.decrement(10), None);
}

#[test]
fn decrement_above_one() {
    let state = basket(&[(10, 1, 3, 5.0)]);
    assert!(state.can_decrement(10));
    assert_eq!(state.decrement(10), Some(QuantityChange { item_id: 10, quantity: 2 }));
}

#[test]
fn unknown_item_yields_no_change() {
    let state = basket(&[(10, 1, 3, 5.0)]);
    assert_eq!(state.increment(99), None);
    assert_eq!(state.decrement(99), None);
    assert!(!state.can_decrement(99));
}

// =============================================================
// Removal and totals
// =============================================================

#[test]
fn remove_drops_exactly_that_id_regardless_of_order() {
    let mut state = basket(&[(3, 1, 1, 1.0), (1, 2, 1, 1.0), (2, 3, 1, 1.0)]);
    assert!(state.remove(1));
    assert_eq!(state.item_ids(), vec![3, 2]);
    assert!(!state.remove(1));
}

#[test]
fn total_sums_price_times_quantity() {
    let state = basket(&[(1, 1, 2, 100.0), (2, 2, 3, 10.5)]);
    assert!((state.total() - 231.5).abs() < f64::EPSILON);
    assert_eq!(state.item_count(), 5);
}

#[test]
fn missing_product_contributes_nothing_but_keeps_line() {
    let lines = join_lines(vec![item(1, 7, 2), item(2, 8, 1)], vec![None, Some(product(8, 40.0))]);
    let mut state = BasketState::default();
    state.load(lines);
    assert_eq!(state.lines.len(), 2);
    assert_eq!(state.lines[0].name(), "Product #7");
    assert!((state.total() - 40.0).abs() < f64::EPSILON);
}

#[test]
fn join_lines_tolerates_short_lookup_list() {
    let lines = join_lines(vec![item(1, 7, 2), item(2, 8, 1)], vec![Some(product(7, 1.0))]);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].product.is_none());
}

// =============================================================
// Syncing
// =============================================================

#[test]
fn sync_items_keeps_resolved_products() {
    let mut state = basket(&[(1, 7, 1, 30.0)]);
    state.sync_items(&[item(1, 7, 4), item(2, 9, 1)]);
    assert_eq!(state.item_count(), 5);
    assert!(state.line(1).and_then(|l| l.product.as_ref()).is_some());
    assert!(state.line(2).and_then(|l| l.product.as_ref()).is_none());
}

#[test]
fn stub_sync_does_not_mark_basket_loaded() {
    let mut state = BasketState::default();
    state.sync_items(&[item(7, 3, 2)]);
    state.begin();
    assert!(!state.loaded);
    assert!(state.loading);
    assert_eq!(state.item_count(), 2);
}

#[test]
fn load_after_stub_sync_resolves_products() {
    let mut state = BasketState::default();
    state.sync_items(&[item(7, 3, 2)]);
    state.begin();
    state.load(join_lines(vec![item(7, 3, 2)], vec![Some(product(3, 12.5))]));
    assert!(state.loaded);
    assert!(!state.loading);
    let line = state.line(7).expect("line");
    assert_eq!(line.name(), "P3");
    assert!((line.unit_price() - 12.5).abs() < f64::EPSILON);
}

#[test]
fn upsert_item_updates_or_appends() {
    let mut state = basket(&[(1, 7, 1, 30.0)]);
    state.upsert_item(&item(1, 7, 2), None);
    assert_eq!(state.line(1).map(|l| l.quantity), Some(2));
    state.upsert_item(&item(5, 9, 1), Some(product(9, 3.0)));
    assert_eq!(state.lines.len(), 2);
}

// =============================================================
// Add to basket
// =============================================================

#[test]
fn add_new_product_creates_item() {
    assert_eq!(plan_add(&[item(1, 7, 1)], 9), AddToBasket::Create(NewBasketItem { good: 9, quantity: 1 }));
}

#[test]
fn add_existing_product_patches_quantity() {
    assert_eq!(plan_add(&[item(1, 7, 2)], 7), AddToBasket::Update(QuantityChange { item_id: 1, quantity: 3 }));
}
