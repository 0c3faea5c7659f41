use super::*;

// =============================================================
// Helpers
// =============================================================

fn product(id: i64, category: i64) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        price: 10.0,
        description: None,
        image: None,
        category: Some(category),
    }
}

fn method(id: i64, title: &str) -> PaymentMethod {
    PaymentMethod { id, title: title.to_owned(), description: None }
}

fn order(id: i64, created_at: &str) -> CheckoutDetails {
    CheckoutDetails {
        checkout: Checkout {
            id,
            created_at: created_at.to_owned(),
            updated_at: created_at.to_owned(),
            payment_total: 100.0,
            payment_method: 1,
            delivery_method: 1,
            recipient: 1,
            basket: 1,
        },
        payment_method: method(1, "Card"),
        delivery_method: DeliveryMethod { id: 1, title: "Courier".to_owned(), description: None },
        recipient: crate::net::types::Recipient {
            id: 1,
            first_name: "A".to_owned(),
            last_name: "B".to_owned(),
            middle_name: String::new(),
            phone: "+7 900 123-45-67".to_owned(),
            email: "a@b.c".to_owned(),
            address: "Street".to_owned(),
            zip_code: "123456".to_owned(),
        },
    }
}

// =============================================================
// Loading
// =============================================================

#[test]
fn load_marks_loaded_and_clears_loading() {
    let mut list = CrudList::default();
    list.begin_load();
    assert!(list.loading);
    list.load(vec![method(1, "Card")], None);
    assert!(list.loaded);
    assert!(!list.loading);
    assert!(!list.is_empty_state());
}

#[test]
fn empty_load_is_empty_state() {
    let mut list: CrudList<PaymentMethod> = CrudList::default();
    list.begin_load();
    list.load(Vec::new(), None);
    assert!(list.is_empty_state());
    assert!(!list.can_load_more());
}

#[test]
fn failure_is_not_empty_state() {
    let mut list: CrudList<PaymentMethod> = CrudList::default();
    list.begin_load();
    list.fail("boom");
    assert!(!list.is_empty_state());
    assert_eq!(list.error.as_deref(), Some("boom"));
}

#[test]
fn append_extends_and_moves_cursor() {
    let mut list = CrudList::default();
    list.load(vec![product(1, 2)], Some("/api/v1/goods/?page=2".to_owned()));
    assert!(list.can_load_more());
    list.begin_load();
    assert!(!list.can_load_more());
    list.append(vec![product(2, 2)], None);
    assert_eq!(list.items.len(), 2);
    assert!(!list.can_load_more());
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn upsert_replaces_existing_row() {
    let mut list = CrudList::default();
    list.load(vec![method(1, "Card"), method(2, "Cash")], None);
    assert!(list.upsert(method(2, "Cash on delivery")));
    assert_eq!(list.items[1].title, "Cash on delivery");
    assert!(!list.upsert(method(3, "SBP")));
    assert_eq!(list.items.len(), 3);
}

#[test]
fn remove_drops_only_matching_id() {
    let mut list = CrudList::default();
    list.load(vec![method(1, "Card"), method(2, "Cash"), method(3, "SBP")], None);
    assert!(list.remove(2));
    assert_eq!(list.items.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 3]);
    assert!(!list.remove(2));
}

#[test]
fn pending_delete_is_taken_once() {
    let mut list: CrudList<PaymentMethod> = CrudList::default();
    list.request_delete(5);
    assert_eq!(list.take_pending_delete(), Some(5));
    assert_eq!(list.take_pending_delete(), None);
}

#[test]
fn cancel_delete_clears_slot() {
    let mut list: CrudList<PaymentMethod> = CrudList::default();
    list.request_delete(5);
    list.cancel_delete();
    assert_eq!(list.pending_delete, None);
}

#[test]
fn start_edit_copies_row() {
    let mut list = CrudList::default();
    list.load(vec![method(1, "Card")], None);
    list.start_edit(1);
    assert_eq!(list.editing.as_ref().map(|m| m.id), Some(1));
    list.finish_edit();
    assert!(list.editing.is_none());
    list.start_edit(42);
    assert!(list.editing.is_none());
}

#[test]
fn start_edit_after_save_sees_latest_fields() {
    let original = Category {
        id: 4,
        name: "Tea".to_owned(),
        description: Some("Old".to_owned()),
        image: None,
        parent_category: None,
    };
    let mut list = CrudList::default();
    list.load(vec![original.clone()], None);

    list.start_edit(4);
    list.upsert(Category { description: Some("New".to_owned()), image: Some("/img/tea.png".to_owned()), ..original });
    list.finish_edit();

    list.start_edit(4);
    let editing = list.editing.as_ref().expect("editing");
    assert_eq!(editing.description.as_deref(), Some("New"));
    assert_eq!(editing.image.as_deref(), Some("/img/tea.png"));
}

// =============================================================
// Domain helpers
// =============================================================

#[test]
fn product_edit_in_same_category_replaces_row() {
    let mut list = CrudList::default();
    list.load(vec![product(1, 2), product(2, 2)], None);
    let mut edited = product(2, 2);
    edited.name = "Renamed".to_owned();
    apply_product_edit(&mut list, edited, 2);
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[1].name, "Renamed");
}

#[test]
fn product_moved_to_other_category_leaves_list() {
    let mut list = CrudList::default();
    list.load(vec![product(1, 2), product(2, 2)], None);
    apply_product_edit(&mut list, product(1, 7), 2);
    assert_eq!(list.items.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn orders_sort_newest_first() {
    let mut orders =
        vec![order(1, "2024-01-01T10:00:00Z"), order(2, "2024-03-01T10:00:00Z"), order(3, "2024-02-01T10:00:00Z")];
    sort_newest_first(&mut orders);
    assert_eq!(orders.iter().map(Identified::id).collect::<Vec<_>>(), vec![2, 3, 1]);
}
