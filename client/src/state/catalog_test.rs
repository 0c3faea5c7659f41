use super::*;

// =============================================================
// Helpers
// =============================================================

fn product(id: i64, category: i64) -> Product {
    Product { id, name: format!("P{id}"), price: 1.0, description: None, image: None, category: Some(category) }
}

fn category(id: i64, parent: Option<i64>) -> Category {
    Category { id, name: format!("C{id}"), description: None, image: None, parent_category: parent }
}

fn page<T>(results: Vec<T>, next: Option<&str>) -> Page<T> {
    Page { count: 0, next: next.map(str::to_owned), previous: None, results }
}

// =============================================================
// Paged lists
// =============================================================

#[test]
fn empty_first_page_is_empty_state_without_pagination() {
    let mut list: PagedList<Category> = PagedList::default();
    assert!(list.begin());
    list.apply_first(page(Vec::new(), None));
    assert!(list.is_empty_state());
    assert!(!list.can_load_more());
}

#[test]
fn begin_refuses_overlapping_loads() {
    let mut list: PagedList<Product> = PagedList::default();
    assert!(list.begin());
    assert!(!list.begin());
}

#[test]
fn next_page_appends_and_follows_cursor() {
    let mut list = PagedList::default();
    list.begin();
    list.apply_first(page(vec![product(1, 1)], Some("/api/v1/goods/?page=2")));
    assert!(list.can_load_more());
    list.begin();
    assert!(!list.can_load_more());
    list.apply_next(page(vec![product(2, 1)], None));
    assert_eq!(list.items.len(), 2);
    assert!(!list.can_load_more());
}

#[test]
fn failure_stops_pagination() {
    let mut list: PagedList<Product> = PagedList::default();
    list.apply_first(page(vec![product(1, 1)], Some("/next")));
    list.begin();
    list.fail("offline");
    assert!(!list.can_load_more());
    assert!(!list.is_empty_state());
}

#[test]
fn reset_returns_to_initial_state() {
    let mut list = PagedList::default();
    list.apply_first(page(vec![product(1, 1)], Some("/next")));
    list.reset();
    assert!(list.items.is_empty());
    assert!(!list.loaded);
}

// =============================================================
// Category filter
// =============================================================

#[test]
fn filter_drops_foreign_products() {
    let filtered = filter_page_by_category(page(vec![product(1, 2), product(2, 3)], Some("/next")), Some(2));
    assert_eq!(filtered.results.len(), 1);
    assert_eq!(filtered.next.as_deref(), Some("/next"));
}

#[test]
fn emptied_page_ends_pagination() {
    let filtered = filter_page_by_category(page(vec![product(1, 3)], Some("/next")), Some(2));
    assert!(filtered.results.is_empty());
    assert_eq!(filtered.next, None);
}

#[test]
fn no_filter_keeps_page_intact() {
    let filtered = filter_page_by_category(page(vec![product(1, 3)], Some("/next")), None);
    assert_eq!(filtered.results.len(), 1);
    assert!(filtered.next.is_some());
}

// =============================================================
// Category tree
// =============================================================

#[test]
fn stale_category_fetch_is_dropped() {
    assert_eq!(current_category(Some(2), category(2, None)).map(|c| c.id), Some(2));
    assert_eq!(current_category(Some(3), category(2, None)), None);
    assert_eq!(current_category(None, category(2, None)), None);
}

#[test]
fn parent_candidates_exclude_self_and_descendants() {
    let all = vec![category(1, None), category(2, Some(1)), category(3, Some(2)), category(4, None)];
    let ids: Vec<i64> = parent_candidates(&all, Some(1)).iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![4]);
    let ids: Vec<i64> = parent_candidates(&all, Some(2)).iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 4]);
}

#[test]
fn parent_candidates_for_new_category_is_everything() {
    let all = vec![category(1, None), category(2, Some(1))];
    assert_eq!(parent_candidates(&all, None).len(), 2);
}

#[test]
fn category_name_lookup() {
    let all = vec![category(1, None)];
    assert_eq!(category_name(&all, Some(1)).as_deref(), Some("C1"));
    assert_eq!(category_name(&all, Some(9)), None);
    assert_eq!(category_name(&all, None), None);
}

// =============================================================
// Search
// =============================================================

#[test]
fn blank_query_is_none() {
    assert_eq!(normalize_query("   "), None);
    assert_eq!(normalize_query(" tea ").as_deref(), Some("tea"));
}

#[test]
fn search_href_encodes_term() {
    assert_eq!(search_page_href("green tea"), "/search?query=green%20tea");
}

#[test]
fn preview_keeps_first_five() {
    let results: Vec<Product> = (1..=8).map(|id| product(id, 1)).collect();
    let shown = preview(results);
    assert_eq!(shown.len(), SEARCH_PREVIEW_LIMIT);
    assert_eq!(shown[0].id, 1);
}
