//! Catalog browsing state: paged product lists, category tree, search.
//!
//! DESIGN
//! ======
//! Product lists grow by following the API's `next` cursor. When a category
//! filter is active the backend may still return foreign products, so each
//! page is filtered again here and a page that filters down to nothing ends
//! pagination rather than looping over empty pages.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{Category, Page, Product};

pub const SEARCH_DEBOUNCE_MS: u32 = 300;
pub const SEARCH_PREVIEW_LIMIT: usize = 5;
pub const HOME_LATEST_LIMIT: usize = 8;

/// A list that loads page by page behind a "load more" sentinel.
#[derive(Clone, Debug)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self { items: Vec::new(), next: None, loading: false, loaded: false, error: None }
    }
}

impl<T> PagedList<T> {
    /// Mark a request in flight. Returns `false` if one already is.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn apply_first(&mut self, page: Page<T>) {
        self.items = page.results;
        self.next = page.next;
        self.loading = false;
        self.loaded = true;
    }

    pub fn apply_next(&mut self, page: Page<T>) {
        self.items.extend(page.results);
        self.next = page.next;
        self.loading = false;
        self.loaded = true;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.loaded = true;
        self.error = Some(message.into());
    }

    /// The sentinel should trigger a fetch only with a cursor and nothing in
    /// flight.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        self.next.is_some() && !self.loading && self.error.is_none()
    }

    #[must_use]
    pub fn is_empty_state(&self) -> bool {
        self.loaded && !self.loading && self.error.is_none() && self.items.is_empty()
    }
}

/// Drop products outside `category`; an emptied page has no successor.
#[must_use]
pub fn filter_page_by_category(mut page: Page<Product>, category: Option<i64>) -> Page<Product> {
    let Some(category) = category else {
        return page;
    };
    page.results.retain(|p| p.category == Some(category));
    if page.results.is_empty() {
        page.next = None;
    }
    page
}

// =============================================================================
// CATEGORY TREE
// =============================================================================

/// A fetched category, kept only while the route still points at it.
#[must_use]
pub fn current_category(route_id: Option<i64>, found: Category) -> Option<Category> {
    (route_id == Some(found.id)).then_some(found)
}

/// Categories that may become the parent of `editing`: everything except the
/// category itself and its descendants, so the tree cannot gain a cycle.
#[must_use]
pub fn parent_candidates(all: &[Category], editing: Option<i64>) -> Vec<Category> {
    let Some(editing) = editing else {
        return all.to_vec();
    };
    let mut excluded = vec![editing];
    let mut cursor = 0;
    while cursor < excluded.len() {
        let current = excluded[cursor];
        for child in all.iter().filter(|c| c.parent_category == Some(current)) {
            if !excluded.contains(&child.id) {
                excluded.push(child.id);
            }
        }
        cursor += 1;
    }
    all.iter().filter(|c| !excluded.contains(&c.id)).cloned().collect()
}

#[must_use]
pub fn category_name(all: &[Category], id: Option<i64>) -> Option<String> {
    let id = id?;
    all.iter().find(|c| c.id == id).map(|c| c.name.clone())
}

// =============================================================================
// SEARCH
// =============================================================================

/// Trimmed search term, or `None` when there is nothing to search for.
#[must_use]
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Path the search form navigates to on submit.
#[must_use]
pub fn search_page_href(term: &str) -> String {
    format!("/search?query={}", urlencoding::encode(term))
}

#[must_use]
pub fn preview(results: Vec<Product>) -> Vec<Product> {
    results.into_iter().take(SEARCH_PREVIEW_LIMIT).collect()
}
