//! Shared list state for the admin CRUD screens.
//!
//! DESIGN
//! ======
//! Every admin table follows the same cycle: load, mutate one row through the
//! API, then patch the local list with the server's answer. `CrudList` owns
//! that cycle plus the single pending-delete slot behind the shared confirm
//! dialog, so each screen only decides which fields to render.

#[cfg(test)]
#[path = "crud_test.rs"]
mod crud_test;

use crate::net::types::{Category, Checkout, CheckoutDetails, DeliveryMethod, PaymentMethod, Product};

/// Anything with a stable server id.
pub trait Identified {
    fn id(&self) -> i64;
}

macro_rules! identified_by_id {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> i64 {
                self.id
            }
        })*
    };
}

identified_by_id!(Product, Category, PaymentMethod, DeliveryMethod, Checkout);

impl Identified for CheckoutDetails {
    fn id(&self) -> i64 {
        self.checkout.id
    }
}

#[derive(Clone, Debug)]
pub struct CrudList<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    pub loading: bool,
    pub loaded: bool,
    pub busy: bool,
    pub error: Option<String>,
    pub editing: Option<T>,
    pub pending_delete: Option<i64>,
}

impl<T> Default for CrudList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next: None,
            loading: false,
            loaded: false,
            busy: false,
            error: None,
            editing: None,
            pending_delete: None,
        }
    }
}

impl<T: Identified + Clone> CrudList<T> {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the list with a fresh first page.
    pub fn load(&mut self, items: Vec<T>, next: Option<String>) {
        self.items = items;
        self.next = next;
        self.loading = false;
        self.loaded = true;
    }

    /// Append a following page.
    pub fn append(&mut self, items: Vec<T>, next: Option<String>) {
        self.items.extend(items);
        self.next = next;
        self.loading = false;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.busy = false;
        self.loaded = true;
        self.error = Some(message.into());
    }

    /// Reset to the pre-load state, e.g. when the admin switches category.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn find(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Replace the row with the same id, or append a new one.
    /// Returns `true` when an existing row was replaced.
    pub fn upsert(&mut self, item: T) -> bool {
        if let Some(slot) = self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            *slot = item;
            true
        } else {
            self.items.push(item);
            false
        }
    }

    /// Drop the row with `id`. Returns `true` when a row was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Consume the pending delete when the user confirms.
    pub fn take_pending_delete(&mut self) -> Option<i64> {
        self.pending_delete.take()
    }

    pub fn start_edit(&mut self, id: i64) {
        self.editing = self.find(id).cloned();
    }

    pub fn finish_edit(&mut self) {
        self.editing = None;
    }

    #[must_use]
    pub fn is_empty_state(&self) -> bool {
        self.loaded && !self.loading && self.items.is_empty() && self.error.is_none()
    }

    #[must_use]
    pub fn can_load_more(&self) -> bool {
        self.next.is_some() && !self.loading
    }
}

/// Order newest first by `created_at` (RFC 3339 strings sort lexically).
pub fn sort_newest_first(orders: &mut [CheckoutDetails]) {
    orders.sort_by(|a, b| b.checkout.created_at.cmp(&a.checkout.created_at));
}

/// Apply an edited product to a list filtered by `category`: the row is
/// replaced in place, or dropped if it moved to another category.
pub fn apply_product_edit(list: &mut CrudList<Product>, product: Product, category: i64) {
    if product.category == Some(category) {
        list.upsert(product);
    } else {
        list.remove(product.id);
    }
}
