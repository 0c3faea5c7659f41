//! Basket state: materialized lines, quantity edits, totals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided app-wide so the header count, product pages and the basket page
//! agree. The API is authoritative: every quantity change is computed here
//! as a [`QuantityChange`], sent, and applied locally only after the server
//! accepts it.

#[cfg(test)]
#[path = "basket_test.rs"]
mod basket_test;

use crate::net::types::{BasketItem, NewBasketItem, Product};

/// One basket row with its product resolved when the lookup succeeded.
#[derive(Clone, Debug, PartialEq)]
pub struct BasketLine {
    pub id: i64,
    pub good: i64,
    pub product: Option<Product>,
    pub quantity: u32,
}

impl BasketLine {
    #[must_use]
    pub fn from_item(item: &BasketItem, product: Option<Product>) -> Self {
        Self { id: item.id, good: item.good, product, quantity: item.quantity }
    }

    #[must_use]
    pub fn name(&self) -> String {
        self.product.as_ref().map_or_else(|| format!("Product #{}", self.good), |p| p.name.clone())
    }

    /// Unit price, zero when the product could not be loaded.
    #[must_use]
    pub fn unit_price(&self) -> f64 {
        self.product.as_ref().map_or(0.0, |p| p.price)
    }

    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }
}

/// A quantity to `PATCH` onto one basket item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuantityChange {
    pub item_id: i64,
    pub quantity: u32,
}

/// What the product page must send to add one more unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddToBasket {
    Create(NewBasketItem),
    Update(QuantityChange),
}

#[derive(Clone, Debug, Default)]
pub struct BasketState {
    pub lines: Vec<BasketLine>,
    pub basket_id: Option<i64>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
}

impl BasketState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace all lines with a freshly materialized basket.
    pub fn load(&mut self, lines: Vec<BasketLine>) {
        self.lines = lines;
        self.loading = false;
        self.loaded = true;
    }

    /// Replace lines from bare stubs, keeping products already resolved.
    ///
    /// Stubs alone do not count as a loaded basket: `loaded` only flips in
    /// [`BasketState::load`] once products are looked up.
    pub fn sync_items(&mut self, items: &[BasketItem]) {
        self.lines = items
            .iter()
            .map(|item| {
                let product = self.line_for_good(item.good).and_then(|l| l.product.clone());
                BasketLine::from_item(item, product)
            })
            .collect();
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.loaded = true;
        self.error = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.basket_id = None;
        self.loaded = false;
    }

    #[must_use]
    pub fn line(&self, item_id: i64) -> Option<&BasketLine> {
        self.lines.iter().find(|l| l.id == item_id)
    }

    #[must_use]
    pub fn line_for_good(&self, good: i64) -> Option<&BasketLine> {
        self.lines.iter().find(|l| l.good == good)
    }

    #[must_use]
    pub fn can_decrement(&self, item_id: i64) -> bool {
        self.line(item_id).is_some_and(|l| l.quantity > 1)
    }

    #[must_use]
    pub fn increment(&self, item_id: i64) -> Option<QuantityChange> {
        let line = self.line(item_id)?;
        Some(QuantityChange { item_id, quantity: line.quantity.saturating_add(1) })
    }

    /// `None` at quantity 1: the UI disables the control and no request is sent.
    #[must_use]
    pub fn decrement(&self, item_id: i64) -> Option<QuantityChange> {
        let line = self.line(item_id)?;
        (line.quantity > 1).then(|| QuantityChange { item_id, quantity: line.quantity - 1 })
    }

    /// Apply a change the server has accepted.
    pub fn apply(&mut self, change: QuantityChange) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == change.item_id) {
            line.quantity = change.quantity;
        }
    }

    /// Record an item the server created or updated, e.g. from the product page.
    pub fn upsert_item(&mut self, item: &BasketItem, product: Option<Product>) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == item.id) {
            line.quantity = item.quantity;
            if product.is_some() {
                line.product = product;
            }
        } else {
            self.lines.push(BasketLine::from_item(item, product));
        }
    }

    /// Remove exactly the line with `item_id`.
    pub fn remove(&mut self, item_id: i64) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != item_id);
        self.lines.len() != before
    }

    /// Σ price × quantity over lines with a known product.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.lines.iter().map(BasketLine::subtotal).sum()
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    #[must_use]
    pub fn item_ids(&self) -> Vec<i64> {
        self.lines.iter().map(|l| l.id).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Pair stubs with their product lookups; failed lookups keep the stub.
#[must_use]
pub fn join_lines(items: Vec<BasketItem>, products: Vec<Option<Product>>) -> Vec<BasketLine> {
    items
        .into_iter()
        .zip(products.into_iter().chain(std::iter::repeat(None)))
        .map(|(item, product)| BasketLine::from_item(&item, product))
        .collect()
}

/// Decide how to add one unit of `good` given the current basket items.
#[must_use]
pub fn plan_add(items: &[BasketItem], good: i64) -> AddToBasket {
    match items.iter().find(|item| item.good == good) {
        Some(item) => AddToBasket::Update(QuantityChange { item_id: item.id, quantity: item.quantity.saturating_add(1) }),
        None => AddToBasket::Create(NewBasketItem { good, quantity: 1 }),
    }
}
