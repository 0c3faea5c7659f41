//! REST DTOs mirrored from the storefront API.
//!
//! DESIGN
//! ======
//! Records are plain data: the API owns validation and identity. Decoding is
//! lenient where the backend is known to vary (decimal fields arrive either
//! as JSON numbers or as strings, optional text may be `null`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// CATALOG
// =============================================================================

/// Product category. Categories form a tree through `parent_category`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub parent_category: Option<i64>,
}

/// Create/update payload for a category.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    pub image: String,
    pub parent_category: Option<i64>,
}

/// A sellable product (`good` in the API).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<i64>,
}

/// Create/update payload for a product.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: i64,
}

/// DRF-style paginated envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Build a single page without further cursors.
    #[must_use]
    pub fn single(results: Vec<T>) -> Self {
        Self { count: results.len() as u64, next: None, previous: None, results }
    }
}

// =============================================================================
// BASKET
// =============================================================================

/// Basket line stub as returned by `me/basket-items/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketItem {
    pub id: i64,
    pub good: i64,
    pub quantity: u32,
}

/// `POST me/basket-items/` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewBasketItem {
    pub good: i64,
    pub quantity: u32,
}

/// `PATCH me/basket-items/{id}/` payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QuantityPatch {
    pub quantity: u32,
}

/// The signed-in user's basket header. Only the id is used client-side.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Basket {
    pub id: i64,
}

// =============================================================================
// CHECKOUT
// =============================================================================

/// Payment option offered at checkout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Delivery option offered at checkout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeliveryMethod {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create/update payload shared by payment and delivery methods.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MethodDraft {
    pub title: String,
    pub description: String,
}

/// Shipping/contact profile attached to one order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub zip_code: String,
}

impl Recipient {
    /// "Last First Middle", skipping empty parts.
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.last_name.as_str(), self.first_name.as_str(), self.middle_name.as_str()]
            .iter()
            .filter(|part| !part.trim().is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// `POST recipients/` payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewRecipient {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub zip_code: String,
}

/// Order record. Foreign keys are ids; see [`CheckoutDetails`] for the
/// resolved form shown in the admin screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkout {
    pub id: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub payment_total: f64,
    pub payment_method: i64,
    pub delivery_method: i64,
    pub recipient: i64,
    pub basket: i64,
}

/// `POST checkouts/` payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewCheckout {
    pub payment_total: f64,
    pub payment_method: i64,
    pub delivery_method: i64,
    pub recipient: i64,
    pub basket: i64,
}

/// An order with its foreign keys resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckoutDetails {
    pub checkout: Checkout,
    pub payment_method: PaymentMethod,
    pub delivery_method: DeliveryMethod,
    pub recipient: Recipient,
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST auth/login/` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
}

/// `POST auth/confirm/` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfirmRequest {
    pub email: String,
    pub otp: String,
}

/// JWT pair returned by `auth/confirm/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Profile returned by `auth/info`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub email: String,
    #[serde(default)]
    pub staff: bool,
}

/// Response of the multipart `images/` upload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ImageUpload {
    #[serde(alias = "image_url")]
    pub url: String,
}

// =============================================================================
// DECODING HELPERS
// =============================================================================

/// Accept a monetary amount as a JSON number or a decimal string.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(n) => n.as_f64().ok_or_else(|| D::Error::custom("amount out of range")),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid amount: {s}"))),
        serde_json::Value::Null => Ok(0.0),
        other => Err(D::Error::custom(format!("expected amount, got {other}"))),
    }
}
