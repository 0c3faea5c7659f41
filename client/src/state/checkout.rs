//! Checkout form validation and the submission plan.
//!
//! DESIGN
//! ======
//! Everything that can be rejected without a round trip is rejected here, in
//! a fixed order, before `net::api::submit_checkout` touches the network. The
//! plan snapshot carries the exact basket item ids that will be deleted after
//! the order is created.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use std::sync::LazyLock;

use regex::Regex;

use super::basket::BasketState;
use super::session::looks_like_email;
use crate::net::types::{Checkout, NewCheckout, NewRecipient};

static ZIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("zip pattern compiles"));

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+7\s?\(?[0-9]{3}\)?\s?[0-9]{3}-?[0-9]{2}-?[0-9]{2}$").expect("phone pattern compiles")
});

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error("Please sign in to place an order")]
    NotAuthenticated,
    #[error("Basket not found")]
    MissingBasket,
    #[error("Basket is empty")]
    EmptyBasket,
    #[error("Choose a payment method")]
    MissingPaymentMethod,
    #[error("Choose a delivery method")]
    MissingDeliveryMethod,
    #[error("Fill in the {0} field")]
    MissingField(&'static str),
    #[error("Postal code must be 6 digits")]
    InvalidZip,
    #[error("Phone must look like +7 (XXX) XXX-XX-XX")]
    InvalidPhone,
    #[error("Enter a valid email")]
    InvalidEmail,
}

/// Raw recipient inputs as typed by the shopper.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipientForm {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub zip_code: String,
}

impl RecipientForm {
    /// Trim and check every field. The middle name is optional.
    ///
    /// # Errors
    ///
    /// Returns the first failing field check.
    pub fn validate(&self) -> Result<NewRecipient, CheckoutError> {
        let required = |value: &str, label: &'static str| {
            let trimmed = value.trim();
            if trimmed.is_empty() { Err(CheckoutError::MissingField(label)) } else { Ok(trimmed.to_owned()) }
        };
        let last_name = required(&self.last_name, "last name")?;
        let first_name = required(&self.first_name, "first name")?;
        let phone = required(&self.phone, "phone")?;
        let email = required(&self.email, "email")?;
        let address = required(&self.address, "address")?;
        let zip_code = required(&self.zip_code, "postal code")?;

        if !PHONE_RE.is_match(&phone) {
            return Err(CheckoutError::InvalidPhone);
        }
        if !looks_like_email(&email) {
            return Err(CheckoutError::InvalidEmail);
        }
        if !ZIP_RE.is_match(&zip_code) {
            return Err(CheckoutError::InvalidZip);
        }

        Ok(NewRecipient {
            first_name,
            last_name,
            middle_name: self.middle_name.trim().to_owned(),
            phone,
            email,
            address,
            zip_code,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub recipient: RecipientForm,
    pub payment_method: Option<i64>,
    pub delivery_method: Option<i64>,
}

/// Validated inputs for one order submission.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckoutPlan {
    pub recipient: NewRecipient,
    pub payment_method: i64,
    pub delivery_method: i64,
    pub basket: i64,
    pub total: f64,
    pub item_ids: Vec<i64>,
}

impl CheckoutPlan {
    /// Order payload once the recipient has been created.
    #[must_use]
    pub fn order(&self, recipient: i64) -> NewCheckout {
        NewCheckout {
            payment_total: self.total,
            payment_method: self.payment_method,
            delivery_method: self.delivery_method,
            recipient,
            basket: self.basket,
        }
    }
}

/// Validate in order: session, basket id, non-empty basket, payment,
/// delivery, recipient fields.
///
/// # Errors
///
/// Returns the first failing check; nothing has been sent yet.
pub fn plan_checkout(
    authenticated: bool,
    basket: &BasketState,
    form: &CheckoutForm,
) -> Result<CheckoutPlan, CheckoutError> {
    if !authenticated {
        return Err(CheckoutError::NotAuthenticated);
    }
    let basket_id = basket.basket_id.ok_or(CheckoutError::MissingBasket)?;
    if basket.is_empty() {
        return Err(CheckoutError::EmptyBasket);
    }
    let payment_method = form.payment_method.ok_or(CheckoutError::MissingPaymentMethod)?;
    let delivery_method = form.delivery_method.ok_or(CheckoutError::MissingDeliveryMethod)?;
    let recipient = form.recipient.validate()?;

    Ok(CheckoutPlan {
        recipient,
        payment_method,
        delivery_method,
        basket: basket_id,
        total: basket.total(),
        item_ids: basket.item_ids(),
    })
}

/// Result of a submission that created the order.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckoutOutcome {
    pub checkout: Checkout,
    /// Basket items whose post-order `DELETE` failed.
    pub failed_removals: Vec<i64>,
}

impl CheckoutOutcome {
    #[must_use]
    pub fn message(&self) -> String {
        match self.failed_removals.len() {
            0 => "Order placed".to_owned(),
            n => format!("Order placed, but {n} item(s) could not be removed from the basket"),
        }
    }
}

/// Parse a `<select>` value into a method id; the placeholder is empty.
#[must_use]
pub fn parse_method_choice(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
