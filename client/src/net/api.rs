//! REST API operations used by pages.
//!
//! Client-side (hydrate): real HTTP calls via `net::http`.
//! Server-side (SSR): every call fails with `ApiError::Network`, so pages
//! render their loading state and fetch again after hydration.
//!
//! DESIGN
//! ======
//! The two multi-request workflows live here and nowhere else:
//! `load_basket_lines` (basket stubs, then one product lookup per stub) and
//! `submit_checkout` (recipient, order, then basket cleanup). The API offers
//! no batch or transaction endpoint, so both run client-side with
//! `futures` fan-out and are isolated behind one function each.
//!
//! ERROR HANDLING
//! ==============
//! Fan-out steps degrade per item: a failed product lookup keeps the basket
//! line without details, a failed order lookup drops that order from the
//! admin list, a failed basket cleanup is reported in the outcome.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use futures::future::{join, join_all, join3};

use super::endpoints::{self, Method, ProductQuery};
use super::error::ApiError;
use super::http;
use super::resource;
use super::types::{
    Basket, BasketItem, Category, Checkout, CheckoutDetails, ConfirmRequest, DeliveryMethod, LoginRequest, Page,
    PaymentMethod, Product, QuantityPatch, Recipient, TokenPair, UserInfo,
};
use crate::state::basket::{AddToBasket, BasketLine, QuantityChange, join_lines, plan_add};
use crate::state::catalog::{HOME_LATEST_LIMIT, filter_page_by_category};
use crate::state::checkout::{CheckoutOutcome, CheckoutPlan};
use crate::state::crud::sort_newest_first;

// =============================================================================
// CATALOG
// =============================================================================

/// # Errors
///
/// See [`ApiError`].
pub async fn list_categories() -> Result<Page<Category>, ApiError> {
    http::get(&endpoints::categories()).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn fetch_category(id: i64) -> Result<Category, ApiError> {
    http::get(&endpoints::category(id)).await
}

/// First page of products for `query`, filtered again by category.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn fetch_products(query: &ProductQuery) -> Result<Page<Product>, ApiError> {
    let page = http::get(&query.to_endpoint()).await?;
    Ok(filter_page_by_category(page, query.category))
}

/// Follow a `next` cursor of a product list.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn fetch_next_products(next: &str, category: Option<i64>) -> Result<Page<Product>, ApiError> {
    let page = http::get(next).await?;
    Ok(filter_page_by_category(page, category))
}

/// # Errors
///
/// See [`ApiError`].
pub async fn fetch_product(id: i64) -> Result<Product, ApiError> {
    http::get(&endpoints::good(id)).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn search_products(term: &str) -> Result<Vec<Product>, ApiError> {
    let page: Page<Product> = http::get(&ProductQuery::search(term).to_endpoint()).await?;
    Ok(page.results)
}

/// Products for the home page, oldest id first, capped.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn latest_products() -> Result<Vec<Product>, ApiError> {
    let query = ProductQuery::default().ordered(endpoints::Ordering::Id);
    let page: Page<Product> = http::get(&query.to_endpoint()).await?;
    Ok(page.results.into_iter().take(HOME_LATEST_LIMIT).collect())
}

// =============================================================================
// BASKET
// =============================================================================

/// # Errors
///
/// See [`ApiError`].
pub async fn list_basket_items() -> Result<Vec<BasketItem>, ApiError> {
    let page: Page<BasketItem> = http::get(&endpoints::basket_items()).await?;
    Ok(page.results)
}

/// # Errors
///
/// See [`ApiError`].
pub async fn fetch_basket() -> Result<Basket, ApiError> {
    http::get(&endpoints::basket()).await
}

/// Basket stubs joined with their products, looked up concurrently.
///
/// # Errors
///
/// Only the stub listing can fail the whole call.
pub async fn load_basket_lines() -> Result<Vec<BasketLine>, ApiError> {
    let items = list_basket_items().await?;
    let lookups = join_all(items.iter().map(|item| fetch_product(item.good))).await;
    let products = lookups.into_iter().map(Result::ok).collect();
    Ok(join_lines(items, products))
}

/// # Errors
///
/// See [`ApiError`].
pub async fn set_basket_quantity(change: QuantityChange) -> Result<(), ApiError> {
    let body = QuantityPatch { quantity: change.quantity };
    http::send_unit(Method::Patch, &endpoints::basket_item(change.item_id), &body).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn remove_basket_item(item_id: i64) -> Result<(), ApiError> {
    http::delete(&endpoints::basket_item(item_id)).await
}

/// Add one unit of `good`: `PATCH` the existing line or `POST` a new one.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn add_to_basket(good: i64) -> Result<BasketItem, ApiError> {
    let items = list_basket_items().await?;
    match plan_add(&items, good) {
        AddToBasket::Create(item) => http::send_json(Method::Post, &endpoints::basket_items(), &item).await,
        AddToBasket::Update(change) => {
            set_basket_quantity(change).await?;
            Ok(BasketItem { id: change.item_id, good, quantity: change.quantity })
        }
    }
}

// =============================================================================
// CHECKOUT
// =============================================================================

/// Payment and delivery options, fetched concurrently.
///
/// # Errors
///
/// Fails if either list fails.
pub async fn load_checkout_options() -> Result<(Vec<PaymentMethod>, Vec<DeliveryMethod>), ApiError> {
    let (payments, deliveries) = join(
        resource::list::<PaymentMethod>(),
        resource::list::<DeliveryMethod>(),
    )
    .await;
    Ok((payments?.results, deliveries?.results))
}

/// Create the recipient, then the order, then empty the basket.
///
/// # Errors
///
/// Fails if the recipient or the order cannot be created. Cleanup failures
/// are reported in [`CheckoutOutcome::failed_removals`] instead.
pub async fn submit_checkout(plan: &CheckoutPlan) -> Result<CheckoutOutcome, ApiError> {
    let recipient: Recipient = http::send_json(Method::Post, &endpoints::recipients(), &plan.recipient).await?;
    let checkout = resource::create::<Checkout>(&plan.order(recipient.id)).await?;
    let removals = join_all(plan.item_ids.iter().map(|id| remove_basket_item(*id))).await;
    Ok(CheckoutOutcome { checkout, failed_removals: failed_ids(&plan.item_ids, &removals) })
}

fn failed_ids(ids: &[i64], results: &[Result<(), ApiError>]) -> Vec<i64> {
    ids.iter().zip(results).filter(|(_, result)| result.is_err()).map(|(id, _)| *id).collect()
}

// =============================================================================
// ADMIN
// =============================================================================

/// All orders on the first page with their references resolved, newest
/// first. Orders whose references fail to load are skipped.
///
/// # Errors
///
/// Only the order listing can fail the whole call.
pub async fn load_order_details() -> Result<Vec<CheckoutDetails>, ApiError> {
    let page = resource::list::<Checkout>().await?;
    let resolved = join_all(page.results.into_iter().map(|checkout| async move {
        let lookups = join3(
            resource::fetch::<PaymentMethod>(checkout.payment_method),
            resource::fetch::<DeliveryMethod>(checkout.delivery_method),
            http::get::<Recipient>(&endpoints::recipient(checkout.recipient)),
        )
        .await;
        resolve_details(checkout, lookups)
    }))
    .await;
    let mut orders: Vec<CheckoutDetails> = resolved.into_iter().flatten().collect();
    sort_newest_first(&mut orders);
    Ok(orders)
}

type DetailLookups =
    (Result<PaymentMethod, ApiError>, Result<DeliveryMethod, ApiError>, Result<Recipient, ApiError>);

fn resolve_details(checkout: Checkout, lookups: DetailLookups) -> Option<CheckoutDetails> {
    match lookups {
        (Ok(payment_method), Ok(delivery_method), Ok(recipient)) => {
            Some(CheckoutDetails { checkout, payment_method, delivery_method, recipient })
        }
        _ => {
            #[cfg(feature = "hydrate")]
            log::warn!("skipping order {}: details unavailable", checkout.id);
            None
        }
    }
}

/// Upload an image as multipart field `file`; returns its public URL.
///
/// # Errors
///
/// See [`ApiError`].
#[cfg(feature = "hydrate")]
pub async fn upload_image(file: &web_sys::File) -> Result<String, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("form data unavailable".to_owned()))?;
    form.append_with_blob("file", file).map_err(|_| ApiError::Network("cannot attach file".to_owned()))?;
    let upload: super::types::ImageUpload = http::upload(&endpoints::images(), form).await?;
    Ok(upload.url)
}

// =============================================================================
// AUTH
// =============================================================================

/// Ask the API to email a one-time code.
///
/// # Errors
///
/// Validation problems arrive as `ApiError::Http` with an `email` field.
pub async fn request_login_code(email: &str) -> Result<(), ApiError> {
    let body = LoginRequest { email: email.to_owned() };
    http::send_unit(Method::Post, &endpoints::auth_login(), &body).await
}

/// Exchange the emailed code for a token pair.
///
/// # Errors
///
/// Validation problems arrive as `ApiError::Http` with an `otp` field.
pub async fn confirm_login_code(email: &str, otp: &str) -> Result<TokenPair, ApiError> {
    let body = ConfirmRequest { email: email.to_owned(), otp: otp.to_owned() };
    http::send_json(Method::Post, &endpoints::auth_confirm(), &body).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn fetch_user_info() -> Result<UserInfo, ApiError> {
    http::get(&endpoints::auth_info()).await
}
