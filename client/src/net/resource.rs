//! Generic REST calls for the admin-managed collections.
//!
//! DESIGN
//! ======
//! Each admin resource is a DRF viewset with the same five verbs. A resource
//! type names its collection and its draft payload once; `list`, `fetch`,
//! `create`, `update` and `remove` then work for all of them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::endpoints::{self, Method};
use super::error::ApiError;
use super::http;
use super::types::{
    Category, CategoryDraft, Checkout, DeliveryMethod, MethodDraft, NewCheckout, Page, PaymentMethod, Product,
    ProductDraft,
};
use crate::state::crud::Identified;

pub trait Resource: Identified + Clone + DeserializeOwned + 'static {
    type Draft: Serialize;

    /// Collection segment under `/api/v1/`.
    const COLLECTION: &'static str;
    /// Singular human label used in notifications.
    const LABEL: &'static str;

    #[must_use]
    fn collection_path() -> String {
        endpoints::resource_collection(Self::COLLECTION)
    }

    #[must_use]
    fn member_path(id: i64) -> String {
        endpoints::resource_member(Self::COLLECTION, id)
    }
}

impl Resource for Product {
    type Draft = ProductDraft;
    const COLLECTION: &'static str = "goods";
    const LABEL: &'static str = "Product";
}

impl Resource for Category {
    type Draft = CategoryDraft;
    const COLLECTION: &'static str = "good-categories";
    const LABEL: &'static str = "Category";
}

impl Resource for PaymentMethod {
    type Draft = MethodDraft;
    const COLLECTION: &'static str = "payment-methods";
    const LABEL: &'static str = "Payment method";
}

impl Resource for DeliveryMethod {
    type Draft = MethodDraft;
    const COLLECTION: &'static str = "delivery-methods";
    const LABEL: &'static str = "Delivery method";
}

impl Resource for Checkout {
    type Draft = NewCheckout;
    const COLLECTION: &'static str = "checkouts";
    const LABEL: &'static str = "Order";
}

/// First page of the collection.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn list<R: Resource>() -> Result<Page<R>, ApiError> {
    http::get(&R::collection_path()).await
}

/// Any page of the collection, addressed by path or cursor URL.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn list_page<R: Resource>(endpoint: &str) -> Result<Page<R>, ApiError> {
    http::get(endpoint).await
}

/// Every page of the collection, following `next` until it runs out.
/// Used for pickers that need the full set (e.g. category selects).
///
/// # Errors
///
/// The first failing page fails the whole call.
pub async fn list_all<R: Resource>() -> Result<Vec<R>, ApiError> {
    let mut page = list::<R>().await?;
    let mut items = std::mem::take(&mut page.results);
    while let Some(next) = page.next.take() {
        page = list_page::<R>(&next).await?;
        items.append(&mut page.results);
    }
    Ok(items)
}

/// # Errors
///
/// See [`ApiError`].
pub async fn fetch<R: Resource>(id: i64) -> Result<R, ApiError> {
    http::get(&R::member_path(id)).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn create<R: Resource>(draft: &R::Draft) -> Result<R, ApiError> {
    http::send_json(Method::Post, &R::collection_path(), draft).await
}

/// Full replacement (`PUT`).
///
/// # Errors
///
/// See [`ApiError`].
pub async fn update<R: Resource>(id: i64, draft: &R::Draft) -> Result<R, ApiError> {
    http::send_json(Method::Put, &R::member_path(id), draft).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn remove<R: Resource>(id: i64) -> Result<(), ApiError> {
    http::delete(&R::member_path(id)).await
}
