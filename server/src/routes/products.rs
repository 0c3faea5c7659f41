//! `GET /api/products`: first page of the backend product list.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::proxy;
use crate::state::AppState;

pub const PRODUCTS_PATH: &str = "/api/v1/goods/";

pub async fn list_products(State(state): State<AppState>) -> Response {
    match proxy::fetch_json(&state, PRODUCTS_PATH).await {
        Ok(page) => Json(page).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "product feed failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({ "error": "Failed to fetch products" })))
                .into_response()
        }
    }
}
