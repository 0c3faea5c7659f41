//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod admin;
pub mod auth;
pub mod basket;
pub mod categories;
pub mod category;
pub mod home;
pub mod product;
pub mod profile;
pub mod search;

/// Numeric id from a route segment such as `/product/:id`.
pub(crate) fn parse_route_id(raw: Option<String>) -> Option<i64> {
    raw?.trim().parse().ok().filter(|id: &i64| *id > 0)
}
