//! REST endpoint table and request policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every path the client talks to is built here so pages never hand-format
//! URLs. The same module owns the one authorization policy: which
//! method/path pairs carry the bearer token.
//!
//! DESIGN
//! ======
//! Paths are absolute from the API origin (`/api/v1/...`). Pagination cursors
//! arrive as absolute URLs pointing at the backend's own host; they are
//! re-anchored on the configured origin so the browser keeps talking to the
//! proxy.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const API_PREFIX: &str = "/api/v1";

// =============================================================================
// PATHS
// =============================================================================

fn collection(name: &str) -> String {
    format!("{API_PREFIX}/{name}/")
}

fn member(name: &str, id: i64) -> String {
    format!("{API_PREFIX}/{name}/{id}/")
}

pub fn categories() -> String {
    collection("good-categories")
}

pub fn category(id: i64) -> String {
    member("good-categories", id)
}

pub fn goods() -> String {
    collection("goods")
}

pub fn good(id: i64) -> String {
    member("goods", id)
}

pub fn images() -> String {
    collection("images")
}

pub fn basket_items() -> String {
    collection("me/basket-items")
}

pub fn basket_item(id: i64) -> String {
    member("me/basket-items", id)
}

pub fn basket() -> String {
    collection("me/basket")
}

pub fn recipients() -> String {
    collection("recipients")
}

pub fn recipient(id: i64) -> String {
    member("recipients", id)
}

pub fn auth_login() -> String {
    collection("auth/login")
}

pub fn auth_confirm() -> String {
    collection("auth/confirm")
}

pub fn auth_info() -> String {
    format!("{API_PREFIX}/auth/info")
}

/// Collection path for a named resource, used by the generic CRUD layer.
pub fn resource_collection(name: &str) -> String {
    collection(name)
}

/// Member path for a named resource, used by the generic CRUD layer.
pub fn resource_member(name: &str, id: i64) -> String {
    member(name, id)
}

// =============================================================================
// PRODUCT QUERIES
// =============================================================================

/// Server-side sort order for product lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ordering {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    Id,
}

impl Ordering {
    /// Choices offered in the sort dropdown.
    pub const CHOICES: [Ordering; 3] = [Ordering::Default, Ordering::PriceAsc, Ordering::PriceDesc];

    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::PriceAsc => "price",
            Self::PriceDesc => "-price",
            Self::Id => "id",
        }
    }

    /// Parse a `<select>` value; unknown values fall back to the default.
    #[must_use]
    pub fn from_param(raw: &str) -> Self {
        match raw.trim() {
            "price" => Self::PriceAsc,
            "-price" => Self::PriceDesc,
            "id" => Self::Id,
            _ => Self::Default,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::PriceAsc => "Price: low to high",
            Self::PriceDesc => "Price: high to low",
            Self::Id => "Newest",
        }
    }
}

/// Filters for `GET goods/`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: Option<i64>,
    pub search: Option<String>,
    pub ordering: Ordering,
}

impl ProductQuery {
    #[must_use]
    pub fn in_category(category: i64) -> Self {
        Self { category: Some(category), ..Self::default() }
    }

    #[must_use]
    pub fn search(term: &str) -> Self {
        Self { search: Some(term.to_owned()), ..Self::default() }
    }

    #[must_use]
    pub fn ordered(mut self, ordering: Ordering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Render as a `goods/` path with only the non-empty parameters.
    #[must_use]
    pub fn to_endpoint(&self) -> String {
        let mut params = Vec::new();
        if let Some(category) = self.category {
            params.push(format!("category={category}"));
        }
        if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            params.push(format!("search={}", urlencoding::encode(term)));
        }
        let ordering = self.ordering.as_param();
        if !ordering.is_empty() {
            params.push(format!("ordering={ordering}"));
        }
        if params.is_empty() { goods() } else { format!("{}?{}", goods(), params.join("&")) }
    }
}

// =============================================================================
// URL RESOLUTION
// =============================================================================

/// Join `endpoint` onto `origin`. Absolute URLs keep only their path and
/// query so cursors emitted by the backend stay on the configured origin.
#[must_use]
pub fn resolve_url(origin: &str, endpoint: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let path = strip_origin(endpoint);
    if path.starts_with('/') { format!("{origin}{path}") } else { format!("{origin}/{path}") }
}

/// Path + query of `url`, or `url` itself when it is already relative.
#[must_use]
pub fn strip_origin(url: &str) -> &str {
    let Some(scheme_end) = url.find("://") else {
        return url;
    };
    let after_scheme = &url[scheme_end + 3..];
    match after_scheme.find('/') {
        Some(slash) => &after_scheme[slash..],
        None => "/",
    }
}

// =============================================================================
// AUTHORIZATION POLICY
// =============================================================================

/// HTTP methods used by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

const PUBLIC_ROUTES: [&str; 2] = ["auth/login/", "auth/confirm/"];

const CATALOG_ROUTES: [&str; 4] = ["goods/", "good-categories/", "payment-methods/", "delivery-methods/"];

/// Whether `method` on `url` must carry the bearer token.
///
/// Catalog collections are readable anonymously and writable by staff only.
/// Login endpoints are public. Everything else, including paths this table
/// does not know, is protected.
#[must_use]
pub fn requires_auth(method: Method, url: &str) -> bool {
    let path = strip_origin(url);
    let path = path.split('?').next().unwrap_or_default();
    let path = path.strip_prefix(API_PREFIX).unwrap_or(path).trim_start_matches('/');

    if PUBLIC_ROUTES.contains(&path) {
        return false;
    }
    if CATALOG_ROUTES.iter().any(|route| path.starts_with(route)) {
        return method != Method::Get;
    }
    true
}
