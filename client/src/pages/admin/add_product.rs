//! `/admin/add-product`: standalone product creation.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use super::AdminGate;
use super::AdminTab;
use super::product_editor::ProductEditor;
use crate::net::types::{Category, Product};
use crate::state::session::SessionState;
use crate::util::auth::redirect_to;
use crate::util::notify::use_notifier;

#[component]
pub fn AddProductPage() -> impl IntoView {
    view! {
        <AdminGate>
            <AddProduct/>
        </AdminGate>
    }
}

#[component]
fn AddProduct() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifier = use_notifier();
    let query = use_query_map();
    // `?category=` preselects the category picked on the products screen.
    let default_category = query.with_untracked(|q| crate::pages::parse_route_id(q.get("category")));
    let categories = RwSignal::new(Vec::<Category>::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::resource::list_all::<Category>().await {
            Ok(found) => categories.set(found),
            Err(err) => crate::util::auth::report_api_error(&err, "Could not load categories", session, notifier),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, notifier);

    let on_saved = Callback::new(move |product: Product| redirect_to(&format!("/product/{}", product.id)));
    let on_cancel = Callback::new(move |()| redirect_to(&AdminTab::Products.href()));

    view! {
        <div class="admin-page">
            <ProductEditor
                initial=None
                categories=categories
                default_category=default_category
                on_saved=on_saved
                on_cancel=on_cancel
            />
        </div>
    }
}
