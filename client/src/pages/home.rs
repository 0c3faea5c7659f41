//! Home page: hero banner and the latest products.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::product_card::ProductGrid;
use crate::net::types::Product;

#[component]
pub fn HomePage() -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::latest_products().await {
            Ok(found) => products.set(found),
            Err(err) => {
                log::warn!("latest products unavailable: {err}");
                error.set(Some(err.user_message()));
            }
        }
        loading.set(false);
    });

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Everything for your home"</h1>
                <p class="hero__subtitle">"Browse the catalog and order with delivery."</p>
                <A href="/categories" attr:class="btn btn--primary">
                    "Open catalog"
                </A>
            </section>
            <section class="home-page__latest">
                <h2>"New arrivals"</h2>
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || !loading.get() fallback=|| view! { <p class="page-status">"Loading..."</p> }>
                    <ProductGrid products=products empty_text="No products yet"/>
                </Show>
            </section>
        </div>
    }
}
