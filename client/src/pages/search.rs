//! Search results page (`/search?query=`).

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::product_card::ProductGrid;
use crate::net::types::Product;
use crate::state::catalog::normalize_query;

#[component]
pub fn SearchPage() -> impl IntoView {
    let query = use_query_map();
    let term = Memo::new(move |_| query.read().get("query").and_then(|q| normalize_query(&q)));
    let results = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(current) = term.get() else {
            results.set(Vec::new());
            return;
        };
        loading.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::search_products(&current).await;
            if term.get_untracked().as_deref() != Some(current.as_str()) {
                return;
            }
            match outcome {
                Ok(found) => results.set(found),
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = current;
    });

    view! {
        <div class="search-page">
            <h1>
                {move || match term.get() {
                    Some(t) => format!("Results for \u{201c}{t}\u{201d}"),
                    None => "Search".to_owned(),
                }}
            </h1>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-status">"Searching..."</p> }>
                <ProductGrid products=results empty_text="Nothing found"/>
            </Show>
        </div>
    }
}
