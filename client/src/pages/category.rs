//! Category page: header, sort control and an infinite product list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The product list restarts whenever the route id or the sort order
//! changes; later pages follow the API cursor and are filtered again by
//! category (see `state::catalog`).

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::parse_route_id;
use crate::components::load_more::LoadMore;
use crate::components::product_card::ProductGrid;
use crate::components::scroll_to_top::ScrollToTop;
use crate::components::sort_select::SortSelect;
use crate::net::endpoints::Ordering;
use crate::net::types::{Category, Product};
use crate::state::catalog::PagedList;

#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let category_id = Memo::new(move |_| parse_route_id(params.read().get("id")));
    let category = RwSignal::new(None::<Category>);
    let ordering = RwSignal::new(Ordering::Default);
    let list = RwSignal::new(PagedList::<Product>::default());
    let generation = RwSignal::new(0_u64);

    Effect::new(move || {
        let route_id = category_id.get();
        category.set(None);
        let Some(id) = route_id else {
            list.update(|l| l.fail("Unknown category"));
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_category(id).await {
                Ok(found) => {
                    if let Some(current) = crate::state::catalog::current_category(category_id.get_untracked(), found) {
                        category.set(Some(current));
                    }
                }
                Err(err) => log::warn!("category {id} unavailable: {err}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, category);
    });

    Effect::new(move || {
        let Some(id) = category_id.get() else {
            return;
        };
        let order = ordering.get();
        generation.update(|g| *g += 1);
        let ticket = generation.get_untracked();
        list.update(|l| {
            l.reset();
            l.begin();
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let query = crate::net::endpoints::ProductQuery::in_category(id).ordered(order);
            let outcome = crate::net::api::fetch_products(&query).await;
            if generation.get_untracked() != ticket {
                return;
            }
            match outcome {
                Ok(page) => list.update(|l| l.apply_first(page)),
                Err(err) => list.update(|l| l.fail(err.user_message())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (order, ticket);
    });

    let on_visible = Callback::new(move |()| {
        let Some(next) = list.with_untracked(|l| l.can_load_more().then(|| l.next.clone()).flatten()) else {
            return;
        };
        list.update(|l| {
            l.begin();
        });
        let ticket = generation.get_untracked();
        let id = category_id.get_untracked();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_next_products(&next, id).await;
            if generation.get_untracked() != ticket {
                return;
            }
            match outcome {
                Ok(page) => list.update(|l| l.apply_next(page)),
                Err(err) => list.update(|l| l.fail(err.user_message())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (next, ticket, id);
    });

    view! {
        <div class="category-page">
            <header class="category-page__header">
                <h1>{move || category.with(|c| c.as_ref().map(|c| c.name.clone()).unwrap_or_default())}</h1>
                <p class="category-page__description">
                    {move || category.with(|c| c.as_ref().and_then(|c| c.description.clone()).unwrap_or_default())}
                </p>
                <SortSelect ordering=ordering/>
            </header>
            <Show when=move || list.with(|l| l.error.is_some())>
                <p class="page-error">{move || list.with(|l| l.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || list.with(|l| l.loaded) fallback=|| view! { <p class="page-status">"Loading..."</p> }>
                <ProductGrid
                    products=Signal::derive(move || list.with(|l| l.items.clone()))
                    empty_text="No products in this category"
                />
            </Show>
            <LoadMore
                enabled=Signal::derive(move || list.with(PagedList::can_load_more))
                loading=Signal::derive(move || list.with(|l| l.loading && l.loaded))
                on_visible=on_visible
            />
            <ScrollToTop/>
        </div>
    }
}
