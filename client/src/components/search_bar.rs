//! Header search box with a debounced preview dropdown.
//!
//! Typing waits `SEARCH_DEBOUNCE_MS` before querying and only the newest
//! request may fill the dropdown; stale responses are dropped by comparing a
//! sequence number.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::Product;
use crate::state::catalog::{normalize_query, search_page_href};
use crate::util::format::format_price;

#[component]
pub fn SearchBar() -> impl IntoView {
    let term = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<Product>::new());
    let searching = RwSignal::new(false);
    let open = RwSignal::new(false);
    let seq = RwSignal::new(0_u64);
    let navigate = use_navigate();

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        term.set(value.clone());
        seq.update(|s| *s += 1);
        let ticket = seq.get_untracked();
        let Some(query) = normalize_query(&value) else {
            results.set(Vec::new());
            open.set(false);
            return;
        };
        open.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::state::catalog::SEARCH_DEBOUNCE_MS).await;
            if seq.get_untracked() != ticket {
                return;
            }
            searching.set(true);
            let outcome = crate::net::api::search_products(&query).await;
            if seq.get_untracked() != ticket {
                return;
            }
            match outcome {
                Ok(found) => results.set(crate::state::catalog::preview(found)),
                Err(err) => {
                    log::warn!("search preview failed: {err}");
                    results.set(Vec::new());
                }
            }
            searching.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, query);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(query) = normalize_query(&term.get_untracked()) else {
            return;
        };
        open.set(false);
        seq.update(|s| *s += 1);
        navigate(&search_page_href(&query), NavigateOptions::default());
    };

    view! {
        <form class="search-bar" role="search" on:submit=on_submit>
            <input
                class="search-bar__input"
                type="search"
                placeholder="Search products"
                prop:value=move || term.get()
                on:input=on_input
                on:focus=move |_| open.set(normalize_query(&term.get_untracked()).is_some())
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        open.set(false);
                    }
                }
            />
            <button class="btn search-bar__submit" type="submit">
                "Search"
            </button>
            <Show when=move || open.get()>
                <div class="search-bar__dropdown" on:click=move |_| open.set(false)>
                    <Show
                        when=move || !searching.get()
                        fallback=|| view! { <p class="search-bar__status">"Searching..."</p> }
                    >
                        <Show
                            when=move || !results.get().is_empty()
                            fallback=|| view! { <p class="search-bar__status">"Nothing found"</p> }
                        >
                            <For
                                each=move || results.get()
                                key=|p| p.id
                                children=move |p| {
                                    view! {
                                        <A href=format!("/product/{}", p.id) attr:class="search-bar__item">
                                            <span class="search-bar__item-name">{p.name.clone()}</span>
                                            <span class="search-bar__item-price">{format_price(p.price)}</span>
                                        </A>
                                    }
                                }
                            />
                        </Show>
                    </Show>
                </div>
            </Show>
        </form>
    }
}
