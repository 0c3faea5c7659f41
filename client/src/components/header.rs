//! Site header: navigation, search, account links and basket count.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header refreshes the basket stubs whenever the session becomes
//! authenticated, so the count is right on every page without each page
//! loading the full basket. It also sits inside the router for the whole
//! app, so it owns the redirect to `/auth` when a session expires.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::search_bar::SearchBar;
use crate::state::basket::BasketState;
use crate::state::session::SessionState;
use crate::util::auth::install_expiry_redirect;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let basket = expect_context::<RwSignal<BasketState>>();
    install_expiry_redirect(session, use_navigate());

    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        if !state.is_authenticated() {
            basket.update(BasketState::clear);
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_basket_items().await {
                Ok(items) => basket.update(|b| b.sync_items(&items)),
                Err(err) => log::warn!("basket count unavailable: {err}"),
            }
        });
    });

    let signed_in = move || session.with(SessionState::is_authenticated);
    let is_staff = move || session.with(SessionState::is_staff);
    let basket_count = move || basket.with(BasketState::item_count);

    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">
                "Storefront"
            </A>
            <nav class="site-header__nav">
                <A href="/categories" attr:class="site-header__link">
                    "Catalog"
                </A>
            </nav>
            <SearchBar/>
            <nav class="site-header__account">
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <A href="/auth" attr:class="site-header__link">
                                "Sign in"
                            </A>
                        }
                    }
                >
                    <Show when=is_staff>
                        <A href="/admin" attr:class="site-header__link">
                            "Admin"
                        </A>
                    </Show>
                    <A href="/profile" attr:class="site-header__link">
                        "Profile"
                    </A>
                    <A href="/basket" attr:class="site-header__link site-header__basket">
                        "Basket"
                        <Show when=move || { basket_count() > 0 }>
                            <span class="site-header__badge">{basket_count}</span>
                        </Show>
                    </A>
                </Show>
            </nav>
        </header>
    }
}
