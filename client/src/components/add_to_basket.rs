//! Add-to-basket control for the product page.
//!
//! Shows an "Add to basket" button until the product is in the basket, then a
//! quantity stepper bound to that basket line. Anonymous visitors are sent to
//! `/auth`.

use leptos::prelude::*;

use super::quantity_control::QuantityControl;
use crate::net::types::Product;
use crate::state::basket::BasketState;
use crate::state::session::SessionState;
use crate::util::auth::{LOGIN_PATH, redirect_to};
use crate::util::notify::use_notifier;

#[component]
pub fn AddToBasket(product: Product) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let basket = expect_context::<RwSignal<BasketState>>();
    let notifier = use_notifier();
    let busy = RwSignal::new(false);
    let good = product.id;
    let product = StoredValue::new(product);

    let line_id = move || basket.with(|b| b.line_for_good(good).map(|l| l.id));
    let quantity = Signal::derive(move || basket.with(|b| b.line_for_good(good).map_or(0, |l| l.quantity)));

    let on_add = move |_| {
        if !session.with_untracked(SessionState::is_authenticated) {
            redirect_to(LOGIN_PATH);
            return;
        }
        if busy.get_untracked() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::add_to_basket(good).await {
                Ok(item) => {
                    basket.update(|b| b.upsert_item(&item, Some(product.get_value())));
                    notifier.success("Added to basket");
                }
                Err(err) => crate::util::auth::report_api_error(&err, "Could not add to basket", session, notifier),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (notifier, product);
    };

    let change_quantity = move |up: bool| {
        let Some(item_id) = basket.with_untracked(|b| b.line_for_good(good).map(|l| l.id)) else {
            return;
        };
        let change = basket.with_untracked(|b| if up { b.increment(item_id) } else { b.decrement(item_id) });
        let Some(change) = change else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_basket_quantity(change).await {
                Ok(()) => basket.update(|b| b.apply(change)),
                Err(err) => crate::util::auth::report_api_error(&err, "Could not update quantity", session, notifier),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = change;
    };

    view! {
        <div class="add-to-basket">
            <Show
                when=move || line_id().is_some()
                fallback=move || {
                    view! {
                        <button class="btn btn--primary" disabled=move || busy.get() on:click=on_add>
                            "Add to basket"
                        </button>
                    }
                }
            >
                <QuantityControl
                    quantity=quantity
                    busy=busy
                    on_increment=Callback::new(move |()| change_quantity(true))
                    on_decrement=Callback::new(move |()| change_quantity(false))
                />
            </Show>
        </div>
    }
}
