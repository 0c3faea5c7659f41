//! Basket page: lines with quantity steppers, removal, total and checkout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requires a session. Lines are loaded fresh on mount into the app-wide
//! `BasketState`; quantity edits are sent first and applied on success.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::checkout_form::CheckoutForm;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::product_card::PLACEHOLDER_IMAGE;
use crate::components::quantity_control::QuantityControl;
use crate::state::basket::{BasketLine, BasketState, QuantityChange};
use crate::state::checkout::CheckoutOutcome;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::format_price;
use crate::util::notify::use_notifier;

#[component]
pub fn BasketPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let basket = expect_context::<RwSignal<BasketState>>();
    let notifier = use_notifier();
    install_unauth_redirect(session, use_navigate());

    let busy_line = RwSignal::new(None::<i64>);
    let pending_remove = RwSignal::new(None::<i64>);
    let checkout_open = RwSignal::new(false);

    // Profile updates must not refetch every product lookup.
    let authenticated = Memo::new(move |_| session.with(SessionState::is_authenticated));

    Effect::new(move || {
        if !authenticated.get() {
            return;
        }
        basket.update(BasketState::begin);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::load_basket_lines().await {
                Ok(lines) => basket.update(|b| b.load(lines)),
                Err(err) => {
                    basket.update(|b| b.fail(err.user_message()));
                    crate::util::auth::report_api_error(&err, "Could not load basket", session, notifier);
                }
            }
        });
    });

    let send_change = Callback::new(move |change: Option<QuantityChange>| {
        let Some(change) = change else {
            return;
        };
        if busy_line.get_untracked().is_some() {
            return;
        }
        busy_line.set(Some(change.item_id));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_basket_quantity(change).await {
                Ok(()) => basket.update(|b| b.apply(change)),
                Err(err) => crate::util::auth::report_api_error(&err, "Could not update quantity", session, notifier),
            }
            busy_line.set(None);
        });
    });

    let confirm_remove = Callback::new(move |()| {
        let Some(item_id) = pending_remove.get_untracked() else {
            return;
        };
        pending_remove.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::remove_basket_item(item_id).await {
                Ok(()) => {
                    basket.update(|b| {
                        b.remove(item_id);
                    });
                    notifier.success("Removed from basket");
                }
                Err(err) => crate::util::auth::report_api_error(&err, "Could not remove item", session, notifier),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = item_id;
    });

    let on_checkout = Callback::new(move |_outcome: CheckoutOutcome| checkout_open.set(false));

    view! {
        <div class="basket-page">
            <h1>"Basket"</h1>
            <Show when=move || basket.with(|b| b.error.is_some())>
                <p class="page-error">{move || basket.with(|b| b.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || basket.with(|b| b.loaded)
                fallback=|| view! { <p class="page-status">"Loading..."</p> }
            >
                <Show
                    when=move || !basket.with(BasketState::is_empty)
                    fallback=|| {
                        view! {
                            <div class="empty-state">
                                <p>"Your basket is empty"</p>
                                <A href="/categories" attr:class="btn btn--primary">
                                    "Go to catalog"
                                </A>
                            </div>
                        }
                    }
                >
                    <ul class="basket-lines">
                        <For
                            each=move || basket.with(|b| b.lines.clone())
                            key=|line| line.id
                            children=move |line| {
                                view! {
                                    <BasketRow
                                        line=line
                                        busy=busy_line
                                        on_change=send_change
                                        on_remove=Callback::new(move |id| pending_remove.set(Some(id)))
                                    />
                                }
                            }
                        />
                    </ul>
                    <div class="basket-summary">
                        <span class="basket-summary__total">
                            "Total: " {move || format_price(basket.with(BasketState::total))}
                        </span>
                        <button class="btn btn--primary" on:click=move |_| checkout_open.set(true)>
                            "Checkout"
                        </button>
                    </div>
                </Show>
            </Show>
            <Show when=move || pending_remove.get().is_some()>
                <ConfirmDialog
                    title="Remove item"
                    message="Remove this product from the basket?"
                    confirm_label="Remove"
                    on_confirm=confirm_remove
                    on_cancel=Callback::new(move |()| pending_remove.set(None))
                />
            </Show>
            <Show when=move || checkout_open.get()>
                <CheckoutForm on_success=on_checkout on_cancel=Callback::new(move |()| checkout_open.set(false))/>
            </Show>
        </div>
    }
}

#[component]
fn BasketRow(
    line: BasketLine,
    busy: RwSignal<Option<i64>>,
    on_change: Callback<Option<QuantityChange>>,
    on_remove: Callback<i64>,
) -> impl IntoView {
    let basket = expect_context::<RwSignal<BasketState>>();
    let item_id = line.id;
    let good = line.good;
    // The row outlives its first snapshot: products resolve after stubs.
    let current = move || basket.with(|b| b.line(item_id).cloned());
    let name = move || current().map_or_else(|| format!("Product #{good}"), |l| l.name());
    let image = move || {
        current()
            .and_then(|l| l.product)
            .and_then(|p| p.image)
            .filter(|i| !i.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned())
    };
    let unit_price = move || current().map_or(0.0, |l| l.unit_price());
    let quantity = Signal::derive(move || current().map_or(0, |l| l.quantity));
    let subtotal = move || current().map_or(0.0, |l| l.subtotal());

    view! {
        <li class="basket-line">
            <img class="basket-line__image" src=image alt=name/>
            <A href=format!("/product/{good}") attr:class="basket-line__name">
                {name}
            </A>
            <span class="basket-line__price">{move || format_price(unit_price())}</span>
            <QuantityControl
                quantity=quantity
                busy=Signal::derive(move || busy.get() == Some(item_id))
                on_increment=Callback::new(move |()| on_change.run(basket.with_untracked(|b| b.increment(item_id))))
                on_decrement=Callback::new(move |()| on_change.run(basket.with_untracked(|b| b.decrement(item_id))))
            />
            <span class="basket-line__subtotal">{move || format_price(subtotal())}</span>
            <button class="btn btn--danger basket-line__remove" on:click=move |_| on_remove.run(item_id)>
                "Remove"
            </button>
        </li>
    }
}
