//! −/+ stepper for a basket line.
//!
//! The control only emits intents; the owner sends the `PATCH` and updates
//! the displayed quantity once the server accepts it.

use leptos::prelude::*;

#[component]
pub fn QuantityControl(
    #[prop(into)] quantity: Signal<u32>,
    on_increment: Callback<()>,
    on_decrement: Callback<()>,
    #[prop(optional, into)] busy: Signal<bool>,
) -> impl IntoView {
    let decrement_disabled = move || busy.get() || quantity.get() <= 1;

    view! {
        <div class="quantity-control">
            <button
                class="quantity-control__btn"
                title="Decrease"
                disabled=decrement_disabled
                on:click=move |_| {
                    if !decrement_disabled() {
                        on_decrement.run(());
                    }
                }
            >
                "−"
            </button>
            <span class="quantity-control__value">{move || quantity.get()}</span>
            <button
                class="quantity-control__btn"
                title="Increase"
                disabled=move || busy.get()
                on:click=move |_| on_increment.run(())
            >
                "+"
            </button>
        </div>
    }
}
