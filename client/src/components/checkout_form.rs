//! Checkout modal: recipient details, payment and delivery choice.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from the basket page. On mount it loads payment and delivery
//! methods together with the basket id. Submission is validated by
//! `state::checkout::plan_checkout` before `net::api::submit_checkout` sends
//! anything.

use leptos::prelude::*;

use crate::net::types::{DeliveryMethod, PaymentMethod};
use crate::state::basket::BasketState;
use crate::state::checkout::{
    CheckoutForm as CheckoutInputs, CheckoutOutcome, RecipientForm, parse_method_choice, plan_checkout,
};
use crate::state::session::SessionState;
use crate::util::format::format_price;
use crate::util::notify::use_notifier;

#[component]
pub fn CheckoutForm(on_success: Callback<CheckoutOutcome>, on_cancel: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let basket = expect_context::<RwSignal<BasketState>>();
    let notifier = use_notifier();

    let payments = RwSignal::new(Vec::<PaymentMethod>::new());
    let deliveries = RwSignal::new(Vec::<DeliveryMethod>::new());
    let recipient = RwSignal::new(RecipientForm::default());
    let payment_choice = RwSignal::new(None::<i64>);
    let delivery_choice = RwSignal::new(None::<i64>);
    let submitting = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let (options, basket_header) =
            futures::future::join(crate::net::api::load_checkout_options(), crate::net::api::fetch_basket()).await;
        match options {
            Ok((p, d)) => {
                payments.set(p);
                deliveries.set(d);
            }
            Err(err) => {
                let action = "Could not load payment and delivery methods";
                crate::util::auth::report_api_error(&err, action, session, notifier);
            }
        }
        match basket_header {
            Ok(header) => basket.update(|b| b.basket_id = Some(header.id)),
            Err(err) => crate::util::auth::report_api_error(&err, "Could not load basket", session, notifier),
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let inputs = CheckoutInputs {
            recipient: recipient.get_untracked(),
            payment_method: payment_choice.get_untracked(),
            delivery_method: delivery_choice.get_untracked(),
        };
        let authenticated = session.with_untracked(SessionState::is_authenticated);
        let plan = match basket.with_untracked(|b| plan_checkout(authenticated, b, &inputs)) {
            Ok(plan) => plan,
            Err(err) => {
                notifier.error(err.to_string());
                return;
            }
        };
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_checkout(&plan).await {
                Ok(outcome) => {
                    basket.update(|b| {
                        for id in &plan.item_ids {
                            if !outcome.failed_removals.contains(id) {
                                b.remove(*id);
                            }
                        }
                    });
                    if outcome.failed_removals.is_empty() {
                        notifier.success(outcome.message());
                    } else {
                        notifier.error(outcome.message());
                    }
                    on_success.run(outcome);
                }
                Err(err) => crate::util::auth::report_api_error(&err, "Could not place order", session, notifier),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (plan, on_success);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog checkout-form" on:click=move |ev| ev.stop_propagation() on:submit=submit>
                <h2>"Checkout"</h2>
                <p class="checkout-form__total">
                    "Total: " {move || format_price(basket.with(BasketState::total))}
                </p>
                <fieldset class="checkout-form__section">
                    <legend>"Recipient"</legend>
                    {recipient_field(recipient, "Last name", "text", "Ivanov", |r| &r.last_name, |r, v| r.last_name = v)}
                    {recipient_field(recipient, "First name", "text", "Ivan", |r| &r.first_name, |r, v| r.first_name = v)}
                    {recipient_field(recipient, "Middle name (optional)", "text", "", |r| &r.middle_name, |r, v| r.middle_name = v)}
                    {recipient_field(recipient, "Phone", "tel", "+7 (900) 123-45-67", |r| &r.phone, |r, v| r.phone = v)}
                    {recipient_field(recipient, "Email", "email", "you@example.com", |r| &r.email, |r, v| r.email = v)}
                    {recipient_field(recipient, "Address", "text", "City, street, house", |r| &r.address, |r, v| r.address = v)}
                    {recipient_field(recipient, "Postal code", "text", "123456", |r| &r.zip_code, |r, v| r.zip_code = v)}
                </fieldset>
                <fieldset class="checkout-form__section">
                    <legend>"Payment"</legend>
                    <select
                        class="dialog__input"
                        on:change=move |ev| payment_choice.set(parse_method_choice(&event_target_value(&ev)))
                    >
                        <option value="">"Choose a payment method"</option>
                        <For
                            each=move || payments.get()
                            key=|m| m.id
                            children=move |m| view! { <option value=m.id.to_string()>{m.title}</option> }
                        />
                    </select>
                </fieldset>
                <fieldset class="checkout-form__section">
                    <legend>"Delivery"</legend>
                    <select
                        class="dialog__input"
                        on:change=move |ev| delivery_choice.set(parse_method_choice(&event_target_value(&ev)))
                    >
                        <option value="">"Choose a delivery method"</option>
                        <For
                            each=move || deliveries.get()
                            key=|m| m.id
                            children=move |m| view! { <option value=m.id.to_string()>{m.title}</option> }
                        />
                    </select>
                </fieldset>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Placing order..." } else { "Place order" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

fn recipient_field(
    recipient: RwSignal<RecipientForm>,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    get: fn(&RecipientForm) -> &String,
    set: fn(&mut RecipientForm, String),
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <input
                class="dialog__input"
                type=kind
                placeholder=placeholder
                prop:value=move || recipient.with(|r| get(r).clone())
                on:input=move |ev| recipient.update(|r| set(r, event_target_value(&ev)))
            />
        </label>
    }
}
