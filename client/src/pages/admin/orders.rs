//! Orders screen: every order with its payment method, delivery method and
//! recipient resolved, newest first.

use leptos::prelude::*;

use crate::net::types::CheckoutDetails;
use crate::state::crud::CrudList;
use crate::state::session::SessionState;
use crate::util::format::{format_price, format_timestamp};
use crate::util::notify::use_notifier;

#[component]
pub fn OrdersAdmin() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifier = use_notifier();
    let list = RwSignal::new(CrudList::<CheckoutDetails>::default());

    list.update(CrudList::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::load_order_details().await {
            Ok(orders) => list.update(|l| l.load(orders, None)),
            Err(err) => {
                list.update(|l| l.fail(err.user_message()));
                crate::util::auth::report_api_error(&err, "Could not load orders", session, notifier);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, notifier);

    view! {
        <section class="admin-section">
            <h2>"Orders"</h2>
            <Show when=move || list.with(|l| l.loading)>
                <p class="page-status">"Loading..."</p>
            </Show>
            <Show when=move || list.with(CrudList::is_empty_state)>
                <p class="empty-state">"No orders yet"</p>
            </Show>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Order"</th>
                        <th>"Placed"</th>
                        <th>"Recipient"</th>
                        <th>"Contact"</th>
                        <th>"Address"</th>
                        <th>"Payment"</th>
                        <th>"Delivery"</th>
                        <th>"Total"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.with(|l| l.items.clone())
                        key=|order| order.checkout.id
                        children=move |order| {
                            let recipient = &order.recipient;
                            let contact = format!("{}, {}", recipient.phone, recipient.email);
                            let address = format!("{} {}", recipient.zip_code, recipient.address);
                            view! {
                                <tr>
                                    <td>{format!("#{}", order.checkout.id)}</td>
                                    <td>{format_timestamp(&order.checkout.created_at)}</td>
                                    <td>{recipient.full_name()}</td>
                                    <td>{contact}</td>
                                    <td>{address}</td>
                                    <td>{order.payment_method.title.clone()}</td>
                                    <td>{order.delivery_method.title.clone()}</td>
                                    <td>{format_price(order.checkout.payment_total)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
