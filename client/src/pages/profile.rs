//! Profile page: signed-in email, staff flag, logout.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::basket::BasketState;
use crate::state::session::SessionState;
use crate::util::auth::{LOGIN_PATH, install_unauth_redirect, redirect_to, sign_out};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let basket = expect_context::<RwSignal<BasketState>>();
    install_unauth_redirect(session, use_navigate());

    let logout = move |_| {
        sign_out(session);
        basket.update(BasketState::clear);
        redirect_to(LOGIN_PATH);
    };

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <Show
                when=move || session.with(|s| !s.loading)
                fallback=|| view! { <p class="page-status">"Loading..."</p> }
            >
                <dl class="profile-page__details">
                    <dt>"Email"</dt>
                    <dd>{move || session.with(|s| s.display_email().to_owned())}</dd>
                    <dt>"Role"</dt>
                    <dd>{move || if session.with(SessionState::is_staff) { "Staff" } else { "Customer" }}</dd>
                </dl>
                <Show when=move || session.with(SessionState::is_staff)>
                    <A href="/admin" attr:class="btn">
                        "Open admin panel"
                    </A>
                </Show>
                <button class="btn btn--danger" on:click=logout>
                    "Sign out"
                </button>
            </Show>
        </div>
    }
}
