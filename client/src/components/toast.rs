//! Toast stack rendered once in the app shell.

use leptos::prelude::*;

use crate::state::notifications::NotificationState;

#[component]
pub fn ToastHost() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || notifications.get().items
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.css_class() role="status">
                            <span class="toast__message">{n.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| notifications.update(|s| s.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
