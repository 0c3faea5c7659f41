//! Floating "back to top" button shown after scrolling down.

use leptos::prelude::*;

const SHOW_AFTER_PX: f64 = 400.0;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or_default();
            let show = offset > SHOW_AFTER_PX;
            if visible.get_untracked() != show {
                visible.set(show);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
    };

    #[cfg(not(feature = "hydrate"))]
    let _ = SHOW_AFTER_PX;

    view! {
        <Show when=move || visible.get()>
            <button class="scroll-to-top" title="Back to top" on:click=on_click>
                "↑"
            </button>
        </Show>
    }
}
