//! Infinite-scroll sentinel with a manual fallback button.
//!
//! DESIGN
//! ======
//! Each time loading becomes possible again a fresh `IntersectionObserver`
//! watches the sentinel; `observe` reports the current intersection
//! immediately, so a sentinel that is already on screen triggers the next
//! page without further scrolling. An observer disconnects itself after it
//! fires or once the component is gone.

use leptos::prelude::*;

#[component]
pub fn LoadMore(#[prop(into)] enabled: Signal<bool>, #[prop(into)] loading: Signal<bool>, on_visible: Callback<()>) -> impl IntoView {
    let sentinel = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let alive = Arc::new(AtomicBool::new(true));
        let alive_effect = alive.clone();
        Effect::new(move || {
            if !enabled.get() {
                return;
            }
            let Some(element) = sentinel.get() else {
                return;
            };
            let alive = alive_effect.clone();
            let callback = Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    if !alive.load(Ordering::Relaxed) {
                        observer.disconnect();
                        return;
                    }
                    let visible = entries.iter().any(|entry| {
                        entry.dyn_into::<web_sys::IntersectionObserverEntry>().is_ok_and(|e| e.is_intersecting())
                    });
                    if visible && enabled.get_untracked() {
                        observer.disconnect();
                        on_visible.run(());
                    }
                },
            ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);
            match web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
                Ok(observer) => observer.observe(&element),
                Err(_) => log::warn!("IntersectionObserver unavailable; use the button"),
            }
            callback.forget();
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! {
        <div class="load-more" node_ref=sentinel>
            <Show when=move || loading.get()>
                <p class="load-more__status">"Loading..."</p>
            </Show>
            <Show when=move || enabled.get()>
                <button class="btn load-more__button" on:click=move |_| on_visible.run(())>
                    "Load more"
                </button>
            </Show>
        </div>
    }
}
