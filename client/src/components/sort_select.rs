//! Product sort dropdown.

use leptos::prelude::*;

use crate::net::endpoints::Ordering;

#[component]
pub fn SortSelect(ordering: RwSignal<Ordering>) -> impl IntoView {
    view! {
        <label class="sort-select">
            "Sort: "
            <select
                class="sort-select__input"
                prop:value=move || ordering.get().as_param()
                on:change=move |ev| ordering.set(Ordering::from_param(&event_target_value(&ev)))
            >
                {Ordering::CHOICES
                    .into_iter()
                    .map(|o| view! { <option value=o.as_param()>{o.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}
