//! Category list page with infinite scroll.

use leptos::prelude::*;

use crate::components::category_card::CategoryCard;
use crate::components::load_more::LoadMore;
use crate::components::scroll_to_top::ScrollToTop;
use crate::net::types::Category;
use crate::state::catalog::PagedList;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let list = RwSignal::new(PagedList::<Category>::default());

    let load = move |cursor: Option<String>| {
        let mut started = false;
        list.update(|l| started = l.begin());
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = match cursor.as_deref() {
                None => crate::net::api::list_categories().await,
                Some(next) => crate::net::resource::list_page::<Category>(next).await,
            };
            match outcome {
                Ok(page) if cursor.is_none() => list.update(|l| l.apply_first(page)),
                Ok(page) => list.update(|l| l.apply_next(page)),
                Err(err) => {
                    log::warn!("categories unavailable: {err}");
                    list.update(|l| l.fail(err.user_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = cursor;
    };

    load(None);

    let on_visible = Callback::new(move |()| {
        if let Some(next) = list.with_untracked(|l| l.can_load_more().then(|| l.next.clone()).flatten()) {
            load(Some(next));
        }
    });

    view! {
        <div class="catalog-page">
            <h1>"Catalog"</h1>
            <Show when=move || list.with(|l| l.error.is_some())>
                <p class="page-error">{move || list.with(|l| l.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || list.with(PagedList::is_empty_state)>
                <p class="empty-state">"No categories yet"</p>
            </Show>
            <div class="category-grid">
                <For
                    each=move || list.with(|l| l.items.clone())
                    key=|c| c.id
                    children=move |c| view! { <CategoryCard category=c/> }
                />
            </div>
            <LoadMore
                enabled=Signal::derive(move || list.with(PagedList::can_load_more))
                loading=Signal::derive(move || list.with(|l| l.loading))
                on_visible=on_visible
            />
            <ScrollToTop/>
        </div>
    }
}
