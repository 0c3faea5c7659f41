//! Products screen: pick a category, then page through its products with
//! edit and delete.

use leptos::prelude::*;
use leptos_router::components::A;

use super::product_editor::ProductEditor;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::{Category, Product};
use crate::state::crud::{CrudList, apply_product_edit};
use crate::state::session::SessionState;
use crate::util::format::format_price;
use crate::util::notify::use_notifier;

#[component]
pub fn ProductsAdmin() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifier = use_notifier();
    let categories = RwSignal::new(Vec::<Category>::new());
    let selected = RwSignal::new(None::<i64>);
    let list = RwSignal::new(CrudList::<Product>::default());
    let editing = Memo::new(move |_| list.with(|l| l.editing.clone()));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::resource::list_all::<Category>().await {
            Ok(found) => categories.set(found),
            Err(err) => crate::util::auth::report_api_error(&err, "Could not load categories", session, notifier),
        }
    });

    Effect::new(move || {
        let Some(category) = selected.get() else {
            list.update(CrudList::clear);
            return;
        };
        list.update(|l| {
            l.clear();
            l.begin_load();
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let query = crate::net::endpoints::ProductQuery::in_category(category);
            let outcome = crate::net::api::fetch_products(&query).await;
            if selected.get_untracked() != Some(category) {
                return;
            }
            match outcome {
                Ok(page) => list.update(|l| l.load(page.results, page.next)),
                Err(err) => {
                    list.update(|l| l.fail(err.user_message()));
                    crate::util::auth::report_api_error(&err, "Could not load products", session, notifier);
                }
            }
        });
    });

    let load_more = move |_| {
        let Some(next) = list.with_untracked(|l| l.can_load_more().then(|| l.next.clone()).flatten()) else {
            return;
        };
        let category = selected.get_untracked();
        list.update(CrudList::begin_load);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_next_products(&next, category).await {
                Ok(page) => list.update(|l| l.append(page.results, page.next)),
                Err(err) => {
                    list.update(|l| l.fail(err.user_message()));
                    crate::util::auth::report_api_error(&err, "Could not load products", session, notifier);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (next, category);
    };

    let on_saved = Callback::new(move |product: Product| {
        let Some(category) = selected.get_untracked() else {
            return;
        };
        list.update(|l| {
            apply_product_edit(l, product, category);
            l.finish_edit();
        });
    });

    let confirm_delete = Callback::new(move |()| {
        let mut pending = None;
        list.update(|l| {
            pending = l.take_pending_delete();
            l.busy = pending.is_some();
        });
        let Some(id) = pending else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::resource::remove::<Product>(id).await {
                Ok(()) => {
                    list.update(|l| {
                        l.remove(id);
                    });
                    notifier.success("Product deleted");
                }
                Err(err) => crate::util::auth::report_api_error(&err, "Could not delete product", session, notifier),
            }
            list.update(|l| l.busy = false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <section class="admin-section">
            <h2>"Products"</h2>
            <label class="admin-section__filter">
                "Category "
                <select on:change=move |ev| selected.set(event_target_value(&ev).parse().ok())>
                    <option value="">"Choose a category"</option>
                    <For
                        each=move || categories.get()
                        key=|c| c.id
                        children=move |c| view! { <option value=c.id.to_string()>{c.name}</option> }
                    />
                </select>
            </label>
            <Show when=move || selected.get().is_some()>
                <A
                    href=move || format!("/admin/add-product?category={}", selected.get().unwrap_or_default())
                    attr:class="btn admin-section__add"
                >
                    "Add product to this category"
                </A>
            </Show>
            <Show when=move || selected.get().is_some() fallback=|| view! { <p class="empty-state">"Pick a category to see its products"</p> }>
                <Show when=move || list.with(CrudList::is_empty_state)>
                    <p class="empty-state">"No products in this category"</p>
                </Show>
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Price"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || list.with(|l| l.items.clone())
                            key=|p| (p.id, p.name.clone(), p.price.to_bits())
                            children=move |p| {
                                let id = p.id;
                                view! {
                                    <tr>
                                        <td>{id}</td>
                                        <td>{p.name}</td>
                                        <td>{format_price(p.price)}</td>
                                        <td class="admin-table__actions">
                                            <button class="btn" on:click=move |_| list.update(|l| l.start_edit(id))>
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                disabled=move || list.with(|l| l.busy)
                                                on:click=move |_| list.update(|l| l.request_delete(id))
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || list.with(|l| l.loading)>
                    <p class="page-status">"Loading..."</p>
                </Show>
                <Show when=move || list.with(CrudList::can_load_more)>
                    <button class="btn load-more__button" on:click=load_more>
                        "Load more"
                    </button>
                </Show>
            </Show>
            {move || {
                editing
                    .get()
                    .map(|product| {
                        view! {
                            <ProductEditor
                                initial=Some(product)
                                categories=categories
                                default_category=None
                                on_saved=on_saved
                                on_cancel=Callback::new(move |()| list.update(CrudList::finish_edit))
                            />
                        }
                    })
            }}
            <Show when=move || list.with(|l| l.pending_delete.is_some())>
                <ConfirmDialog
                    title="Delete product"
                    message="This product will be removed from the catalog."
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| list.update(CrudList::cancel_delete))
                />
            </Show>
        </section>
    }
}
