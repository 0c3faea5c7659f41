//! Product create/edit modal shared by the products screen and
//! `/admin/add-product`.

use leptos::prelude::*;

use crate::components::image_field::ImageField;
use crate::net::resource::Resource;
use crate::net::types::{Category, Product};
use crate::state::forms::ProductForm;
use crate::state::session::SessionState;
use crate::util::notify::use_notifier;

/// `initial = None` creates a product; `Some` edits it with `PUT`.
#[component]
pub fn ProductEditor(
    initial: Option<Product>,
    #[prop(into)] categories: Signal<Vec<Category>>,
    default_category: Option<i64>,
    on_saved: Callback<Product>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifier = use_notifier();
    let editing_id = initial.as_ref().map(|p| p.id);
    let mut start = initial.as_ref().map(ProductForm::from_product).unwrap_or_default();
    if start.category.is_none() {
        start.category = default_category;
    }
    let image = RwSignal::new(std::mem::take(&mut start.image));
    let form = RwSignal::new(start);
    let saving = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let mut current = form.get_untracked();
        current.image = image.get_untracked();
        let draft = match current.to_draft() {
            Ok(draft) => draft,
            Err(err) => {
                notifier.error(err.to_string());
                return;
            }
        };
        saving.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = match editing_id {
                Some(id) => crate::net::resource::update::<Product>(id, &draft).await,
                None => crate::net::resource::create::<Product>(&draft).await,
            };
            match outcome {
                Ok(saved) => {
                    notifier.success(format!("{} saved", Product::LABEL));
                    on_saved.run(saved);
                }
                Err(err) => crate::util::auth::report_api_error(&err, "Could not save product", session, notifier),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, session, on_saved);
    };

    let title = if editing_id.is_some() { "Edit product" } else { "New product" };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog admin-form" on:click=move |ev| ev.stop_propagation() on:submit=submit>
                <h2>{title}</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Price"
                    <input
                        class="dialog__input"
                        type="text"
                        inputmode="decimal"
                        prop:value=move || form.with(|f| f.price.clone())
                        on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        rows="4"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Category"
                    <select
                        class="dialog__input"
                        on:change=move |ev| form.update(|f| f.category = event_target_value(&ev).parse().ok())
                    >
                        <option value="" selected=move || form.with(|f| f.category.is_none())>
                            "Choose a category"
                        </option>
                        <For
                            each=move || categories.get()
                            key=|c| c.id
                            children=move |c| {
                                let id = c.id;
                                view! {
                                    <option value=id.to_string() selected=move || form.with(|f| f.category == Some(id))>
                                        {c.name}
                                    </option>
                                }
                            }
                        />
                    </select>
                </label>
                <ImageField value=image/>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
