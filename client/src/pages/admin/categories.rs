//! Categories screen: list, create with optional image and parent, edit,
//! delete.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::image_field::ImageField;
use crate::net::resource::Resource;
use crate::net::types::Category;
use crate::state::catalog::{category_name, parent_candidates};
use crate::state::crud::CrudList;
use crate::state::forms::CategoryForm;
use crate::state::session::SessionState;
use crate::util::notify::use_notifier;

/// Which editor is open, if any. The row being edited lives in
/// `CrudList::editing`, copied from the list when Edit is clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Editor {
    Closed,
    Create,
    Edit,
}

#[component]
pub fn CategoriesAdmin() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifier = use_notifier();
    let list = RwSignal::new(CrudList::<Category>::default());
    let editor = RwSignal::new(Editor::Closed);

    list.update(CrudList::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::resource::list_all::<Category>().await {
            Ok(found) => list.update(|l| l.load(found, None)),
            Err(err) => {
                list.update(|l| l.fail(err.user_message()));
                crate::util::auth::report_api_error(&err, "Could not load categories", session, notifier);
            }
        }
    });

    let on_saved = Callback::new(move |category: Category| {
        list.update(|l| {
            l.upsert(category);
            l.finish_edit();
        });
        editor.set(Editor::Closed);
    });

    let close_editor = Callback::new(move |()| {
        list.update(CrudList::finish_edit);
        editor.set(Editor::Closed);
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
            match crate::net::resource::remove::<Category>(id).await {
                Ok(()) => {
                    list.update(|l| {
                        l.remove(id);
                    });
                    notifier.success("Category deleted");
                }
                Err(err) => crate::util::auth::report_api_error(&err, "Could not delete category", session, notifier),
            }
            list.update(|l| l.busy = false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <section class="admin-section">
            <div class="admin-section__header">
                <h2>"Categories"</h2>
                <button class="btn btn--primary" on:click=move |_| editor.set(Editor::Create)>
                    "New category"
                </button>
            </div>
            <Show when=move || list.with(CrudList::is_empty_state)>
                <p class="empty-state">"No categories yet"</p>
            </Show>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Parent"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.with(|l| l.items.clone())
                        key=|c| (c.id, c.name.clone(), c.description.clone(), c.image.clone(), c.parent_category)
                        children=move |c| {
                            let id = c.id;
                            let parent = c.parent_category;
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{c.name}</td>
                                    <td>{move || list.with(|l| category_name(&l.items, parent)).unwrap_or_else(|| "-".to_owned())}</td>
                                    <td class="admin-table__actions">
                                        <button
                                            class="btn"
                                            on:click=move |_| {
                                                list.update(|l| l.start_edit(id));
                                                editor.set(Editor::Edit);
                                            }
                                        >
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
            {move || {
                let initial = match editor.get() {
                    Editor::Closed => return None,
                    Editor::Create => None,
                    Editor::Edit => Some(list.with_untracked(|l| l.editing.clone())?),
                };
                Some(view! {
                    <CategoryEditor
                        initial=initial
                        all=list
                        on_saved=on_saved
                        on_cancel=close_editor
                    />
                })
            }}
            <Show when=move || list.with(|l| l.pending_delete.is_some())>
                <ConfirmDialog
                    title="Delete category"
                    message="Products in this category may become unreachable."
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| list.update(CrudList::cancel_delete))
                />
            </Show>
        </section>
    }
}

#[component]
fn CategoryEditor(
    initial: Option<Category>,
    all: RwSignal<CrudList<Category>>,
    on_saved: Callback<Category>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifier = use_notifier();
    let editing_id = initial.as_ref().map(|c| c.id);
    let mut start = initial.as_ref().map(CategoryForm::from_category).unwrap_or_default();
    let image = RwSignal::new(std::mem::take(&mut start.image));
    let form = RwSignal::new(start);
    let saving = RwSignal::new(false);
    let parents = Memo::new(move |_| all.with(|l| parent_candidates(&l.items, editing_id)));

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
                Some(id) => crate::net::resource::update::<Category>(id, &draft).await,
                None => crate::net::resource::create::<Category>(&draft).await,
            };
            match outcome {
                Ok(saved) => {
                    notifier.success(format!("{} saved", Category::LABEL));
                    on_saved.run(saved);
                }
                Err(err) => crate::util::auth::report_api_error(&err, "Could not save category", session, notifier),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, session, on_saved);
    };

    let title = if editing_id.is_some() { "Edit category" } else { "New category" };

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
                    "Description"
                    <textarea
                        class="dialog__input"
                        rows="3"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Parent category"
                    <select
                        class="dialog__input"
                        on:change=move |ev| form.update(|f| f.parent_category = event_target_value(&ev).parse().ok())
                    >
                        <option value="" selected=move || form.with(|f| f.parent_category.is_none())>
                            "None (top level)"
                        </option>
                        <For
                            each=move || parents.get()
                            key=|c| c.id
                            children=move |c| {
                                let id = c.id;
                                view! {
                                    <option
                                        value=id.to_string()
                                        selected=move || form.with(|f| f.parent_category == Some(id))
                                    >
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
