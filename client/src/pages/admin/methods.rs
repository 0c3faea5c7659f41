//! Payment and delivery method screens.
//!
//! Both collections have the same `{id, title, description}` shape, so one
//! generic screen serves both; the two components only pick the type.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::resource::Resource;
use crate::net::types::{DeliveryMethod, MethodDraft, PaymentMethod};
use crate::state::crud::{CrudList, Identified};
use crate::state::forms::MethodForm;
use crate::state::session::SessionState;
use crate::util::notify::use_notifier;

pub trait MethodResource: Resource<Draft = MethodDraft> + PartialEq + Send + Sync {
    fn title(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn to_form(&self) -> MethodForm;
}

impl MethodResource for PaymentMethod {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn to_form(&self) -> MethodForm {
        MethodForm::from_payment(self)
    }
}

impl MethodResource for DeliveryMethod {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn to_form(&self) -> MethodForm {
        MethodForm::from_delivery(self)
    }
}

#[component]
pub fn PaymentMethodsAdmin() -> impl IntoView {
    methods_screen::<PaymentMethod>("Payment methods")
}

#[component]
pub fn DeliveryMethodsAdmin() -> impl IntoView {
    methods_screen::<DeliveryMethod>("Delivery methods")
}

fn methods_screen<R: MethodResource>(heading: &'static str) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifier = use_notifier();
    let list = RwSignal::new(CrudList::<R>::default());
    // `None` while closed; `Some(None)` creates, `Some(Some(id))` edits.
    let editor = RwSignal::new(None::<Option<i64>>);
    let form = RwSignal::new(MethodForm::default());
    let saving = RwSignal::new(false);

    list.update(CrudList::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::resource::list_all::<R>().await {
            Ok(found) => list.update(|l| l.load(found, None)),
            Err(err) => {
                list.update(|l| l.fail(err.user_message()));
                let action = format!("Could not load {}", heading.to_lowercase());
                crate::util::auth::report_api_error(&err, &action, session, notifier);
            }
        }
    });

    let open_create = move |_| {
        form.set(MethodForm::default());
        editor.set(Some(None));
    };
    let open_edit = move |id: i64| {
        let Some(current) = list.with_untracked(|l| l.find(id).map(R::to_form)) else {
            return;
        };
        form.set(current);
        editor.set(Some(Some(id)));
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(target) = editor.get_untracked() else {
            return;
        };
        if saving.get_untracked() {
            return;
        }
        let draft = match form.with_untracked(MethodForm::to_draft) {
            Ok(draft) => draft,
            Err(err) => {
                notifier.error(err.to_string());
                return;
            }
        };
        saving.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = match target {
                Some(id) => crate::net::resource::update::<R>(id, &draft).await,
                None => crate::net::resource::create::<R>(&draft).await,
            };
            match outcome {
                Ok(saved) => {
                    list.update(|l| {
                        l.upsert(saved);
                    });
                    editor.set(None);
                    notifier.success(format!("{} saved", R::LABEL));
                }
                Err(err) => {
                    let action = format!("Could not save {}", R::LABEL.to_lowercase());
                    crate::util::auth::report_api_error(&err, &action, session, notifier);
                }
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (target, draft);
    };

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
            match crate::net::resource::remove::<R>(id).await {
                Ok(()) => {
                    list.update(|l| {
                        l.remove(id);
                    });
                    notifier.success(format!("{} deleted", R::LABEL));
                }
                Err(err) => {
                    let action = format!("Could not delete {}", R::LABEL.to_lowercase());
                    crate::util::auth::report_api_error(&err, &action, session, notifier);
                }
            }
            list.update(|l| l.busy = false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <section class="admin-section">
            <div class="admin-section__header">
                <h2>{heading}</h2>
                <button class="btn btn--primary" on:click=open_create>
                    "New"
                </button>
            </div>
            <Show when=move || list.with(CrudList::is_empty_state)>
                <p class="empty-state">"Nothing here yet"</p>
            </Show>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Title"</th>
                        <th>"Description"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.with(|l| l.items.clone())
                        key=|m| (m.id(), m.title().to_owned(), m.description().map(str::to_owned))
                        children=move |m| {
                            let id = m.id();
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{m.title().to_owned()}</td>
                                    <td>{m.description().unwrap_or_default().to_owned()}</td>
                                    <td class="admin-table__actions">
                                        <button class="btn" on:click=move |_| open_edit(id)>
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
            <Show when=move || editor.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| editor.set(None)>
                    <form class="dialog admin-form" on:click=move |ev| ev.stop_propagation() on:submit=submit>
                        <h2>{move || if matches!(editor.get(), Some(Some(_))) { "Edit" } else { "New" }}</h2>
                        <label class="dialog__label">
                            "Title"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || form.with(|f| f.title.clone())
                                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
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
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| editor.set(None)>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
            <Show when=move || list.with(|l| l.pending_delete.is_some())>
                <ConfirmDialog
                    title="Delete"
                    message="This entry will be removed permanently."
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| list.update(CrudList::cancel_delete))
                />
            </Show>
        </section>
    }
}
