//! Image URL input with optional upload through `images/`.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::notify::use_notifier;

/// Writes the chosen image URL into `value`. Picking a file uploads it
/// immediately and replaces the URL with the one the API returns.
#[component]
pub fn ImageField(value: RwSignal<String>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifier = use_notifier();
    let uploading = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_file = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_input.get().and_then(|input| input.files()).and_then(|files| files.get(0)) else {
                return;
            };
            uploading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_image(&file).await {
                    Ok(url) => {
                        value.set(url);
                        notifier.success("Image uploaded");
                    }
                    Err(err) => crate::util::auth::report_api_error(&err, "Image upload failed", session, notifier),
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, notifier);
    };

    view! {
        <div class="image-field">
            <label class="dialog__label">
                "Image URL"
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="/media/picture.png"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Or upload a file"
                <input
                    class="dialog__input"
                    type="file"
                    accept="image/*"
                    node_ref=file_input
                    disabled=move || uploading.get()
                    on:change=on_file
                />
            </label>
            <Show when=move || uploading.get()>
                <p class="image-field__status">"Uploading..."</p>
            </Show>
            <Show when=move || !value.get().is_empty()>
                <img class="image-field__preview" src=move || value.get() alt="Preview"/>
            </Show>
        </div>
    }
}
