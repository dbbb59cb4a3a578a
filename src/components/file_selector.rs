//! Image picker for the mint form
//!
//! Owns the file slot of the shared pet record: picking an image replaces the
//! whole record with a copy carrying the new file.

use leptos::prelude::*;
use web_sys::Url;

use crate::types::Pet;

/// File selection widget with an inline preview.
///
/// The form hands over both halves of its pet signal so the selector can merge
/// the chosen file into the same record the text inputs write to.
#[component]
pub fn FileSelector(
    pet: ReadSignal<Pet, LocalStorage>,
    set_pet: WriteSignal<Pet, LocalStorage>,
) -> impl IntoView {
    let (preview_url, set_preview_url) = signal(None::<String>);

    let on_change = move |ev| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        if let Some(old) = preview_url.get() {
            let _ = Url::revoke_object_url(&old);
        }
        set_preview_url.set(Url::create_object_url_with_blob(&file).ok());

        set_pet.set(pet.get().with_file(file));
    };

    view! {
        <div>
            <label for="fileInput" class="block text-sm font-medium text-gray-700 mb-1">
                "Picture"
            </label>
            {move || preview_url.get().map(|url| view! {
                <img src=url class="w-32 h-32 object-cover rounded mb-2" />
            })}
            <input
                id="fileInput"
                type="file"
                accept="image/*"
                class="block w-full text-sm text-gray-600"
                on:change=on_change
            />
            {move || pet.get().file.map(|file| view! {
                <p class="mt-1 text-xs text-gray-500">{file.name()}</p>
            })}
        </div>
    }
}
