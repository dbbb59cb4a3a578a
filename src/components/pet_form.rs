//! Pet mint form
//!
//! Collects the pet's details and hands the record to the minting service on
//! submit. The form never validates; whatever was entered goes out as-is.

use leptos::prelude::*;
use web_sys::SubmitEvent;

use crate::api;
use crate::components::file_selector::FileSelector;
use crate::submit;
use crate::types::{Pet, PetField};

const BREEDS: [&str; 3] = ["Labrador", "Bulldog", "Poodle"];

#[component]
pub fn PetForm() -> impl IntoView {
    // The record carries a web_sys::File, so it lives in a local-storage
    // signal rather than a Send one.
    let (pet, set_pet) = signal_local(Pet::default());
    let (minting, set_minting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        // Suppress the native form submission before anything else runs.
        ev.prevent_default();
        set_minting.set(true);

        let current = pet.get();
        wasm_bindgen_futures::spawn_local(async move {
            submit::submit(current, |p| async move { api::mint_token(&p).await }).await;
            set_minting.set(false);
        });
    };

    view! {
        <div class="p-20 bg-white max-w-sm rounded-lg shadow">
            <form on:submit=on_submit>
                <div class="space-y-4">
                    <FileSelector pet=pet set_pet=set_pet />
                    <div>
                        <label for="nameInput" class="block text-sm font-medium text-gray-700 mb-1">
                            "Pet's name"
                        </label>
                        <input
                            id="nameInput"
                            type="text"
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                            placeholder="Max"
                            on:input=move |ev| {
                                set_pet.set(pet.get().with_field(PetField::Name, event_target_value(&ev)));
                            }
                        />
                    </div>
                    <div>
                        <label for="breedInput" class="block text-sm font-medium text-gray-700 mb-1">
                            "Breed"
                        </label>
                        <select
                            id="breedInput"
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                            on:change=move |ev| {
                                set_pet.set(pet.get().with_field(PetField::Breed, event_target_value(&ev)));
                            }
                        >
                            {BREEDS.iter().map(|breed| view! {
                                <option value=*breed>{*breed}</option>
                            }).collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div>
                        <label for="ageInput" class="block text-sm font-medium text-gray-700 mb-1">
                            "Age"
                        </label>
                        <select
                            id="ageInput"
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                            on:change=move |ev| {
                                set_pet.set(pet.get().with_field(PetField::Age, event_target_value(&ev)));
                            }
                        >
                            {(0..10).map(|age| view! {
                                <option value=age.to_string()>{age}</option>
                            }).collect::<Vec<_>>()}
                        </select>
                    </div>
                </div>
                <div class="mt-6">
                    // The button stays enabled while a mint is in flight;
                    // nothing stops a second submission.
                    <button
                        type="submit"
                        class="px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600"
                    >
                        {move || if minting.get() { "Minting..." } else { "Mint" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
