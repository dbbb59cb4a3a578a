use leptos::prelude::*;

mod api;
mod components;
mod submit;
mod types;

use components::pet_form::PetForm;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex flex-col items-center justify-center">
            <h1 class="text-2xl font-bold mb-8">"Pet Store"</h1>
            <PetForm />
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
