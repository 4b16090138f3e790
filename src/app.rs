//! Menu Upload App
//!
//! Root component for the vendor menu upload page.

use leptos::prelude::*;

use crate::components::MenuUploadForm;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="upload-page">
            <h1>"Upload Menu Items"</h1>
            <MenuUploadForm />
        </main>
    }
}
