//! Entry Row Component
//!
//! One repeatable group of item fields: name, description, price, picture.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::EntryGroup;

/// Four inputs bound to one entry group's signals
#[component]
pub fn EntryRow(group: EntryGroup) -> impl IntoView {
    let on_picture = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        group.picture.set(input.files().and_then(|files| files.get(0)));
    };

    view! {
        <div class="item-entry">
            <input
                type="text"
                placeholder="Item name"
                required
                prop:value=move || group.item.get()
                on:input=move |ev| group.item.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Food description"
                required
                prop:value=move || group.food.get()
                on:input=move |ev| group.food.set(event_target_value(&ev))
            />
            <input
                type="number"
                placeholder="Price"
                required
                prop:value=move || group.price.get()
                on:input=move |ev| group.price.set(event_target_value(&ev))
            />
            <input
                type="file"
                accept="image/*"
                required
                on:change=on_picture
            />
        </div>
    }
}
