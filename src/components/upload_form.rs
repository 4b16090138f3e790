//! Menu Upload Form
//!
//! Dynamic multi-item form: add entry groups, encode each picture, and
//! submit everything to the server as one JSON document.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::EntryRow;
use crate::encode::encode_file;
use crate::models::{parse_price, ItemEntry, SubmissionPayload};
use crate::session;
use crate::store::{EntryGroup, EntryGroups};

/// Read one group's fields and encode its picture.
async fn collect_entry(group: &EntryGroup) -> Result<ItemEntry, String> {
    let file = group
        .picture
        .get_untracked()
        .ok_or_else(|| "no picture selected".to_string())?;
    let picture_data = encode_file(&file).await?;

    Ok(ItemEntry {
        item: group.item.get_untracked(),
        food: group.food.get_untracked(),
        price: parse_price(&group.price.get_untracked()),
        picture_filename: file.name(),
        picture_type: file.type_(),
        picture_data,
    })
}

/// Encode every entry sequentially in visual order, then POST the
/// payload. All file reads finish before the network call starts.
async fn submit_entries(
    user_id: Option<String>,
    groups: &[EntryGroup],
) -> Result<serde_json::Value, String> {
    let mut items = Vec::with_capacity(groups.len());
    for (index, group) in groups.iter().enumerate() {
        let entry = collect_entry(group)
            .await
            .map_err(|err| format!("entry {}: {err}", index + 1))?;
        items.push(entry);
    }

    let payload = SubmissionPayload { user_id, items };
    api::submit_items(&payload).await
}

/// Multi-item upload form with a growable list of entry groups
#[component]
pub fn MenuUploadForm() -> impl IntoView {
    let groups = RwSignal::new_local(EntryGroups::new());
    let (submitting, set_submitting) = signal(false);
    let (status, set_status) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Session value is read here and passed down explicitly; the
        // async flow never touches ambient state.
        let user_id = session::current_user_id();
        let snapshot: Vec<EntryGroup> = groups.with_untracked(|g| g.entries().to_vec());

        set_submitting.set(true);
        set_status.set(None);

        spawn_local(async move {
            match submit_entries(user_id, &snapshot).await {
                Ok(result) => {
                    web_sys::console::log_1(
                        &format!("[UPLOAD] server response: {result}").into(),
                    );
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[UPLOAD] {err}").into());
                    set_status.set(Some(err));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="multi-upload-form" on:submit=on_submit>
            <div class="items-container">
                <For
                    each=move || groups.with(|g| g.entries().to_vec())
                    key=|group| group.id
                    children=move |group| view! { <EntryRow group=group /> }
                />
            </div>

            <button
                type="button"
                class="add-entry-btn"
                on:click=move |_| groups.update(|g| g.add())
            >
                "+ Add Another Item"
            </button>
            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Submitting..." } else { "Submit" }}
            </button>

            <p class="entry-count">
                {move || format!("{} entries", groups.with(|g| g.len()))}
            </p>

            {move || status.get().map(|msg| view! {
                <p class="upload-error">{msg}</p>
            })}
        </form>
    }
}
