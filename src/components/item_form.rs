//! Item Form Component
//!
//! Draft editor. Doubles as the create and the update form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_inventory;
use crate::inventory::{DraftMode, Inventory};
use crate::models::ItemField;
use crate::photo;

/// Text input bound to one draft field
#[component]
fn DraftInput(
    field: ItemField,
    #[prop(into)] placeholder: String,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let ctx = use_inventory();
    view! {
        <input
            type=input_type
            placeholder=placeholder
            prop:value=move || ctx.with(|inv| inv.draft().get(field).to_string())
            on:input=move |ev| ctx.update(|inv| inv.update_draft_field(field, event_target_value(&ev)))
        />
    }
}

#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_inventory();
    let file_input = NodeRef::<leptos::html::Input>::new();

    // A fresh draft starts with an empty picker, so re-picking the same file fires `change`
    let generation = Memo::new(move |_| ctx.with(Inventory::generation));
    Effect::new(move |_| {
        generation.track();
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    });

    let on_photo = move |ev: web_sys::Event| {
        let Some(file) = photo::selected_file(&ev) else { return };
        let Some(ticket) = ctx.inventory.try_update(|inv| inv.request_photo()) else { return };
        spawn_local(async move {
            let result = photo::read_as_data_url(&file).await;
            ctx.inventory.try_update(|inv| inv.complete_photo(ticket, result));
        });
    };

    let mode = Memo::new(move |_| ctx.with(Inventory::mode));
    let draft_photo = Memo::new(move |_| ctx.with(|inv| inv.draft().photo.clone()));

    view! {
        <div class="item-form">
            <div class="item-form-row">
                <input type="file" name="photo" accept="image/*" node_ref=file_input on:change=on_photo />
                <DraftInput field=ItemField::Name placeholder="Fabric Name" />
            </div>
            <div class="item-form-row">
                <DraftInput field=ItemField::Size placeholder="Size" />
                <DraftInput field=ItemField::Quantity placeholder="Quantity" input_type="number" />
            </div>
            {move || draft_photo.get().map(|src| view! { <img class="draft-photo" src=src.to_string() alt="Selected photo" /> })}
            <textarea
                name="details"
                placeholder="Details"
                rows="4"
                prop:value=move || ctx.with(|inv| inv.draft().details.clone())
                on:input=move |ev| ctx.update(|inv| inv.update_draft_field(ItemField::Details, event_target_value(&ev)))
            ></textarea>

            // Mode is read at render time and handed to the commit explicitly
            {move || {
                let mode = mode.get();
                let label = match mode {
                    DraftMode::Creating => "Add Item",
                    DraftMode::Editing(_) => "Update Item",
                };
                view! {
                    <button class="commit-btn" on:click=move |_| ctx.update(|inv| { inv.commit_draft(mode); })>
                        {label}
                    </button>
                }
            }}
            <Show when=move || matches!(mode.get(), DraftMode::Editing(_))>
                <button class="cancel-btn" on:click=move |_| ctx.update(|inv| inv.cancel_edit())>
                    "Cancel"
                </button>
            </Show>
        </div>
    }
}
