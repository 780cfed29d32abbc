//! Details Overlay Component
//!
//! Read-only modal over a snapshot of one item.

use leptos::prelude::*;

use crate::context::use_inventory;
use crate::inventory::Inventory;

#[component]
pub fn DetailsOverlay() -> impl IntoView {
    let ctx = use_inventory();
    let viewing = Memo::new(move |_| ctx.with(|inv| inv.viewing().cloned()));

    move || {
        viewing.get().map(|item| {
            let fields = item.fields;
            let alt = fields.name.clone();
            view! {
                <div class="modal-backdrop" on:click=move |_| ctx.update(Inventory::close_details)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <h2>"Item Details"</h2>
                        {fields.photo.map(|src| view! { <img class="detail-photo" src=src.to_string() alt=alt /> })}
                        <p><strong>"Name:"</strong> " " {fields.name}</p>
                        <p><strong>"Size:"</strong> " " {fields.size}</p>
                        <p><strong>"Quantity:"</strong> " " {fields.quantity}</p>
                        <p><strong>"Details:"</strong> " " {fields.details}</p>
                        <button class="close-btn" on:click=move |_| ctx.update(Inventory::close_details)>
                            "Close"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
