//! Item Card Component

use leptos::prelude::*;

use crate::context::use_inventory;
use crate::models::ItemId;

/// One record in the collection with Edit / Delete / View Details actions
#[component]
pub fn ItemCard(id: ItemId) -> impl IntoView {
    let ctx = use_inventory();
    // Photos are shared `Arc`s, so this clone and comparison stay cheap
    let item = Memo::new(move |_| ctx.with(|inv| inv.get(id).cloned()));

    move || {
        item.get().map(|item| {
            let fields = item.fields;
            let alt = fields.name.clone();
            view! {
                <div class="item-card">
                    {fields.photo.map(|src| view! { <img class="item-photo" src=src.to_string() alt=alt /> })}
                    <h2 class="item-name">{fields.name}</h2>
                    <p>"Size: " {fields.size}</p>
                    <p>"Quantity: " {fields.quantity}</p>
                    <div class="item-actions">
                        <button on:click=move |_| ctx.update(|inv| inv.begin_edit(id))>"Edit"</button>
                        <button on:click=move |_| ctx.update(|inv| inv.delete_item(id))>"Delete"</button>
                        <button on:click=move |_| ctx.update(|inv| inv.view_details(id))>"View Details"</button>
                    </div>
                </div>
            }
        })
    }
}
