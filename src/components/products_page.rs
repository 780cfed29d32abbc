//! Products Page Component
//!
//! Item manager: form, collection and detail overlay.

use leptos::prelude::*;

use crate::components::{DetailsOverlay, ItemCard, ItemForm};
use crate::context::InventoryContext;
use crate::inventory::Inventory;
use crate::models::Layout;

#[component]
pub fn ProductsPage() -> impl IntoView {
    // Lives as long as this screen; gone on reload or navigation
    let ctx = InventoryContext::new();
    provide_context(ctx);

    // Draft keystrokes touch neither of these
    let layout = Memo::new(move |_| ctx.with(Inventory::layout));
    let ids = Memo::new(move |_| ctx.with(Inventory::ids));

    view! {
        <div class="products-page">
            <h1>"Manage Cloth Items"</h1>

            <button class="layout-toggle" on:click=move |_| ctx.update(Inventory::toggle_layout)>
                {move || match layout.get() {
                    Layout::Grid => "Switch to List View",
                    Layout::List => "Switch to Grid View",
                }}
            </button>

            <ItemForm />

            <div class=move || layout.get().collection_class()>
                <For
                    each=move || ids.get()
                    key=|id| *id
                    children=move |id| view! { <ItemCard id=id /> }
                />
            </div>

            <DetailsOverlay />
        </div>
    }
}
