//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::inventory::Inventory;

/// Products screen state shared by the form, the cards and the overlay
#[derive(Clone, Copy)]
pub struct InventoryContext {
    pub inventory: RwSignal<Inventory>,
}

impl InventoryContext {
    pub fn new() -> Self {
        Self { inventory: RwSignal::new(Inventory::new()) }
    }

    /// Run a mutation against the inventory
    pub fn update(&self, f: impl FnOnce(&mut Inventory)) {
        self.inventory.update(f);
    }

    /// Read from the inventory (tracked)
    pub fn with<R>(&self, f: impl FnOnce(&Inventory) -> R) -> R {
        self.inventory.with(f)
    }
}

/// Get the inventory context provided by `ProductsPage`
pub fn use_inventory() -> InventoryContext {
    expect_context::<InventoryContext>()
}
