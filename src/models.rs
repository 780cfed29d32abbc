//! Frontend Models
//!
//! Inventory records, login wire types and presentation flags.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Stable item identifier, assigned when an item is first committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

/// Editable part of an item. The draft bound to the form is one of these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ItemFields {
    /// Image as a `data:` URL, shared between the draft, the item and any snapshot
    pub photo: Option<Arc<str>>,
    pub name: String,
    pub size: String,
    /// Kept as typed; no numeric validation
    pub quantity: String,
    pub details: String,
}

impl ItemFields {
    pub fn get(&self, field: ItemField) -> &str {
        match field {
            ItemField::Name => &self.name,
            ItemField::Size => &self.size,
            ItemField::Quantity => &self.quantity,
            ItemField::Details => &self.details,
        }
    }

    pub fn set(&mut self, field: ItemField, value: String) {
        match field {
            ItemField::Name => self.name = value,
            ItemField::Size => self.size = value,
            ItemField::Quantity => self.quantity = value,
            ItemField::Details => self.details = value,
        }
    }
}

/// A committed inventory record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    pub id: ItemId,
    pub fields: ItemFields,
}

/// Text attributes of an item that the form edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Size,
    Quantity,
    Details,
}

/// Collection presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Grid,
    List,
}

impl Layout {
    pub fn toggled(self) -> Self {
        match self {
            Layout::Grid => Layout::List,
            Layout::List => Layout::Grid,
        }
    }

    /// Class of the item collection container (see `style.css`)
    pub fn collection_class(self) -> &'static str {
        match self {
            Layout::Grid => "item-collection grid",
            Layout::List => "item-collection list",
        }
    }
}

/// Login form contents, also the request body of `POST /login`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub user: String,
    pub pass: String,
}

/// Body returned by the authentication endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
