//! UI Components
//!
//! Leptos components for the login and products screens.

mod login_page;
mod products_page;
mod item_form;
mod item_card;
mod details_overlay;

pub use login_page::LoginPage;
pub use products_page::ProductsPage;
pub use item_form::ItemForm;
pub use item_card::ItemCard;
pub use details_overlay::DetailsOverlay;
