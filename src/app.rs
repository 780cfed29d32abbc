//! Cloth Inventory App
//!
//! Root component: config context and the two routes.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{LoginPage, ProductsPage};
use crate::config::{AppConfig, LOGIN_PATH};

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::default());

    // Paths mirror LOGIN_PATH / PRODUCTS_PATH in config
    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! {
                    <p class="not-found">"Page not found. " <a href=LOGIN_PATH>"Back to login"</a></p>
                }>
                    <Route path=path!("/") view=LoginPage />
                    <Route path=path!("/products") view=ProductsPage />
                </Routes>
            </main>
        </Router>
    }
}
