//! App Configuration
//!
//! Paths the frontend talks to. The `/api` prefix is stripped by the dev
//! server proxy (see `Trunk.toml`) before reaching the backend.

/// Route of the login screen
pub const LOGIN_PATH: &str = "/";
/// Route of the item manager
pub const PRODUCTS_PATH: &str = "/products";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for backend calls
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api_base: "/api".to_string() }
    }
}

impl AppConfig {
    /// Full URL of a backend endpoint, e.g. `endpoint("login")` -> `/api/login`
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), name.trim_start_matches('/'))
    }
}
