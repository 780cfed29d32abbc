//! Backend API
//!
//! Frontend bindings to backend HTTP endpoints, organized by domain.

mod auth;

pub use auth::*;
