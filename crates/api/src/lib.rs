//! Skychart API
//!
//! axum routes exposing the registry queries over HTTP.

pub mod handlers;
pub mod router;
pub mod security;
pub mod state;

pub use router::create_router;
pub use state::AppState;
