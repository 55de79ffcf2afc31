//! HTTP interface for the cafe store.
//!
//! This crate provides an Axum server exposing:
//!
//! - A JSON API to read, search, add, re-price and close cafes.
//! - A landing page at `/` documenting the routes.
//! - A status endpoint reporting database health.

pub mod api;
pub mod frontend;
pub mod server;
pub mod state;

pub use server::WebServer;
pub use state::AppState;

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// The address to bind the HTTP server to.
    pub bind_addr: String,
    /// The port to listen on.
    pub port: u16,
    /// Secret required by `DELETE /report-closed/{id}`.
    ///
    /// When `None`, every delete request is refused.
    pub admin_api_key: Option<String>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".into(),
            port: 5000,
            admin_api_key: None,
        }
    }
}
