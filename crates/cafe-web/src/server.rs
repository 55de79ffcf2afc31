//! Web server setup and startup.
//!
//! [`WebServer`] composes the Axum router, registers all routes, and starts
//! the HTTP listener.

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::response::Html;
use axum::routing::{delete, get, patch, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use cafe_store::Database;

use crate::WebConfig;
use crate::api;
use crate::frontend::INDEX_HTML;
use crate::state::AppState;

/// The cafe API server.
pub struct WebServer {
    config: WebConfig,
    state: Arc<AppState>,
}

impl WebServer {
    /// Create a new web server.
    ///
    /// `db` must already have its schema in place; see
    /// [`Database::open_and_init`].
    pub fn new(config: WebConfig, db: Database) -> Self {
        let state = Arc::new(AppState::new(config.clone(), db));
        Self { config, state }
    }

    /// Return the `host:port` string this server will bind to.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.config.bind_addr, self.config.port)
    }

    /// Build the Axum router with all routes registered.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
            .allow_headers(Any);

        Router::new()
            .route("/", get(|| async { Html(INDEX_HTML) }))
            .route("/random", get(api::random_cafe))
            .route("/all", get(api::all_cafes))
            .route("/search", get(api::search_cafes))
            .route("/add", post(api::add_cafe))
            .route("/update-price/{cafe_id}", patch(api::update_price))
            .route("/report-closed/{cafe_id}", delete(api::report_closed))
            .route("/api/status", get(api::status))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(Arc::clone(&self.state))
    }

    /// Start the server and block until it is shut down.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot be bound.
    pub async fn start(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = self.addr();
        let router = self.router();

        if self.config.admin_api_key.is_none() {
            tracing::warn!("no admin api key configured; /report-closed will refuse every request");
        }

        tracing::info!(addr = %addr, "starting web server");

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addr_joins_bind_and_port() {
        let config = WebConfig {
            bind_addr: "0.0.0.0".into(),
            port: 8080,
            admin_api_key: None,
        };
        let server = WebServer::new(config, Database::open_in_memory().unwrap());
        assert_eq!(server.addr(), "0.0.0.0:8080");
    }
}
