//! Shared application state for the web server.
//!
//! [`AppState`] is wrapped in an `Arc` and shared across all request
//! handlers. It carries the store handles and the startup configuration,
//! including the admin key checked by the delete route.

use cafe_store::{CafeStore, Database};

use crate::WebConfig;

/// Shared state accessible from every Axum handler.
#[derive(Clone)]
pub struct AppState {
    /// Web server configuration.
    pub config: WebConfig,

    /// Database handle, used for health checks.
    pub db: Database,

    /// Data access layer for cafe rows.
    pub cafes: CafeStore,
}

impl AppState {
    /// Build the state around an initialized database.
    pub fn new(config: WebConfig, db: Database) -> Self {
        let cafes = CafeStore::new(db.clone());
        Self { config, db, cafes }
    }

    /// Whether `candidate` matches the configured admin key.
    ///
    /// Always `false` when no key is configured.
    pub fn admin_key_matches(&self, candidate: Option<&str>) -> bool {
        match (self.config.admin_api_key.as_deref(), candidate) {
            (Some(expected), Some(given)) => expected == given,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_key(key: Option<&str>) -> AppState {
        let config = WebConfig {
            admin_api_key: key.map(str::to_owned),
            ..WebConfig::default()
        };
        AppState::new(config, Database::open_in_memory().unwrap())
    }

    #[test]
    fn admin_key_compared_literally() {
        let state = state_with_key(Some("s3cret"));
        assert!(state.admin_key_matches(Some("s3cret")));
        assert!(!state.admin_key_matches(Some("S3CRET")));
        assert!(!state.admin_key_matches(Some("s3cret ")));
        assert!(!state.admin_key_matches(None));
    }

    #[test]
    fn missing_admin_key_refuses_everything() {
        let state = state_with_key(None);
        assert!(!state.admin_key_matches(Some("")));
        assert!(!state.admin_key_matches(Some("anything")));
        assert!(!state.admin_key_matches(None));
    }
}
