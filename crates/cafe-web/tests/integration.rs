//! Integration tests for the cafe-web crate.
//!
//! These tests verify the server configuration and router construction
//! without binding a socket. HTTP behaviour is covered in `e2e_api.rs`.

use cafe_store::Database;
use cafe_web::{WebConfig, WebServer};

#[test]
fn web_config_defaults() {
    let config = WebConfig::default();
    assert_eq!(config.bind_addr, "127.0.0.1");
    assert_eq!(config.port, 5000);
    assert!(config.admin_api_key.is_none());
}

#[test]
fn web_config_custom() {
    let config = WebConfig {
        bind_addr: "0.0.0.0".into(),
        port: 8080,
        admin_api_key: Some("top-secret".into()),
    };
    assert_eq!(config.bind_addr, "0.0.0.0");
    assert_eq!(config.port, 8080);
    assert_eq!(config.admin_api_key.as_deref(), Some("top-secret"));
}

#[tokio::test]
async fn router_builds_over_in_memory_db() {
    let db = Database::open_in_memory().unwrap();
    db.ensure_schema().await.unwrap();

    let server = WebServer::new(WebConfig::default(), db);
    let _router = server.router();
    assert_eq!(server.addr(), "127.0.0.1:5000");
}
