//! Integration tests for the cafe-store crate.
//!
//! These tests exercise the store against a real SQLite database on disk
//! (via tempfile), including reopening the file.

use cafe_store::{CafeStore, Database, NewCafe, StoreError};

fn sample(name: &str, location: &str) -> NewCafe {
    NewCafe {
        name: Some(name.into()),
        map_url: Some("https://maps.example/x".into()),
        img_url: Some("https://img.example/x.jpg".into()),
        location: Some(location.into()),
        sockets: Some("true".into()),
        toilet: Some(String::new()),
        wifi: Some("true".into()),
        calls: Some(String::new()),
        seats: Some("10".into()),
        coffee_price: Some("£3.00".into()),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  Database lifecycle
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn database_open_and_init_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("cafes.db");

    let db = Database::open_and_init(db_path.clone()).await.unwrap();
    let count = CafeStore::new(db).count().await.unwrap();

    assert_eq!(count, 0);
    assert!(db_path.exists());
}

#[tokio::test]
async fn rows_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("cafes.db");

    let id = {
        let db = Database::open_and_init(db_path.clone()).await.unwrap();
        let store = CafeStore::new(db);
        store.insert(sample("Persistent", "Camden")).await.unwrap().id
    };

    // Opening again must not wipe the table.
    let db = Database::open_and_init(db_path).await.unwrap();
    let store = CafeStore::new(db);
    let cafe = store.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(cafe.name, "Persistent");
    assert_eq!(cafe.coffee_price.as_deref(), Some("£3.00"));
}

// ═══════════════════════════════════════════════════════════════════════
//  Full record lifecycle
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn cafe_full_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open_and_init(dir.path().join("cafes.db")).await.unwrap();
    let store = CafeStore::new(db);

    // Add.
    let cafe = store.insert(sample("Test Cafe", "London")).await.unwrap();
    assert!(cafe.has_sockets);
    assert!(!cafe.has_toilet);
    assert!(cafe.has_wifi);
    assert!(!cafe.can_take_calls);

    // Search.
    let found = store.find_by_location("london").await.unwrap();
    assert_eq!(found, vec![cafe.clone()]);

    // Random pick with a single row is that row.
    assert_eq!(store.pick_random().await.unwrap(), cafe);

    // Update price.
    let updated = store
        .update_price(cafe.id, Some("£3.50".into()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.coffee_price.as_deref(), Some("£3.50"));

    // Delete.
    assert!(store.delete(cafe.id).await.unwrap());
    assert!(store.list_all().await.unwrap().is_empty());
    assert!(matches!(
        store.pick_random().await.unwrap_err(),
        StoreError::EmptyStore
    ));
}
