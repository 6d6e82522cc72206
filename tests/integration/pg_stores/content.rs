//! `PgContentStore`

use cerebrum_content::{Content, ContentStore, PgContentStore};
use chrono::{Duration, Utc};
use serial_test::serial;

use super::TestDb;

#[tokio::test]
#[serial]
async fn test_list_by_owner_in_creation_order() {
    let Some(mut db) = TestDb::connect().await.unwrap() else {
        return;
    };
    let store = PgContentStore::new(db.pool.clone());
    let alice = db.create_user("alice").await.unwrap();
    let bob = db.create_user("bob").await.unwrap();

    // Inserted newest first; the listing must still be oldest first
    let base = Utc::now() - Duration::minutes(10);
    let mut expected = Vec::new();
    for (i, title) in ["third", "second", "first"].iter().enumerate() {
        let mut item =
            Content::new(alice.id, format!("http://{}", title), title.to_string()).unwrap();
        item.created_at = base + Duration::seconds(30 - 10 * i as i64);
        store.insert(&item).await.unwrap();
        expected.insert(0, item.id);
    }
    let other = Content::new(bob.id, "http://bob".to_string(), "Bob".to_string()).unwrap();
    store.insert(&other).await.unwrap();

    let listed = store.list_by_owner(alice.id).await.unwrap();
    let ids: Vec<_> = listed.iter().map(|c| c.id).collect();
    assert_eq!(ids, expected);
    assert_eq!(listed[0].title, "first");
    assert!(listed.iter().all(|c| c.user_id == alice.id));
    assert!(listed.iter().all(|c| c.tags.is_empty()));

    db.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_delete_owned_checks_owner() {
    let Some(mut db) = TestDb::connect().await.unwrap() else {
        return;
    };
    let store = PgContentStore::new(db.pool.clone());
    let alice = db.create_user("alice").await.unwrap();
    let bob = db.create_user("bob").await.unwrap();

    let item = Content::new(alice.id, "http://x".to_string(), "X".to_string()).unwrap();
    store.insert(&item).await.unwrap();

    assert!(!store.delete_owned(bob.id, item.id).await.unwrap());
    assert_eq!(store.list_by_owner(alice.id).await.unwrap().len(), 1);

    assert!(store.delete_owned(alice.id, item.id).await.unwrap());
    assert!(!store.delete_owned(alice.id, item.id).await.unwrap());
    assert!(store.list_by_owner(alice.id).await.unwrap().is_empty());

    db.cleanup().await.unwrap();
}
