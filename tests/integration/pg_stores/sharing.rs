//! `PgShareLinkStore`

use cerebrum_sharing::{InsertOutcome, PgShareLinkStore, ShareLink, ShareLinkStore};
use chrono::Utc;
use serial_test::serial;

use super::{unique_hash, TestDb};

fn link(user_id: uuid::Uuid, hash: String) -> ShareLink {
    ShareLink {
        user_id,
        hash,
        created_at: Utc::now(),
    }
}

#[tokio::test]
#[serial]
async fn test_second_insert_returns_existing_link() {
    let Some(mut db) = TestDb::connect().await.unwrap() else {
        return;
    };
    let store = PgShareLinkStore::new(db.pool.clone());
    let alice = db.create_user("alice").await.unwrap();

    let first = link(alice.id, unique_hash());
    let created = match store.insert(&first).await.unwrap() {
        InsertOutcome::Created(created) => created,
        other => panic!("expected Created, got {:?}", other),
    };
    assert_eq!(created.hash, first.hash);

    let second = link(alice.id, unique_hash());
    match store.insert(&second).await.unwrap() {
        InsertOutcome::AlreadyShared(existing) => {
            assert_eq!(existing.hash, first.hash);
            assert_eq!(existing.user_id, alice.id);
        }
        other => panic!("expected AlreadyShared, got {:?}", other),
    }

    // The losing hash was never stored
    assert!(store.find_by_hash(&second.hash).await.unwrap().is_none());

    db.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_hash_clash_asks_for_retry() {
    let Some(mut db) = TestDb::connect().await.unwrap() else {
        return;
    };
    let store = PgShareLinkStore::new(db.pool.clone());
    let alice = db.create_user("alice").await.unwrap();
    let bob = db.create_user("bob").await.unwrap();

    let hash = unique_hash();
    assert!(matches!(
        store.insert(&link(alice.id, hash.clone())).await.unwrap(),
        InsertOutcome::Created(_)
    ));

    assert_eq!(
        store.insert(&link(bob.id, hash.clone())).await.unwrap(),
        InsertOutcome::Retry
    );
    assert!(store.find_by_user(bob.id).await.unwrap().is_none());
    assert_eq!(
        store.find_by_hash(&hash).await.unwrap().unwrap().user_id,
        alice.id
    );

    db.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_concurrent_inserts_keep_one_link() {
    let Some(mut db) = TestDb::connect().await.unwrap() else {
        return;
    };
    let alice = db.create_user("alice").await.unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = PgShareLinkStore::new(db.pool.clone());
            let candidate = link(alice.id, unique_hash());
            tokio::spawn(async move { store.insert(&candidate).await.unwrap() })
        })
        .collect();

    let mut created = Vec::new();
    let mut existing = Vec::new();
    for handle in handles {
        match handle.await.unwrap() {
            InsertOutcome::Created(link) => created.push(link),
            InsertOutcome::AlreadyShared(link) => existing.push(link),
            InsertOutcome::Retry => {}
        }
    }
    assert_eq!(created.len(), 1);
    assert!(existing.iter().all(|link| link.hash == created[0].hash));

    db.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_delete_by_user() {
    let Some(mut db) = TestDb::connect().await.unwrap() else {
        return;
    };
    let store = PgShareLinkStore::new(db.pool.clone());
    let alice = db.create_user("alice").await.unwrap();

    assert!(!store.delete_by_user(alice.id).await.unwrap());

    let hash = unique_hash();
    store.insert(&link(alice.id, hash.clone())).await.unwrap();
    assert!(store.delete_by_user(alice.id).await.unwrap());
    assert!(store.find_by_hash(&hash).await.unwrap().is_none());

    db.cleanup().await.unwrap();
}
