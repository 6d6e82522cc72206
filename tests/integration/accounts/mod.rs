//! Signup and signin integration tests

use axum::http::StatusCode;

use crate::common::TestApp;

#[tokio::test]
async fn test_signup_then_signin() {
    let app = TestApp::new();

    let signup = app.signup("alice", "password1").await.unwrap();
    assert_eq!(signup.status, StatusCode::CREATED);
    assert_eq!(signup.body["message"], "User signed up successfully");

    let signin = app.signin("alice", "password1").await.unwrap();
    assert_eq!(signin.status, StatusCode::OK);
    assert!(signin.body["token"].is_string());
    assert!(signin.body["expires_at"].is_string());
}

#[tokio::test]
async fn test_stored_password_is_hashed() {
    let app = TestApp::new();
    app.signup("alice", "password1").await.unwrap();

    let user = app.users.find_by_username("alice").await.unwrap().unwrap();
    assert_ne!(user.password_hash, "password1");
    assert!(user.password_hash.starts_with("$2"));
}

#[tokio::test]
async fn test_duplicate_username_rejected_with_422() {
    let app = TestApp::new();
    app.signup("alice", "password1").await.unwrap();

    let again = app.signup("alice", "another-password").await.unwrap();
    assert_eq!(again.status, StatusCode::UNPROCESSABLE_ENTITY);

    // The original password still works
    let signin = app.signin("alice", "password1").await.unwrap();
    assert_eq!(signin.status, StatusCode::OK);
}

#[tokio::test]
async fn test_usernames_are_case_sensitive() {
    let app = TestApp::new();
    app.signup("alice", "password1").await.unwrap();

    let other = app.signup("Alice", "password1").await.unwrap();
    assert_eq!(other.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_concurrent_signups_create_one_user() {
    let app = std::sync::Arc::new(TestApp::new());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { app.signup("alice", "password1").await.unwrap().status })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        let status = handle.await.unwrap();
        if status == StatusCode::CREATED {
            created += 1;
        } else {
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        }
    }
    assert_eq!(created, 1);
}

#[tokio::test]
async fn test_signup_validation() {
    let app = TestApp::new();

    let short = app.signup("alice", "short").await.unwrap();
    assert_eq!(short.status, StatusCode::BAD_REQUEST);

    let too_long = app.signup("alice", &"p".repeat(73)).await.unwrap();
    assert_eq!(too_long.status, StatusCode::BAD_REQUEST);

    let empty_name = app.signup("", "password1").await.unwrap();
    assert_eq!(empty_name.status, StatusCode::BAD_REQUEST);

    assert!(app.users.find_by_username("alice").await.unwrap().is_none());
}

#[tokio::test]
async fn test_signin_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.signup("alice", "password1").await.unwrap();

    let wrong_password = app.signin("alice", "password2").await.unwrap();
    let unknown_user = app.signin("bob", "password1").await.unwrap();

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_user.body);
}

#[tokio::test]
async fn test_multibyte_password_past_bcrypt_limit_rejected() {
    let app = TestApp::new();
    // 40 characters, 76 bytes; only the first 72 bytes would reach bcrypt
    let prefix = "é".repeat(36);

    let signup = app.signup("alice", &format!("{}aaaa", prefix)).await.unwrap();
    assert_eq!(signup.status, StatusCode::BAD_REQUEST);
    assert!(app.users.find_by_username("alice").await.unwrap().is_none());

    let exact = app.signup("alice", &prefix).await.unwrap();
    assert_eq!(exact.status, StatusCode::CREATED);

    let longer = app.signin("alice", &format!("{}zzzz", prefix)).await.unwrap();
    assert_eq!(longer.status, StatusCode::UNAUTHORIZED);

    let signin = app.signin("alice", &prefix).await.unwrap();
    assert_eq!(signin.status, StatusCode::OK);
}
