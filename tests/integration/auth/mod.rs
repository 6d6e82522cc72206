//! Auth gate integration tests
//!
//! Exercises the bearer-token gate through a protected route.

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Method, Request, StatusCode},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use uuid::Uuid;

use crate::common::{TestApp, TEST_JWT_SECRET};

fn sign(claims: serde_json::Value, secret: &str) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

async fn list_with_header(app: &TestApp, header: Option<&str>) -> StatusCode {
    let mut builder = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/content");
    if let Some(value) = header {
        builder = builder.header(AUTHORIZATION, value);
    }
    app.send(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status
}

#[tokio::test]
async fn test_token_from_signin_opens_protected_routes() {
    let app = TestApp::new();
    let alice = app.register("alice").await.unwrap();

    let status = list_with_header(&app, Some(&format!("Bearer {}", alice.token))).await;
    assert_eq!(status, StatusCode::OK);

    let ctx = app.auth.authenticate(&alice.token).unwrap();
    assert_eq!(ctx.user_id, alice.user_id);
}

#[tokio::test]
async fn test_bearer_scheme_is_case_insensitive() {
    let app = TestApp::new();
    let alice = app.register("alice").await.unwrap();

    let status = list_with_header(&app, Some(&format!("bearer {}", alice.token))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_and_malformed_headers_rejected() {
    let app = TestApp::new();

    assert_eq!(list_with_header(&app, None).await, StatusCode::UNAUTHORIZED);
    assert_eq!(
        list_with_header(&app, Some("Bearer")).await,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        list_with_header(&app, Some("Bearer ")).await,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        list_with_header(&app, Some("Basic dXNlcjpwYXNz")).await,
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn test_tampered_signature_rejected() {
    let app = TestApp::new();
    let alice = app.register("alice").await.unwrap();

    // Flip the first character of the signature segment
    let (signed, signature) = alice.token.rsplit_once('.').unwrap();
    let mut chars: Vec<char> = signature.chars().collect();
    chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
    let tampered = format!("{}.{}", signed, chars.into_iter().collect::<String>());

    let status = list_with_header(&app, Some(&format!("Bearer {}", tampered))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let app = TestApp::new();
    let now = Utc::now();
    let token = sign(
        json!({
            "sub": Uuid::new_v4().to_string(),
            "iat": now.timestamp(),
            "exp": (now + Duration::hours(1)).timestamp(),
        }),
        "some-other-secret",
    );

    let status = list_with_header(&app, Some(&format!("Bearer {}", token))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::new();
    let now = Utc::now();
    let token = sign(
        json!({
            "sub": Uuid::new_v4().to_string(),
            "iat": (now - Duration::days(8)).timestamp(),
            "exp": (now - Duration::days(1)).timestamp(),
        }),
        TEST_JWT_SECRET,
    );

    let status = list_with_header(&app, Some(&format!("Bearer {}", token))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_uuid_subject_rejected() {
    let app = TestApp::new();
    let now = Utc::now();
    let token = sign(
        json!({
            "sub": "not-a-uuid",
            "iat": now.timestamp(),
            "exp": (now + Duration::hours(1)).timestamp(),
        }),
        TEST_JWT_SECRET,
    );

    let response = app
        .request(Method::GET, "/api/v1/content", Some(&token), None)
        .await
        .unwrap();
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_public_routes_need_no_token() {
    let app = TestApp::new();

    let health = app
        .send(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(health.status, StatusCode::OK);

    let brain = app.resolve("abcdefghij").await.unwrap();
    assert_eq!(brain.status, StatusCode::NOT_FOUND);
}
