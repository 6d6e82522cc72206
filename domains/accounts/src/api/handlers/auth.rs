//! Signup and signin handlers
//!
//! Implements:
//! - POST /api/v1/signup - Create an account
//! - POST /api/v1/signin - Exchange credentials for a token

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use cerebrum_auth::MAX_PASSWORD_BYTES;
use cerebrum_common::{Error, RepositoryError, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::AccountsState;
use crate::domain::entities::User;

// ============================================================
// DTOs
// ============================================================

/// Request to create an account
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,
    #[validate(
        length(min = 8, message = "Password must be at least 8 characters long"),
        custom(
            function = "validate_password_bytes",
            message = "Password must be at most 72 bytes"
        )
    )]
    pub password: String,
}

/// bcrypt reads at most 72 bytes, whatever the character count
fn validate_password_bytes(
    password: &str,
) -> std::result::Result<(), validator::ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(validator::ValidationError::new("too_long"));
    }
    Ok(())
}

/// Response for a successful signup
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub user_id: Uuid,
}

/// Request to sign in
#[derive(Debug, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response carrying a signed identity token
#[derive(Debug, Serialize)]
pub struct SigninResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

// ============================================================
// Handlers
// ============================================================

/// POST /api/v1/signup - Create an account with a bcrypt-hashed password
pub async fn signup(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>)> {
    let password_hash = state.auth.hash_password(&request.password).await?;
    let user = User::new(request.username, password_hash)?;

    let created = state.users.create(&user).await.map_err(|e| match e {
        RepositoryError::AlreadyExists => {
            Error::AlreadyTaken("A user with this username already exists".to_string())
        }
        other => Error::Internal(format!("Failed to create user: {}", other)),
    })?;

    tracing::info!(user_id = %created.id, "User signed up");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User signed up successfully".to_string(),
            user_id: created.id,
        }),
    ))
}

/// POST /api/v1/signin - Verify credentials and issue a token
pub async fn signin(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<SigninRequest>,
) -> Result<Json<SigninResponse>> {
    let user = state
        .users
        .find_by_username(&request.username)
        .await
        .map_err(|e| Error::Internal(format!("Failed to load user: {}", e)))?;

    let Some(user) = user else {
        tracing::debug!("Signin for unknown username");
        return Err(invalid_credentials());
    };

    if !state
        .auth
        .verify_password(&request.password, &user.password_hash)
        .await?
    {
        tracing::debug!(user_id = %user.id, "Signin with wrong password");
        return Err(invalid_credentials());
    }

    let issued = state.auth.issue_token(user.id)?;

    tracing::info!(user_id = %user.id, "User signed in");

    Ok(Json(SigninResponse {
        token: issued.token,
        expires_at: issued.expires_at,
    }))
}

/// Same error for unknown user and wrong password
fn invalid_credentials() -> Error {
    Error::Authentication("Invalid credentials".to_string())
}
