//! Password hashing with bcrypt
//!
//! Hashing is CPU-bound, so both operations run on the blocking pool.

use cerebrum_common::{Error, Result};

/// bcrypt ignores everything past this many bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hash a plaintext password
///
/// Passwords longer than `MAX_PASSWORD_BYTES` are rejected rather than truncated.
pub(crate) async fn hash_password(password: String, cost: u32) -> Result<String> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(Error::Validation(format!(
            "password: must be at most {} bytes",
            MAX_PASSWORD_BYTES
        )));
    }

    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| Error::Internal(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))
}

/// Check a plaintext password against a stored bcrypt hash
///
/// A malformed stored hash is logged and treated as a mismatch. So is a
/// password over `MAX_PASSWORD_BYTES`, since no stored hash was made from one.
pub(crate) async fn verify_password(password: String, hash: String) -> Result<bool> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Ok(false);
    }

    let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| Error::Internal(format!("Password verification task failed: {}", e)))?;

    match outcome {
        Ok(valid) => Ok(valid),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be parsed");
            Ok(false)
        }
    }
}
