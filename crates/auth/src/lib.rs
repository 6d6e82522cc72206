//! Authentication for the Cerebrum API
//!
//! Provides token issuing and verification, password hashing, and the
//! `AuthUser` extractor that works with any domain state implementing
//! `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;
mod password;

pub use backend::{AuthBackend, IssuedToken};
pub use claims::TokenClaims;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::AuthUser;
pub use password::MAX_PASSWORD_BYTES;
