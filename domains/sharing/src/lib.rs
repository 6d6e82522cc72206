//! Sharing domain: public read-only links to a user's saved content

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::entities::*;
pub use domain::error::ShareError;
pub use domain::service::{ShareService, SharedBrain};
pub use repository::{InsertOutcome, MemoryShareLinkStore, PgShareLinkStore, ShareLinkStore};

pub use api::routes;
pub use api::SharingState;
