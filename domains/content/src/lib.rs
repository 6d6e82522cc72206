//! Content domain: saved links owned by a user

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::entities::*;
pub use domain::service::ContentService;
pub use repository::{ContentStore, MemoryContentStore, PgContentStore};

pub use api::routes;
pub use api::{ContentResponse, ContentState};
