//! API layer for the sharing domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::SharingState;
pub use routes::routes;
