//! API layer for the content domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::content::ContentResponse;
pub use middleware::ContentState;
pub use routes::routes;
