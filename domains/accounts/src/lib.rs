//! Accounts domain: users, signup, signin

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::entities::*;
pub use repository::{MemoryUserStore, PgUserStore, UserStore};

pub use api::routes;
pub use api::AccountsState;
