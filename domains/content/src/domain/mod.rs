//! Content domain layer: entities and the owner-scoped content service

pub mod entities;
pub mod service;
