//! Accounts domain layer: entities and their validation rules

pub mod entities;
