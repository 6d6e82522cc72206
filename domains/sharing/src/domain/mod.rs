//! Domain layer for sharing

pub mod entities;
pub mod error;
pub mod service;
