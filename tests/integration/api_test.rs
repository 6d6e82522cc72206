//! API endpoint integration tests
//!
//! Tests for every route of the composed application: accounts, auth gate,
//! content, sharing.

#![allow(dead_code)]

mod accounts;
mod auth;
mod common;
mod content;
mod sharing;
