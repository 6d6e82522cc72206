//! HTTP handlers for the content domain

pub mod content;
