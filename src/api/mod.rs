//! Service API layer for machine-readable endpoints.
//!
//! The page shell itself lives in [`crate::web`]; this layer covers the
//! operational surface around it.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
