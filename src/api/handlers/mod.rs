//! HTTP request handlers for service endpoints.

pub mod health;

pub use health::health_handler;
