//! Web layer for browser-facing pages.
//!
//! Every page renders inside the shared chrome owned by [`crate::shell`];
//! handlers only supply the fragment that goes into the content slot.
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
