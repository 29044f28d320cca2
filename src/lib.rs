//! # Napkins Web
//!
//! The web shell for napkins.dev, a screenshot-to-app generator. Serves
//! every page inside one fixed chrome: document metadata and social cards,
//! a persistent header and footer, the Plausible analytics tag and
//! fingerprinted static asset references.
//!
//! ## Architecture
//!
//! The crate is layered around the shell:
//!
//! - **Shell Layer** ([`shell`]) - Site metadata, chrome links and the
//!   content slot contract
//! - **Asset Layer** ([`assets`]) - Static file resolution and cache
//!   busting
//! - **API Layer** ([`api`]) - Health endpoint, DTOs and middleware
//! - **Web Layer** ([`web`]) - Askama page handlers rendering into the
//!   shell
//!
//! ## Quick Start
//!
//! ```bash
//! # Everything has a default; override as needed
//! export BASE_URL="https://www.napkins.dev/"
//! export ANALYTICS_DOMAIN="napkins.dev"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod assets;
pub mod error;
pub mod shell;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::ShellError;
pub use shell::PageShell;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::assets::AssetManifest;
    pub use crate::error::ShellError;
    pub use crate::shell::{NavLink, PageShell, SiteMetadata};
    pub use crate::state::AppState;
}
