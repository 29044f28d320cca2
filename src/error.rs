//! Crate error types.
//!
//! Composition of static values cannot fail, so the surface stays small:
//! URL construction at startup and mechanical template failures at render
//! time. The binaries wrap these in `anyhow` with context.

use thiserror::Error;

/// Errors produced while building or rendering the page shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The configured base URL could not be parsed as an absolute URL.
    #[error("invalid site base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// Template rendering failed.
    #[error("failed to render page shell: {0}")]
    Render(#[from] askama::Error),
}
