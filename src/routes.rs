//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`             - Home page (public)
//! - `GET /health`       - Health check: templates, static assets (public)
//! - `GET /favicon.ico`  - Browser icon served at the site root
//! - `GET /og-image.png` - Social preview image served at the site root
//! - `/static/*`         - Static assets with fingerprinted references
//! - anything else       - Not-found page, rendered inside the shell
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the site router with all routes and shared state applied.
///
/// The favicon and the social preview image are routed at the site root
/// because crawlers and the metadata tags expect them there; both fall
/// through to 404 when the deployment did not ship the file.
pub fn site_router(state: AppState) -> Router {
    let favicon = ServeFile::new(state.shell.assets.root_file("favicon.ico"));
    let og_image = ServeFile::new(state.shell.assets.root_file("og-image.png"));
    let static_files = ServeDir::new(state.shell.assets.static_dir());

    Router::new()
        .merge(web::routes::page_routes())
        .route("/health", get(health_handler))
        .route_service("/favicon.ico", favicon)
        .route_service("/og-image.png", og_image)
        .nest_service("/static", static_files)
        .fallback(web::handlers::not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps the site router in trailing-slash normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(site_router(state))
}
