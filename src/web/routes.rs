//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::home_handler;
use axum::{Router, routing::get};

/// Browser-facing page routes.
///
/// # Endpoints
///
/// - `GET /` - Home page with the generator entry point
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(home_handler))
}
