//! Fallback handler for unmatched paths.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use metrics::counter;

use crate::shell::PageShell;
use crate::state::AppState;

/// Template for the not-found page.
///
/// Renders `templates/not_found.html` inside the shared shell so the
/// header and footer survive on error pages too.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    shell: PageShell,
}

/// Renders the not-found page for any unrouted request.
pub async fn not_found_handler(State(state): State<AppState>) -> impl IntoResponse {
    counter!("pages_rendered_total", "page" => "not_found").increment(1);
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            shell: state.shell.clone(),
        },
    )
}
