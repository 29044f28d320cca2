//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;
use metrics::counter;

use crate::shell::PageShell;
use crate::state::AppState;

/// Template for the home page.
///
/// Renders `templates/home.html` inside the shared shell with:
/// - Hero copy introducing the generator
/// - Screenshot upload call to action
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    shell: PageShell,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Template
///
/// Uses `templates/home.html` for server-side rendering.
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    counter!("pages_rendered_total", "page" => "home").increment(1);
    HomeTemplate {
        shell: state.shell.clone(),
    }
}
