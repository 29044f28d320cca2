#![allow(dead_code)]

use std::fs;
use std::path::Path;

use axum_test::TestServer;
use napkins_web::assets::{AssetManifest, EXPECTED_ASSETS};
use napkins_web::routes::site_router;
use napkins_web::shell::{PageShell, SiteMetadata};
use napkins_web::state::AppState;

/// Builds state from an arbitrary static dir and analytics setting.
pub fn shell_state(static_dir: &str, analytics_domain: Option<&str>) -> AppState {
    let site = SiteMetadata::for_base("https://www.napkins.dev/").unwrap();
    let assets = AssetManifest::resolve(static_dir);
    let shell = PageShell::new(site, assets, analytics_domain.map(str::to_string));
    AppState { shell }
}

/// State backed by the repository's own static directory.
///
/// The checked-in tree ships the stylesheet and the logo but not the font
/// and image binaries, so this state is deliberately degraded.
pub fn test_state() -> AppState {
    shell_state("static", Some("napkins.dev"))
}

/// Fills a directory with every file the manifest expects.
pub fn populate_static_dir(dir: &Path) {
    fs::create_dir_all(dir.join("fonts")).unwrap();
    for rel in EXPECTED_ASSETS {
        fs::write(dir.join(rel), rel.as_bytes()).unwrap();
    }
}

/// Test server over the full site router.
pub fn test_app(state: AppState) -> TestServer {
    TestServer::new(site_router(state)).unwrap()
}
