//! Page shell assembly.
//!
//! The shell owns everything that stays constant across pages: document
//! metadata, the header and footer chrome, the analytics tag and the asset
//! references. Pages only ever supply the fragment that goes into the main
//! content slot, either through template inheritance (see
//! [`crate::web::handlers`]) or as a pre-rendered string via
//! [`PageShell::render_around`].

pub mod nav;
pub mod site;

use std::sync::Arc;

use askama::Template;

use crate::assets::AssetManifest;
use crate::error::ShellError;

pub use nav::{
    ATTRIBUTION_LINKS, FOOTER_PROFILE_LINK, FOOTER_REPO_LINK, HEADER_REPO_LINK, NavLink,
    PROFILE_URL, REPO_URL, TOGETHER_URL,
};
pub use site::SiteMetadata;

/// Viewport width in CSS pixels at which the wide layout applies.
///
/// Below this width the header call-to-action is hidden and the footer
/// stacks vertically. The stylesheet and the admin checks both derive their
/// media query from this value.
pub const WIDE_BREAKPOINT_PX: u32 = 640;

/// Returns the rules scoped to the wide layout in a stylesheet.
///
/// Extracts the body of the `@media` block for [`WIDE_BREAKPOINT_PX`], or
/// `None` when the stylesheet has no complete block for it.
pub fn wide_media_block(css: &str) -> Option<&str> {
    let query = format!("(min-width: {WIDE_BREAKPOINT_PX}px)");
    let start = css.find(&query)?;
    let rest = &css[start + query.len()..];
    let open = rest.find('{')?;
    let body = &rest[open + 1..];

    let mut depth = 1;
    for (i, c) in body.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&body[..i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Everything a page template needs besides its own content fragment.
///
/// Cheap to clone; the metadata and asset records are shared behind [`Arc`].
/// One instance is built at startup and handed to every handler through the
/// application state.
#[derive(Debug, Clone)]
pub struct PageShell {
    /// Fixed document metadata (title, description, social cards).
    pub site: Arc<SiteMetadata>,
    /// Resolved asset references with cache-busting fingerprints.
    pub assets: Arc<AssetManifest>,
    /// Plausible domain. `None` disables the analytics tag entirely.
    pub analytics_domain: Option<String>,
}

impl PageShell {
    pub fn new(
        site: SiteMetadata,
        assets: AssetManifest,
        analytics_domain: Option<String>,
    ) -> Self {
        Self {
            site: Arc::new(site),
            assets: Arc::new(assets),
            analytics_domain,
        }
    }

    /// Header call-to-action, hidden below [`WIDE_BREAKPOINT_PX`].
    pub fn header_repo_link(&self) -> NavLink {
        HEADER_REPO_LINK
    }

    /// Footer repository button.
    pub fn footer_repo_link(&self) -> NavLink {
        FOOTER_REPO_LINK
    }

    /// Footer profile button.
    pub fn footer_profile_link(&self) -> NavLink {
        FOOTER_PROFILE_LINK
    }

    /// Footer attribution links, in render order.
    pub fn attribution_links(&self) -> &'static [NavLink] {
        &ATTRIBUTION_LINKS
    }

    /// Wraps an already-rendered HTML fragment in the full shell.
    ///
    /// The fragment is inserted into the main content slot verbatim, without
    /// escaping, so callers are responsible for its safety. Handlers that
    /// render askama pages do not go through here; this path serves the
    /// render probe and the admin tooling.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Render`] when template rendering fails.
    pub fn render_around(&self, content: &str) -> Result<String, ShellError> {
        let page = FragmentPage {
            shell: self,
            content,
        };
        Ok(page.render()?)
    }
}

/// Adapter that feeds a raw fragment into the base template's content block.
#[derive(Template)]
#[template(
    source = r#"{% extends "base.html" %}{% block content %}{{ content|safe }}{% endblock %}"#,
    ext = "html"
)]
struct FragmentPage<'a> {
    shell: &'a PageShell,
    content: &'a str,
}
