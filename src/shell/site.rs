//! Fixed document metadata for the site.
//!
//! One [`SiteMetadata`] record describes every page: the shell renders the
//! same title, description, social-preview tags, and favicon regardless of
//! page content. The record is built once at startup and shared read-only.

use url::Url;

use crate::error::ShellError;

/// Document title used on every page.
pub const TITLE: &str = "Napkins.dev – Screenshot to code";

/// Meta description used on every page.
pub const DESCRIPTION: &str = "Generate your next app with a screenshot using Llama 4";

/// Open Graph site name.
pub const SITE_NAME: &str = "napkins.dev";

/// Open Graph locale.
pub const LOCALE: &str = "en_US";

/// Open Graph object type.
pub const OG_TYPE: &str = "website";

/// Twitter card style for link previews.
pub const TWITTER_CARD: &str = "summary_large_image";

/// Favicon location at the site root.
pub const FAVICON_PATH: &str = "/favicon.ico";

/// Canonical base URL of the production deployment.
pub const DEFAULT_BASE_URL: &str = "https://www.napkins.dev/";

/// Social-preview image file under the base URL.
const OG_IMAGE_FILE: &str = "og-image.png";

/// Immutable metadata record consumed by the document head.
///
/// All text fields are fixed at compile time; only the URL fields depend on
/// the configured base URL, so staging deployments advertise their own
/// canonical address. Both URL fields are absolute by construction:
/// [`Url`] cannot represent a relative reference.
#[derive(Debug, Clone)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    /// Absolute page URL, used for `rel=canonical` and `og:url`.
    pub canonical_url: Url,
    /// Absolute URL of the social-preview image.
    pub og_image_url: Url,
    pub site_name: &'static str,
    pub locale: &'static str,
    pub og_type: &'static str,
    pub twitter_card: &'static str,
    pub favicon_path: &'static str,
}

impl SiteMetadata {
    /// Builds the metadata record for the given base URL.
    ///
    /// `og_image_url` is derived by joining the preview-image file name onto
    /// the base.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::BaseUrl`] if the base is not a valid absolute
    /// URL.
    pub fn for_base(base_url: &str) -> Result<Self, ShellError> {
        let canonical_url = Url::parse(base_url)?;
        let og_image_url = canonical_url.join(OG_IMAGE_FILE)?;

        Ok(Self {
            title: TITLE,
            description: DESCRIPTION,
            canonical_url,
            og_image_url,
            site_name: SITE_NAME,
            locale: LOCALE,
            og_type: OG_TYPE,
            twitter_card: TWITTER_CARD,
            favicon_path: FAVICON_PATH,
        })
    }
}
