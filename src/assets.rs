//! Static asset resolution and cache busting.
//!
//! At startup the shell walks the static directory once, records which of
//! the expected files are actually present and computes a short content hash
//! for the references the templates embed. A missing file degrades the page
//! (fallback fonts, no preview image) but never stops the server.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::warn;

/// Stylesheet path relative to the static root.
pub const STYLESHEET: &str = "site.css";

/// Wordmark logo path relative to the static root.
pub const LOGO: &str = "biglogo.svg";

/// Files the deployment is expected to ship under the static root.
///
/// The first two are built into the repository; fonts and images are large
/// binaries dropped in by the deployment.
pub const EXPECTED_ASSETS: [&str; 6] = [
    "site.css",
    "biglogo.svg",
    "fonts/GeistVF.woff",
    "fonts/GeistMonoVF.woff",
    "favicon.ico",
    "og-image.png",
];

/// Hex characters of the content hash kept in the `?v=` query.
const FINGERPRINT_LEN: usize = 8;

/// Resolved asset references for one static directory.
#[derive(Debug, Clone)]
pub struct AssetManifest {
    /// Stylesheet `href` with its cache-busting query when the file exists.
    pub stylesheet_href: String,
    /// Logo `src` with its cache-busting query when the file exists.
    pub logo_href: String,
    static_dir: PathBuf,
    missing: Vec<&'static str>,
}

impl AssetManifest {
    /// Walks `static_dir` and records what is there.
    ///
    /// Never fails: absent files are logged and remembered so the health
    /// endpoint can report a degraded deployment, and their references fall
    /// back to plain paths without a fingerprint.
    pub fn resolve(static_dir: impl Into<PathBuf>) -> Self {
        let static_dir = static_dir.into();

        let missing: Vec<&'static str> = EXPECTED_ASSETS
            .into_iter()
            .filter(|rel| !static_dir.join(rel).is_file())
            .collect();
        if !missing.is_empty() {
            warn!(
                "static assets missing under {}: {} (serving degraded)",
                static_dir.display(),
                missing.join(", ")
            );
        }

        let stylesheet_href = Self::href(&static_dir, STYLESHEET);
        let logo_href = Self::href(&static_dir, LOGO);

        Self {
            stylesheet_href,
            logo_href,
            static_dir,
            missing,
        }
    }

    /// Builds `/static/<rel>`, appending `?v=<hash>` when the file exists.
    fn href(static_dir: &Path, rel: &str) -> String {
        match Self::fingerprint(&static_dir.join(rel)) {
            Some(hash) => format!("/static/{rel}?v={hash}"),
            None => format!("/static/{rel}"),
        }
    }

    /// Short content hash of the file, or `None` if it cannot be read.
    fn fingerprint(path: &Path) -> Option<String> {
        let bytes = fs::read(path).ok()?;
        let mut hash = hex::encode(Sha256::digest(&bytes));
        hash.truncate(FINGERPRINT_LEN);
        Some(hash)
    }

    /// Directory the static file service mounts.
    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    /// Absolute path of a file at the top of the static directory.
    pub fn root_file(&self, name: &str) -> PathBuf {
        self.static_dir.join(name)
    }

    /// Expected files that were not found at resolve time.
    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }

    /// True when every expected file is present.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn populate(dir: &Path) {
        fs::create_dir_all(dir.join("fonts")).unwrap();
        for rel in EXPECTED_ASSETS {
            fs::write(dir.join(rel), rel.as_bytes()).unwrap();
        }
    }

    #[test]
    fn test_present_assets_get_fingerprinted_hrefs() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());

        let manifest = AssetManifest::resolve(dir.path());

        assert!(manifest.is_complete());
        assert!(manifest.stylesheet_href.starts_with("/static/site.css?v="));
        assert!(manifest.logo_href.starts_with("/static/biglogo.svg?v="));
        let (_, hash) = manifest.stylesheet_href.split_once("?v=").unwrap();
        assert_eq!(hash.len(), 8);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_tracks_file_content() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());

        let before = AssetManifest::resolve(dir.path()).stylesheet_href;
        fs::write(dir.path().join("site.css"), "body { margin: 0 }").unwrap();
        let after = AssetManifest::resolve(dir.path()).stylesheet_href;

        assert_ne!(before, after);
    }

    #[test]
    fn test_missing_assets_degrade_to_plain_hrefs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("site.css"), "body {}").unwrap();

        let manifest = AssetManifest::resolve(dir.path());

        assert!(!manifest.is_complete());
        assert!(manifest.missing().contains(&"biglogo.svg"));
        assert!(manifest.missing().contains(&"fonts/GeistVF.woff"));
        assert!(manifest.stylesheet_href.starts_with("/static/site.css?v="));
        assert_eq!(manifest.logo_href, "/static/biglogo.svg");
    }
}
