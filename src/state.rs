use crate::assets::AssetManifest;
use crate::config::Config;
use crate::error::ShellError;
use crate::shell::{PageShell, SiteMetadata};

#[derive(Clone)]
pub struct AppState {
    pub shell: PageShell,
}

impl AppState {
    /// Builds the shared state for one server instance.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured base URL cannot be parsed.
    pub fn from_config(config: &Config) -> Result<Self, ShellError> {
        let site = SiteMetadata::for_base(&config.base_url)?;
        let assets = AssetManifest::resolve(config.static_dir.as_str());
        let shell = PageShell::new(site, assets, config.analytics_domain.clone());
        Ok(Self { shell })
    }
}
