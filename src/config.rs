//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Every variable has a default, so the service boots with no
//! environment at all.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Absolute site origin used for canonical and social-card
//!   URLs (default: `https://www.napkins.dev/`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `ANALYTICS_DOMAIN` - Plausible domain; set to an empty string to
//!   disable the analytics tag (default: `napkins.dev`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

use crate::shell::site::DEFAULT_BASE_URL;

/// Plausible domain used when `ANALYTICS_DOMAIN` is not set.
pub const DEFAULT_ANALYTICS_DOMAIN: &str = "napkins.dev";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Absolute origin the shell builds canonical and preview URLs from.
    pub base_url: String,
    /// Directory mounted at `/static` and probed for expected assets.
    pub static_dir: String,
    /// Plausible domain. `None` leaves the analytics tag out of every page.
    pub analytics_domain: Option<String>,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Never fails; every variable falls back to its default. Call
    /// [`Config::validate`] before using the result.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url = env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        // An empty ANALYTICS_DOMAIN is an explicit opt-out; an unset one
        // falls back to the production domain.
        let analytics_domain = match env::var("ANALYTICS_DOMAIN") {
            Ok(domain) if domain.is_empty() => None,
            Ok(domain) => Some(domain),
            Err(_) => Some(DEFAULT_ANALYTICS_DOMAIN.to_string()),
        };

        Self {
            listen_addr,
            base_url,
            static_dir,
            analytics_domain,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `base_url` is not an absolute http(s) URL
    /// - `static_dir` is empty
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        match url::Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                anyhow::bail!(
                    "BASE_URL must use http or https, got scheme '{}'",
                    url.scheme()
                );
            }
            Err(e) => {
                anyhow::bail!("BASE_URL must be an absolute URL, got '{}': {e}", self.base_url);
            }
        }

        if self.static_dir.is_empty() {
            anyhow::bail!("STATIC_DIR must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Static dir: {}", self.static_dir);

        if let Some(ref domain) = self.analytics_domain {
            tracing::info!("  Analytics: {domain} (enabled)");
        } else {
            tracing::info!("  Analytics: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: "https://www.napkins.dev/".to_string(),
            static_dir: "static".to_string(),
            analytics_domain: Some("napkins.dev".to_string()),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        };

        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        // Test relative base URL
        config.base_url = "/napkins".to_string();
        assert!(config.validate().is_err());

        // Test non-http scheme
        config.base_url = "ftp://napkins.dev/".to_string();
        assert!(config.validate().is_err());

        config.base_url = "http://localhost:3000/".to_string();
        assert!(config.validate().is_ok());

        // Test empty static dir
        config.static_dir = String::new();
        assert!(config.validate().is_err());

        config.static_dir = "static".to_string();

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("BASE_URL");
            env::remove_var("STATIC_DIR");
            env::remove_var("ANALYTICS_DOMAIN");
            env::remove_var("RUST_LOG");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.base_url, "https://www.napkins.dev/");
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.analytics_domain.as_deref(), Some("napkins.dev"));
        assert_eq!(config.log_format, "text");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_analytics_opt_out() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("ANALYTICS_DOMAIN", "");
        }

        let config = Config::from_env();
        assert_eq!(config.analytics_domain, None);

        unsafe {
            env::set_var("ANALYTICS_DOMAIN", "staging.napkins.dev");
        }

        let config = Config::from_env();
        assert_eq!(config.analytics_domain.as_deref(), Some("staging.napkins.dev"));

        // Cleanup
        unsafe {
            env::remove_var("ANALYTICS_DOMAIN");
        }
    }
}
