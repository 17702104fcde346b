//! Per-deployment site settings used to build URLs and publisher data.
//!
//! Loaded from a TOML file; every field has a default, so an empty file (or
//! no file at all) yields the stock ModernBlog profile:
//!
//! ```toml
//! origin = "https://modernblog.com"
//! site_name = "ModernBlog"
//! default_image = "https://modernblog.com/og-image.jpg"
//!
//! [logo]
//! url = "https://modernblog.com/logo.png"
//! width = 200
//! height = 60
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_ORIGIN: &str = "https://modernblog.com";
pub const DEFAULT_SITE_NAME: &str = "ModernBlog";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute http(s) origin, no trailing slash.
    pub origin: String,
    pub site_name: String,
    pub default_image: String,
    pub logo: LogoConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogoConfig {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            origin: DEFAULT_ORIGIN.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            default_image: format!("{}/og-image.jpg", DEFAULT_ORIGIN),
            logo: LogoConfig::default(),
        }
    }
}

impl Default for LogoConfig {
    fn default() -> Self {
        LogoConfig {
            url: format!("{}/logo.png", DEFAULT_ORIGIN),
            width: 200,
            height: 60,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(text)?;
        config.validated()
    }

    /// Read `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SiteConfig::default()),
            Err(e) => Err(ConfigError::Io(e)),
        }
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        let trimmed = self.origin.trim().trim_end_matches('/');
        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));
        match host {
            Some(h) if !h.is_empty() && !h.contains(char::is_whitespace) => {}
            _ => {
                return Err(ConfigError::InvalidValue {
                    field: "origin".to_string(),
                    reason: format!("'{}' is not an absolute http(s) URL", self.origin),
                })
            }
        }
        self.origin = trimmed.to_string();

        if self.site_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "site_name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(self)
    }

    /// `{origin}/article/{slug}`
    pub fn article_url(&self, slug: &str) -> String {
        format!("{}/article/{}", self.origin, slug)
    }

    /// `{origin}/author/{name}` with the name lowercased and whitespace runs hyphenated.
    pub fn author_url(&self, author_name: &str) -> String {
        let handle = author_name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        format!("{}/author/{}", self.origin, handle)
    }

    /// `{origin}/uploads/{file_name}`
    pub fn upload_url(&self, file_name: &str) -> String {
        format!("{}/uploads/{}", self.origin, file_name)
    }
}
