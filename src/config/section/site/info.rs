//! `[site.info]` configuration.
//!
//! Basic site information handed to the rendering engine unchanged:
//! browser title, meta description, html language.

use crate::config::ConfigDiagnostics;
use macros::Config;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Site metadata.
/// For custom fields, use `[site.info.extra]`; they are passed through to
/// the engine without interpretation.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.info")]
pub struct SiteInfoConfig {
    /// Site title.
    #[config(inline_doc = "shown in the browser tab and nav bar")]
    pub title: String,

    /// Site description.
    pub description: String,

    /// Author name.
    pub author: String,

    /// Site URL; its path becomes the default base prefix
    /// (e.g., "https://example.github.io/blog").
    pub url: Option<String>,

    /// Language code (e.g., "en", "zh-Hans").
    #[config(default = "en")]
    pub language: String,

    /// Custom fields passed through to the engine unchanged.
    #[serde(default)]
    #[config(skip)]
    pub extra: FxHashMap<String, toml::Value>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            author: String::new(),
            url: None,
            language: "en".into(),
            extra: FxHashMap::default(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` must be set
    /// - `url` must be a valid URL with an http/https scheme and a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "required",
                "set a site title, e.g.: \"My Blog\"",
            );
        }

        // URL format check using url crate for strict validation
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(title: &str, url: Option<&str>) -> SiteInfoConfig {
        SiteInfoConfig {
            title: title.into(),
            url: url.map(Into::into),
            ..SiteInfoConfig::default()
        }
    }

    #[test]
    fn test_title_is_required() {
        let mut diag = ConfigDiagnostics::new();
        info("", None).validate(&mut diag);
        assert!(diag.has_errors());

        let mut diag = ConfigDiagnostics::new();
        info("My Blog", None).validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_url_scheme_and_host_checked() {
        let mut diag = ConfigDiagnostics::new();
        info("t", Some("https://example.github.io/blog")).validate(&mut diag);
        assert!(diag.is_empty());

        let mut diag = ConfigDiagnostics::new();
        info("t", Some("ftp://example.com")).validate(&mut diag);
        assert_eq!(diag.len(), 1);

        let mut diag = ConfigDiagnostics::new();
        info("t", Some("not a url")).validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
