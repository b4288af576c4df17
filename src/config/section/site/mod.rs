//! `[site]` section configuration.
//!
//! Contains the content root, deployment prefix, and site metadata.
//!
//! # Example
//!
//! ```toml
//! [site]
//! src = "src"
//! base = "/blog/"
//!
//! [site.info]
//! title = "My Blog"
//! description = "A personal blog"
//! author = "Alice"
//! url = "https://alice.github.io/blog"
//! ```

mod info;

pub use info::SiteInfoConfig;

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Site section configuration: content root, base prefix, and metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Source content root, relative to the project root.
    #[config(default = "src")]
    pub src: PathBuf,

    /// Deployment path prefix (e.g. "/blog/"). Derived from the path
    /// component of `site.info.url` when unset.
    pub base: Option<String>,

    /// Site metadata (title, description, author, url, language).
    #[config(sub)]
    pub info: SiteInfoConfig,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            src: PathBuf::from("src"),
            base: None,
            info: SiteInfoConfig::default(),
        }
    }
}

impl SiteSectionConfig {
    /// Validate the `[site]` section.
    ///
    /// # Checks
    /// - `src` must be a relative path (it is resolved against the root)
    /// - `base`, when set, must start with `/`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.src.as_os_str().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.src,
                "content root is empty",
                "use a directory relative to the project root, e.g. \"src\"",
            );
        }

        if let Some(base) = &self.base
            && !base.starts_with('/')
        {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("`{base}` is not an absolute path prefix"),
                "start the prefix with a slash, e.g. \"/blog/\"",
            );
        }

        self.info.validate(diag);
    }

    /// Pre-validate paths before normalization.
    ///
    /// Must run before the root join: afterwards every path is absolute and
    /// a user-supplied absolute `src` can no longer be detected.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        if self.src.is_absolute() {
            diag.error_with_hint(
                Self::FIELDS.src,
                format!("`{}` is absolute", self.src.display()),
                "use a directory relative to the project root, e.g. \"src\"",
            );
        }
    }

    /// Normalized base prefix in `/prefix/` form (`/` when unset).
    pub fn base_prefix(&self) -> String {
        match self.base.as_deref() {
            None | Some("") | Some("/") => "/".to_string(),
            Some(base) => {
                let trimmed = base.trim_matches('/');
                format!("/{trimmed}/")
            }
        }
    }

    /// Normalize `src` against the project root.
    pub fn normalize(&mut self, root: &Path) {
        self.src = crate::utils::path::normalize_path(&root.join(&self.src));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_prefix_normalization() {
        let mut site = SiteSectionConfig::default();
        assert_eq!(site.base_prefix(), "/");

        site.base = Some("/blog/".into());
        assert_eq!(site.base_prefix(), "/blog/");

        site.base = Some("/blog".into());
        assert_eq!(site.base_prefix(), "/blog/");

        site.base = Some("/a/b".into());
        assert_eq!(site.base_prefix(), "/a/b/");

        site.base = Some("/".into());
        assert_eq!(site.base_prefix(), "/");
    }

    #[test]
    fn test_relative_base_is_rejected() {
        let site = SiteSectionConfig {
            base: Some("blog".into()),
            ..SiteSectionConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_absolute_src_is_rejected_before_normalization() {
        let site = SiteSectionConfig {
            src: PathBuf::from("/etc/content"),
            ..SiteSectionConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate_paths(&mut diag);
        assert!(diag.has_errors());
    }
}
