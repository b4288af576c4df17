//! Site plan - the frozen shape handed to the rendering engine.

use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::config::section::{
    FooterConfig, LastUpdatedConfig, LogoConfig, SearchConfig, SocialLink,
};
use crate::nav::{NavError, NavTree};

/// Everything the external rendering engine needs, assembled once after
/// configuration load: site metadata, the content root, the base prefix,
/// both navigation trees, and the theme settings passed through unchanged
/// in shape.
///
/// A plan is immutable; there is no rebuild or mutation phase after
/// assembly.
#[derive(Debug, Clone)]
pub struct SitePlan {
    pub title: String,
    pub description: String,
    pub language: String,

    /// Normalized deployment prefix in `/prefix/` form.
    pub base: String,

    /// Absolute content root.
    pub src: PathBuf,

    /// Validated top navigation (flat).
    pub nav: NavTree,

    /// Validated sidebar tree.
    pub sidebar: NavTree,

    // Opaque theme settings, not interpreted here
    pub search: SearchConfig,
    pub logo: Option<LogoConfig>,
    pub footer: FooterConfig,
    pub last_updated: LastUpdatedConfig,
    pub social: Vec<SocialLink>,
}

impl SitePlan {
    /// Assemble a plan from a loaded configuration.
    ///
    /// Re-runs tree construction, so a plan can only exist for well-formed
    /// navigation. Duplicate links do not block assembly; they stay
    /// observable through [`SitePlan::duplicate_links`].
    pub fn assemble(config: &SiteConfig) -> Result<Self, NavError> {
        Ok(Self {
            title: config.site.info.title.clone(),
            description: config.site.info.description.clone(),
            language: config.site.info.language.clone(),
            base: config.site.base_prefix(),
            src: config.site.src.clone(),
            nav: config.theme.nav_tree()?,
            sidebar: config.theme.sidebar_tree()?,
            search: config.theme.search.clone(),
            logo: config.theme.logo.clone(),
            footer: config.theme.footer.clone(),
            last_updated: config.theme.last_updated.clone(),
            social: config.theme.social.clone(),
        })
    }

    /// Duplicate-route warnings across both trees, in tree order.
    pub fn duplicate_links(&self) -> Vec<NavError> {
        let mut warnings = Vec::new();
        for tree in [&self.nav, &self.sidebar] {
            if let Err(duplicates) = tree.validate_unique_links() {
                warnings.extend(duplicates);
            }
        }
        warnings
    }
}
