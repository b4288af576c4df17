//! `[theme]` section configuration.
//!
//! Navigation structure and theme-level options passed to the rendering
//! engine: top nav, sidebar, search provider, logo, footer, social links.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! nav = [{ text = "Home", link = "/" }]
//!
//! [[theme.sidebar]]
//! text = "Guide"
//! collapsed = false
//!
//! [[theme.sidebar.items]]
//! text = "Getting Started"
//! link = "/guide/getting-started"
//!
//! [theme.search]
//! provider = "local"
//!
//! [[theme.social]]
//! icon = "github"
//! link = "https://github.com/you"
//! ```

mod footer;
mod last_updated;
mod logo;
mod search;
mod social;

pub use footer::FooterConfig;
pub use last_updated::{DetailStyle, LastUpdatedConfig};
pub use logo::LogoConfig;
pub use search::{SearchConfig, SearchProvider};
pub use social::SocialLink;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::nav::{NAV_DEPTH_LIMIT, NavError, NavTree, RawNavNode};
use macros::Config;
use serde::{Deserialize, Serialize};

/// Theme section configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeSectionConfig {
    /// Top navigation entries (flat; groups are sidebar-only).
    #[config(hidden)]
    pub nav: Vec<RawNavNode>,

    /// Sidebar tree (nested groups, collapse state, leaf links).
    #[config(hidden)]
    pub sidebar: Vec<RawNavNode>,

    /// Site logo shown in the nav bar.
    #[config(hidden)]
    pub logo: Option<LogoConfig>,

    /// Social icon links (external URLs), rendered at the nav bar edge.
    #[config(hidden)]
    pub social: Vec<SocialLink>,

    /// Search backend selector.
    #[config(sub)]
    pub search: SearchConfig,

    /// Footer lines.
    #[config(sub)]
    pub footer: FooterConfig,

    /// "Last updated" timestamp display.
    #[config(sub)]
    pub last_updated: LastUpdatedConfig,
}

impl ThemeSectionConfig {
    /// Construct the validated top navigation tree.
    pub fn nav_tree(&self) -> Result<NavTree, NavError> {
        NavTree::from_raw_with_depth("theme.nav", &self.nav, NAV_DEPTH_LIMIT)
    }

    /// Construct the validated sidebar tree.
    pub fn sidebar_tree(&self) -> Result<NavTree, NavError> {
        NavTree::from_raw("theme.sidebar", &self.sidebar)
    }

    /// Validate the `[theme]` section.
    ///
    /// Malformed navigation entries are errors; duplicate links are
    /// warnings (the external router's tie-break is unspecified, so they
    /// are flagged for operator correction instead of guessed at).
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match self.nav_tree() {
            Ok(tree) => warn_duplicates(&tree, Self::FIELDS.nav, diag),
            Err(err) => report_nav_error(&err, Self::FIELDS.nav, diag),
        }

        match self.sidebar_tree() {
            Ok(tree) => warn_duplicates(&tree, Self::FIELDS.sidebar, diag),
            Err(err) => report_nav_error(&err, Self::FIELDS.sidebar, diag),
        }

        if let Some(logo) = &self.logo {
            logo.validate(Self::FIELDS.logo, diag);
        }

        for (index, link) in self.social.iter().enumerate() {
            link.validate(Self::FIELDS.social, index, diag);
        }
    }
}

fn report_nav_error(err: &NavError, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match err {
        NavError::MalformedNavigation { kind, .. } => {
            diag.error_with_hint(field, err.to_string(), kind.hint());
        }
        // Construction never yields duplicates, but keep the mapping total
        NavError::DuplicateLink { .. } => diag.warn(field, err.to_string()),
    }
}

fn warn_duplicates(tree: &NavTree, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if let Err(duplicates) = tree.validate_unique_links() {
        for duplicate in duplicates {
            diag.warn(field, duplicate.to_string());
        }
    }
}
