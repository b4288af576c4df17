//! Configuration section definitions.
//!
//! Each module corresponds to a section in `waypost.toml`:
//!
//! | Module  | TOML Section | Purpose                                     |
//! |---------|--------------|---------------------------------------------|
//! | `site`  | `[site]`     | Site metadata, content root, base prefix    |
//! | `theme` | `[theme]`    | Navigation, sidebar, search, footer, social |

pub mod site;
pub mod theme;

// Re-export section configs
pub use site::{SiteInfoConfig, SiteSectionConfig};
pub use theme::{
    DetailStyle, FooterConfig, LastUpdatedConfig, LogoConfig, SearchConfig, SearchProvider,
    SocialLink, ThemeSectionConfig,
};
