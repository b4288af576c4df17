//! Configuration file generation.
//!
//! Creates waypost.toml for new sites from the section templates.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::section::{
    FooterConfig, LastUpdatedConfig, SearchConfig, SiteSectionConfig,
};

/// Default config filename
const CONFIG_FILE: &str = "waypost.toml";

/// Starter navigation block. The nav and sidebar are literal trees, so
/// they are written out by hand instead of generated from defaults; the
/// routes match the starter pages created by `structure`.
const STARTER_NAV: &str = r#"# Top navigation (flat entries; groups are sidebar-only)
[theme]
nav = [
    { text = "Home", link = "/" },
    { text = "Guide", link = "/guide/getting-started" },
]

# Sidebar tree: nested groups, collapse state, leaf links.
# Every `link` is a site-root route resolved by the rendering engine.
[[theme.sidebar]]
text = "Guide"
collapsed = false

[[theme.sidebar.items]]
text = "Getting Started"
link = "/guide/getting-started"

[[theme.sidebar.items]]
text = "Configuration"
link = "/guide/configuration"
"#;

/// Generate waypost.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Waypost configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# https://github.com/waypost-rs/waypost\n\n");

    // [site] section (includes [site.info])
    out.push_str(&SiteSectionConfig::template_with_header());
    out.push('\n');

    // [theme] navigation starter
    out.push_str(STARTER_NAV);
    out.push('\n');

    // [theme.search] section
    out.push_str(&SearchConfig::template_with_header());
    out.push('\n');

    // [theme.footer] section
    out.push_str(&FooterConfig::template_with_header());
    out.push('\n');

    // [theme.last_updated] section
    out.push_str(&LastUpdatedConfig::template_with_header());

    out
}

/// Write default waypost.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_template_contains_all_sections() {
        let template = generate_config_template();
        for section in [
            "[site]",
            "[site.info]",
            "[theme]",
            "[[theme.sidebar]]",
            "[theme.search]",
            "[theme.footer]",
            "[theme.last_updated]",
        ] {
            assert!(template.contains(section), "missing {section}");
        }
    }

    #[test]
    fn test_template_round_trips_through_parser() {
        // The generated template must parse back without unknown fields
        let template = generate_config_template();
        let config = SiteConfig::from_str(&template).unwrap();

        assert_eq!(config.site.src, std::path::PathBuf::from("src"));
        assert_eq!(config.theme.nav.len(), 2);

        // And its navigation must be well-formed
        let sidebar = config.theme.sidebar_tree().unwrap();
        assert_eq!(sidebar.flatten().len(), 2);
        assert!(sidebar.validate_unique_links().is_ok());
    }

    #[test]
    fn test_write_config_creates_file() {
        let temp = tempfile::TempDir::new().unwrap();
        write_config(temp.path()).unwrap();
        assert!(temp.path().join(CONFIG_FILE).is_file());
    }
}
