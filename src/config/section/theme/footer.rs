//! `[theme.footer]` configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

/// Footer lines rendered at the bottom of every page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.footer")]
pub struct FooterConfig {
    /// Message line (e.g. license notice).
    pub message: String,

    /// Copyright line.
    pub copyright: String,
}

impl FooterConfig {
    /// True when the footer has nothing to render.
    pub fn is_empty(&self) -> bool {
        self.message.is_empty() && self.copyright.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_from_toml() {
        let footer: FooterConfig = toml::from_str(
            r#"
            message = "Released under the MIT License."
            copyright = "Copyright © 2025-present Hali"
            "#,
        )
        .unwrap();
        assert!(!footer.is_empty());
        assert!(footer.copyright.contains("2025"));
    }

    #[test]
    fn test_footer_defaults_empty() {
        assert!(FooterConfig::default().is_empty());
    }
}
