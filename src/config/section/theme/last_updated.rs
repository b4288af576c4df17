//! `[theme.last_updated]` configuration.
//!
//! Controls the "last updated" timestamp the engine renders under each
//! page. Styles follow the engine's date formatter verbosity levels.

use macros::Config;
use serde::{Deserialize, Serialize};

/// "Last updated" timestamp display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.last_updated")]
pub struct LastUpdatedConfig {
    /// Show last-updated timestamps.
    pub enable: bool,

    /// Label shown before the timestamp.
    #[config(default = "Updated at")]
    pub text: String,

    /// Date verbosity.
    #[config(default = "medium")]
    pub date_style: DetailStyle,

    /// Time verbosity.
    #[config(default = "medium")]
    pub time_style: DetailStyle,
}

impl Default for LastUpdatedConfig {
    fn default() -> Self {
        Self {
            enable: false,
            text: "Updated at".into(),
            date_style: DetailStyle::default(),
            time_style: DetailStyle::default(),
        }
    }
}

/// Formatter verbosity, from "Friday, April 25, 2025" down to "4/25/25".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailStyle {
    Full,
    Long,
    #[default]
    Medium,
    Short,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_updated_from_toml() {
        let config: LastUpdatedConfig = toml::from_str(
            r#"
            enable = true
            text = "Updated at"
            date_style = "full"
            time_style = "medium"
            "#,
        )
        .unwrap();
        assert!(config.enable);
        assert_eq!(config.date_style, DetailStyle::Full);
        assert_eq!(config.time_style, DetailStyle::Medium);
    }

    #[test]
    fn test_disabled_by_default() {
        let config = LastUpdatedConfig::default();
        assert!(!config.enable);
        assert_eq!(config.text, "Updated at");
    }
}
