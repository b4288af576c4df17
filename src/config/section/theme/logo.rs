//! `[theme.logo]` configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Site logo shown in the nav bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Path to the logo image, relative to the content root
    /// (e.g. "assets/logo.svg").
    pub src: PathBuf,

    /// Display width in pixels.
    pub width: Option<u32>,

    /// Display height in pixels.
    pub height: Option<u32>,
}

impl LogoConfig {
    /// Validate the logo entry.
    pub fn validate(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if self.src.as_os_str().is_empty() {
            diag.error_with_hint(
                field,
                "missing `src`",
                "point at an image under the content root, e.g. \"assets/logo.svg\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_from_toml() {
        let logo: LogoConfig = toml::from_str(
            r#"
            src = "assets/logo-mini.svg"
            width = 24
            height = 24
            "#,
        )
        .unwrap();
        assert_eq!(logo.width, Some(24));
        assert_eq!(logo.src, PathBuf::from("assets/logo-mini.svg"));
    }

    #[test]
    fn test_empty_src_rejected() {
        let mut diag = ConfigDiagnostics::new();
        LogoConfig::default().validate(FieldPath::new("theme.logo"), &mut diag);
        assert!(diag.has_errors());
    }
}
