//! `[[theme.social]]` configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::LinkKind;
use serde::{Deserialize, Serialize};

/// One social icon link: an icon name and an external profile URL.
///
/// Social links live outside the navigation tree model; they are the one
/// place external URLs belong.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Icon name known to the engine's theme (e.g. "github", "x").
    pub icon: String,

    /// External profile URL.
    pub link: String,
}

impl SocialLink {
    /// Validate one entry; `index` identifies it in diagnostics.
    pub fn validate(&self, field: FieldPath, index: usize, diag: &mut ConfigDiagnostics) {
        if self.icon.trim().is_empty() {
            diag.error_with_hint(
                field,
                format!("social[{index}]: missing `icon`"),
                "name an icon the theme knows, e.g. \"github\"",
            );
        }

        match LinkKind::parse(&self.link) {
            LinkKind::External(_) => {}
            kind => diag.error_with_hint(
                field,
                format!("social[{index}]: `{}` is {}", self.link, kind.describe()),
                "use a full URL like \"https://github.com/you\"",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> FieldPath {
        FieldPath::new("theme.social")
    }

    #[test]
    fn test_external_link_accepted() {
        let link = SocialLink {
            icon: "github".into(),
            link: "https://github.com/hali945/blog/tree/master".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        link.validate(field(), 0, &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_site_root_link_rejected() {
        let link = SocialLink {
            icon: "github".into(),
            link: "/about".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        link.validate(field(), 0, &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_missing_icon_rejected() {
        let link = SocialLink {
            icon: "".into(),
            link: "https://example.com".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        link.validate(field(), 2, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("social[2]"));
    }
}
