//! Site configuration management for `waypost.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site] and [site.info]
//! │   └── theme      # [theme] nav/sidebar/search/logo/footer/social
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section               | Purpose                                    |
//! |-----------------------|--------------------------------------------|
//! | `[site]`              | Content root, deployment base prefix       |
//! | `[site.info]`         | Site metadata (title, author, url, extra)  |
//! | `[theme]`             | Top nav and sidebar trees                  |
//! | `[theme.search]`      | Search backend selector                    |
//! | `[theme.logo]`        | Nav bar logo                               |
//! | `[theme.footer]`      | Footer lines                               |
//! | `[theme.last_updated]`| Last-updated timestamp display             |
//! | `[[theme.social]]`    | Social icon links                          |

pub mod section;
pub mod types;
mod util;

use util::{extract_url_path, find_config_file};

// Re-export from section/
pub use section::{SiteSectionConfig, ThemeSectionConfig};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    debug, log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing waypost.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site settings (content root, base prefix, metadata)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Theme settings (navigation, search, footer, social)
    #[serde(default)]
    pub theme: ThemeSectionConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSectionConfig::default(),
            theme: ThemeSectionConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The project root is determined by the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'waypost init' to create a new site.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        // Load or create default config
        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        // Validate raw paths before normalization
        if !cli.is_init() {
            config.validate_paths()?;
        }

        // Set paths and derive the rest
        config.config_path = config_path;
        config.finalize(cli);
        debug!("config"; "loaded {}", config.config_path.display());

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        // Resolve root path
        let root = match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                std::env::current_dir().unwrap_or_default().join(name)
            }
            Commands::Init { name: None, .. } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        self.set_root(&root);
        self.normalize_paths(&root);

        // Derive base prefix from site.info.url
        // This ensures subdirectory deployments work for both:
        // - Config: [site]     base = "/blog/"
        // - Config: [site.info] url = "https://example.github.io/blog"
        self.sync_base_from_url();
    }

    /// Derive `site.base` from the path component of `site.info.url`.
    ///
    /// Enables proper link prefixing for subdirectory deployments
    /// (e.g., GitHub Pages project sites) without repeating the prefix.
    fn sync_base_from_url(&mut self) {
        if self.site.base.is_none()
            && let Some(ref url) = self.site.info.url
            && let Some(path) = extract_url_path(url)
            && !path.is_empty()
        {
            self.site.base = Some(format!("/{path}/"));
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (waypost.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    ///
    /// Shorthand for `config.get_root().join(path)`.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        // Normalize root to absolute path
        let root = crate::utils::path::normalize_path(root);
        self.set_root(&root);

        // Normalize config path (already set in load(), just canonicalize)
        self.config_path = crate::utils::path::normalize_path(&self.config_path);

        // Normalize the content root
        self.site.normalize(&root);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Pre-validate paths before normalization.
    ///
    /// This must be called before `finalize()` because path normalization
    /// converts relative paths to absolute paths, making it impossible to
    /// detect if the user specified an absolute path in the config.
    fn validate_paths(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate_paths(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once. Non-fatal
    /// findings (duplicate navigation links) are printed as warnings.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if !self.config_path.exists() {
            bail!(ConfigError::Validation("config file not found".into()));
        }

        // Validate each section
        self.site.validate(&mut diag);
        self.theme.validate(&mut diag);

        // Print collected warnings (grouped display)
        diag.print_warnings();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site.info]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site.info]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::SearchProvider;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[site\ntitle = \"My Blog\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        // Default root is empty PathBuf, set during config loading
        assert_eq!(config.get_root(), Path::new(""));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.info.title, "");
        assert_eq!(config.site.src, PathBuf::from("src"));
        assert!(config.site.base.is_none());
        assert!(config.theme.sidebar.is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site.info]\ntitle = \"Test\"\ndescription = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.info.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site.info]\ntitle = \"Test\"\ndescription = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_base_derived_from_url() {
        let mut config = test_parse_config("url = \"https://hali945.github.io/blog\"");
        config.sync_base_from_url();
        assert_eq!(config.site.base.as_deref(), Some("/blog/"));
        assert_eq!(config.site.base_prefix(), "/blog/");
    }

    #[test]
    fn test_explicit_base_wins_over_url() {
        let mut config = test_parse_config(
            "url = \"https://hali945.github.io/blog\"\n[site]\nbase = \"/docs/\"",
        );
        config.sync_base_from_url();
        assert_eq!(config.site.base.as_deref(), Some("/docs/"));
    }

    #[test]
    fn test_full_blog_config_parses() {
        let config = test_parse_config(
            r#"
            [theme]
            nav = [{ text = "Home", link = "/" }]

            [[theme.sidebar]]
            text = "NODE"
            collapsed = true

            [[theme.sidebar.items]]
            text = "http"

            [[theme.sidebar.items.items]]
            text = "GET"
            link = "/node/http/get"

            [theme.search]
            provider = "local"

            [theme.logo]
            src = "assets/logo-mini.svg"
            width = 24
            height = 24

            [theme.footer]
            message = "Released under the MIT License."
            copyright = "Copyright © 2025-present Hali"

            [theme.last_updated]
            enable = true
            date_style = "full"

            [[theme.social]]
            icon = "github"
            link = "https://github.com/hali945/blog"
            "#,
        );

        assert_eq!(config.theme.nav.len(), 1);
        assert_eq!(config.theme.search.provider, SearchProvider::Local);
        assert_eq!(config.theme.social.len(), 1);

        let sidebar = config.theme.sidebar_tree().unwrap();
        assert_eq!(sidebar.flatten()[0].route, "/node/http/get");

        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
