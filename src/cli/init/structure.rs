//! Site directory structure and starter pages.
//!
//! Creates the standard waypost site layout: a content root with a guide
//! section matching the template navigation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Standard site directory structure.
const SITE_DIRS: &[&str] = &["src", "src/guide", "src/assets"];

/// Starter pages matching the template sidebar.
const STARTER_PAGES: &[(&str, &str)] = &[
    (
        "src/index.md",
        "# Home\n\nWelcome to your new site. Edit `waypost.toml` to shape the\nnavigation, then point your rendering engine at `src/`.\n",
    ),
    (
        "src/guide/getting-started.md",
        "# Getting Started\n\nEvery sidebar entry in `waypost.toml` links to a page under `src/`.\nRun `waypost check` after editing the navigation.\n",
    ),
    (
        "src/guide/configuration.md",
        "# Configuration\n\nSee the comments in `waypost.toml` for the available options.\n",
    ),
];

/// Create site directory structure at the given root.
///
/// Creates all standard directories. The root directory
/// is created if it doesn't exist.
pub fn create_structure(root: &Path) -> Result<()> {
    // Ensure root exists
    if !root.exists() {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create root directory '{}'", root.display()))?;
    }

    // Create all subdirectories
    for dir in SITE_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }

    Ok(())
}

/// Write starter pages for every route the template sidebar links to.
pub fn write_starter_pages(root: &Path) -> Result<()> {
    for (rel_path, content) in STARTER_PAGES {
        let path = root.join(rel_path);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write starter page '{}'", path.display()))?;
    }
    Ok(())
}
