//! Site initialization module.
//!
//! Creates new site structure with default configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Directory structure and starter pages
//! - [`config`]: Configuration file generation

mod config;
mod structure;
mod validate;

use crate::{config::SiteConfig, log};
use anyhow::Result;

pub use validate::InitMode;

/// Create a new site with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure
/// 3. Write waypost.toml
/// 4. Write starter pages matching the template navigation
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    if let Err(e) = validate::validate_target(root, mode) {
        log!("error"; "{}", e);
        std::process::exit(1);
    }

    structure::create_structure(root)?;
    config::write_config(root)?;
    structure::write_starter_pages(root)?;

    log!("init"; "Site initialized successfully");
    Ok(())
}
