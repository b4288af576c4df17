//! Pre-initialization validation.
//!
//! Validates target directory state before site creation.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `waypost init` - initialize in current directory (must be empty)
    CurrentDir,
    /// `waypost init <name>` - create new subdirectory (must not exist)
    NewDir,
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: directory must be empty (or not exist)
/// - `NewDir`: directory must not exist
pub fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            if !is_empty(root)? {
                bail!(
                    "Current directory is not empty.\n\
                     Use `waypost init <name>` to create in a new subdirectory."
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

/// Check if directory is empty or doesn't exist.
fn is_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let is_empty = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory '{}'", path.display()))?
        .next()
        .is_none();
    Ok(is_empty)
}
