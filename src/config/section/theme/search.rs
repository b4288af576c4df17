//! `[theme.search]` configuration.
//!
//! Selects the search backend. The backend itself lives in the rendering
//! engine; waypost only carries the selector through.

use macros::Config;
use serde::{Deserialize, Serialize};

/// Search backend selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.search")]
pub struct SearchConfig {
    /// Search backend: "none", "local" (index built by the engine), or
    /// "external" (service configured at deployment).
    #[config(default = "none")]
    pub provider: SearchProvider,
}

/// Available search backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Search disabled.
    #[default]
    None,

    /// Index built and served by the rendering engine.
    Local,

    /// External search service.
    External,
}

impl SearchProvider {
    /// Returns true if a search backend is selected.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }
}
