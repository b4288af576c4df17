//! Navigation error types and node positions.

use std::fmt;
use thiserror::Error;

// ============================================================================
// NodePosition
// ============================================================================

/// Position of an entry inside a navigation tree, for diagnostics.
///
/// Rendered the way the entry is addressed in `waypost.toml`, e.g.
/// `theme.sidebar[0].items[2]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePosition {
    section: &'static str,
    indices: Vec<usize>,
}

impl NodePosition {
    /// Root position of a tree section (no index yet).
    pub fn new(section: &'static str) -> Self {
        Self {
            section,
            indices: Vec::new(),
        }
    }

    /// Position of the `index`-th child under this one.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.indices.len() + 1);
        indices.extend_from_slice(&self.indices);
        indices.push(index);
        Self {
            section: self.section,
            indices,
        }
    }

    /// Config section this position belongs to.
    pub fn section(&self) -> &'static str {
        self.section
    }
}

impl fmt::Display for NodePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.section)?;
        for (depth, index) in self.indices.iter().enumerate() {
            if depth == 0 {
                write!(f, "[{index}]")?;
            } else {
                write!(f, ".items[{index}]")?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// errors
// ============================================================================

/// Why a navigation entry failed shape validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedKind {
    #[error("missing `text` label")]
    MissingText,

    #[error("entry has neither `link` nor `items`")]
    NoLinkOrItems,

    #[error("`items` is present but empty")]
    EmptyItems,

    #[error("`link` is empty")]
    EmptyLink,

    #[error("link `{link}` is {found}, expected a route starting with `/`")]
    InvalidLink { link: String, found: &'static str },

    #[error("nested group exceeds the depth limit of {limit}")]
    TooDeep { limit: usize },
}

impl MalformedKind {
    /// Fix hint shown alongside the diagnostic.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::MissingText => "add a `text` label to the entry",
            Self::NoLinkOrItems => "give the entry a `link`, child `items`, or remove it",
            Self::EmptyItems => "add at least one child entry or remove `items`",
            Self::EmptyLink | Self::InvalidLink { .. } => {
                "use a site-root route like \"/guide/intro\""
            }
            Self::TooDeep { .. } => "top navigation is flat, move nested groups to the sidebar",
        }
    }
}

/// Navigation validation errors.
///
/// `MalformedNavigation` is fatal to the build; `DuplicateLink` is a
/// warning-level guardrail, since the external router's tie-break between
/// two pages with the same route is unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("malformed navigation entry at `{at}`: {kind}")]
    MalformedNavigation { at: NodePosition, kind: MalformedKind },

    #[error("duplicate link `{link}`: `{second}` resolves to the same page as `{first}`")]
    DuplicateLink {
        link: String,
        first: NodePosition,
        second: NodePosition,
    },
}
