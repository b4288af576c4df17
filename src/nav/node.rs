//! Navigation node shapes.

use serde::{Deserialize, Serialize};

/// A navigation entry exactly as written in `waypost.toml`.
///
/// All fields are optional at this stage; the leaf/group shape invariant is
/// checked when the raw entries are turned into a [`NavTree`](super::NavTree).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNavNode {
    /// Display label.
    pub text: Option<String>,

    /// Route path (site-root, starting with `/`).
    pub link: Option<String>,

    /// Default collapse state for groups. Groups start expanded.
    pub collapsed: Option<bool>,

    /// Ordered child entries. Order is on-page display order.
    pub items: Option<Vec<RawNavNode>>,
}

/// A validated navigation entry.
///
/// The three cases make the shape invariant structural: a node is a leaf, a
/// group, or a group that also carries an index-page link. "Neither link nor
/// items" cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum NavNode {
    /// Direct route link, no children.
    Leaf { text: String, link: String },

    /// Pure group header with ordered, non-empty children.
    Group {
        text: String,
        collapsed: bool,
        items: Vec<NavNode>,
    },

    /// Group whose header itself links to an index page.
    GroupWithIndex {
        text: String,
        link: String,
        collapsed: bool,
        items: Vec<NavNode>,
    },
}

impl NavNode {
    /// Display label of this entry.
    pub fn text(&self) -> &str {
        match self {
            Self::Leaf { text, .. } | Self::Group { text, .. } | Self::GroupWithIndex { text, .. } => {
                text
            }
        }
    }

    /// Route link, if this entry resolves to a page directly.
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Leaf { link, .. } | Self::GroupWithIndex { link, .. } => Some(link),
            Self::Group { .. } => None,
        }
    }

    /// Child entries, if this is a group.
    pub fn items(&self) -> Option<&[NavNode]> {
        match self {
            Self::Leaf { .. } => None,
            Self::Group { items, .. } | Self::GroupWithIndex { items, .. } => Some(items),
        }
    }

    /// True for entries without children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}
