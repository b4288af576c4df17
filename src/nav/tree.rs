//! Navigation tree construction and link validation.

use rustc_hash::FxHashMap;

use super::{MalformedKind, NavError, NavNode, NodePosition, RawNavNode};
use crate::core::LinkKind;

/// A validated navigation tree: the ordered root entries of a sidebar or
/// top navigation, plus the config section they were declared under.
///
/// Construction is the only way to obtain one, so every `NavTree` satisfies
/// the shape invariants: each entry is a leaf, a non-empty group, or a
/// non-empty group with an index link; all links are site-root routes.
#[derive(Debug, Clone, PartialEq)]
pub struct NavTree {
    section: &'static str,
    roots: Vec<NavNode>,
}

impl NavTree {
    /// Validate a literal entry sequence into a tree. Nesting is unbounded.
    pub fn from_raw(section: &'static str, raw: &[RawNavNode]) -> Result<Self, NavError> {
        Self::build(section, raw, None)
    }

    /// Validate with a nesting limit. `max_depth = 1` means flat entries
    /// only, as required for the top navigation bar.
    pub fn from_raw_with_depth(
        section: &'static str,
        raw: &[RawNavNode],
        max_depth: usize,
    ) -> Result<Self, NavError> {
        Self::build(section, raw, Some(max_depth))
    }

    fn build(
        section: &'static str,
        raw: &[RawNavNode],
        max_depth: Option<usize>,
    ) -> Result<Self, NavError> {
        let origin = NodePosition::new(section);
        let roots = raw
            .iter()
            .enumerate()
            .map(|(index, node)| build_node(node, origin.child(index), 1, max_depth))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { section, roots })
    }

    /// Config section this tree was declared under.
    pub fn section(&self) -> &'static str {
        self.section
    }

    /// Ordered root entries.
    pub fn roots(&self) -> &[NavNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Check that no two entries resolve to the same route.
    ///
    /// Group index links count as entries too. The first occurrence of a
    /// route is the reporting anchor; every later occurrence produces one
    /// [`NavError::DuplicateLink`].
    pub fn validate_unique_links(&self) -> Result<(), Vec<NavError>> {
        let mut seen: FxHashMap<&str, NodePosition> = FxHashMap::default();
        let mut duplicates = Vec::new();

        for (link, position) in self.links_with_positions() {
            if let Some(first) = seen.get(link) {
                duplicates.push(NavError::DuplicateLink {
                    link: link.to_string(),
                    first: first.clone(),
                    second: position,
                });
            } else {
                seen.insert(link, position);
            }
        }

        if duplicates.is_empty() {
            Ok(())
        } else {
            Err(duplicates)
        }
    }

    /// All `(link, position)` pairs in document order.
    fn links_with_positions(&self) -> Vec<(&str, NodePosition)> {
        let mut out = Vec::new();
        let origin = NodePosition::new(self.section);
        collect_links(&self.roots, &origin, &mut out);
        out
    }
}

fn collect_links<'a>(
    nodes: &'a [NavNode],
    parent: &NodePosition,
    out: &mut Vec<(&'a str, NodePosition)>,
) {
    for (index, node) in nodes.iter().enumerate() {
        let position = parent.child(index);
        if let Some(link) = node.link() {
            out.push((link, position.clone()));
        }
        if let Some(items) = node.items() {
            collect_links(items, &position, out);
        }
    }
}

/// Validate one raw entry (and its subtree) at `position`/`depth`.
fn build_node(
    raw: &RawNavNode,
    position: NodePosition,
    depth: usize,
    max_depth: Option<usize>,
) -> Result<NavNode, NavError> {
    let text = match raw.text.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => return Err(malformed(position, MalformedKind::MissingText)),
    };

    match (&raw.link, &raw.items) {
        (None, None) => Err(malformed(position, MalformedKind::NoLinkOrItems)),

        (_, Some(items)) if items.is_empty() => {
            Err(malformed(position, MalformedKind::EmptyItems))
        }

        (Some(link), None) => {
            let link = check_link(link, &position)?;
            Ok(NavNode::Leaf { text, link })
        }

        (None, Some(items)) => {
            let items = build_items(items, &position, depth, max_depth)?;
            Ok(NavNode::Group {
                text,
                collapsed: raw.collapsed.unwrap_or(false),
                items,
            })
        }

        (Some(link), Some(items)) => {
            let link = check_link(link, &position)?;
            let items = build_items(items, &position, depth, max_depth)?;
            Ok(NavNode::GroupWithIndex {
                text,
                link,
                collapsed: raw.collapsed.unwrap_or(false),
                items,
            })
        }
    }
}

/// Recurse into group children, enforcing the depth limit.
fn build_items(
    items: &[RawNavNode],
    position: &NodePosition,
    depth: usize,
    max_depth: Option<usize>,
) -> Result<Vec<NavNode>, NavError> {
    if let Some(limit) = max_depth
        && depth >= limit
    {
        return Err(malformed(position.clone(), MalformedKind::TooDeep { limit }));
    }

    items
        .iter()
        .enumerate()
        .map(|(index, node)| build_node(node, position.child(index), depth + 1, max_depth))
        .collect()
}

/// Tree links must be non-empty site-root routes. External URLs belong in
/// `[[theme.social]]`, not the tree.
fn check_link(link: &str, position: &NodePosition) -> Result<String, NavError> {
    if link.is_empty() {
        return Err(malformed(position.clone(), MalformedKind::EmptyLink));
    }

    match LinkKind::parse(link) {
        LinkKind::SiteRoot(link) => Ok(link.to_string()),
        kind => Err(malformed(
            position.clone(),
            MalformedKind::InvalidLink {
                link: link.to_string(),
                found: kind.describe(),
            },
        )),
    }
}

fn malformed(at: NodePosition, kind: MalformedKind) -> NavError {
    NavError::MalformedNavigation { at, kind }
}

// ============================================================================
// tests
// ============================================================================
