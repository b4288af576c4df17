//! Navigation tree model.
//!
//! The sidebar and top navigation are declared in `waypost.toml` as nested
//! literal entries. This module turns those literals into a validated tree
//! and exposes the operations the rest of the crate (and the external
//! rendering engine) consume:
//!
//! - [`RawNavNode`]: the literal shape as written in the config file
//! - [`NavNode`]: the validated shape, tagged by kind (leaf / group /
//!   group-with-index-page) so the shape invariant is enforced by
//!   construction
//! - [`NavTree::from_raw`]: construction + validation with per-node
//!   position diagnostics
//! - [`NavTree::flatten`]: depth-first walk yielding `(route, trail)`
//!   entries, one per leaf
//! - [`NavTree::validate_unique_links`]: duplicate-route guardrail
//!
//! The tree is built once at configuration-load time and never mutated.

mod error;
mod flatten;
mod node;
mod tree;

pub use error::{MalformedKind, NavError, NodePosition};
pub use flatten::NavEntry;
pub use node::{NavNode, RawNavNode};
pub use tree::NavTree;

/// Depth limit for the top navigation bar (flat entries, no dropdown groups).
pub const NAV_DEPTH_LIMIT: usize = 1;
