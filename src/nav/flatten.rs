//! Depth-first flattening of a navigation tree.

use serde::Serialize;

use super::{NavNode, NavTree};

/// One flattened navigation entry: a leaf route paired with its breadcrumb
/// trail of labels (ancestors first, own label last).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub route: String,
    pub trail: Vec<String>,
}

impl NavTree {
    /// Walk the tree depth-first, left-to-right, yielding one entry per
    /// route in document order.
    ///
    /// A group with an index link yields its own entry before its children.
    /// Pure and restartable: the tree is already resident, so this simply
    /// produces a fresh `Vec` on every call.
    pub fn flatten(&self) -> Vec<NavEntry> {
        let mut out = Vec::new();
        let mut trail = Vec::new();
        flatten_into(self.roots(), &mut trail, &mut out);
        out
    }
}

fn flatten_into(nodes: &[NavNode], trail: &mut Vec<String>, out: &mut Vec<NavEntry>) {
    for node in nodes {
        trail.push(node.text().to_string());

        if let Some(link) = node.link() {
            out.push(NavEntry {
                route: link.to_string(),
                trail: trail.clone(),
            });
        }
        if let Some(items) = node.items() {
            flatten_into(items, trail, out);
        }

        trail.pop();
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::RawNavNode;

    fn leaf(text: &str, link: &str) -> RawNavNode {
        RawNavNode {
            text: Some(text.into()),
            link: Some(link.into()),
            ..RawNavNode::default()
        }
    }

    fn group(text: &str, items: Vec<RawNavNode>) -> RawNavNode {
        RawNavNode {
            text: Some(text.into()),
            items: Some(items),
            ..RawNavNode::default()
        }
    }

    fn trail(labels: &[&str]) -> Vec<String> {
        labels.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_flatten_single_nested_leaf() {
        let raw = vec![group("A", vec![leaf("B", "/b")])];
        let tree = NavTree::from_raw("sidebar", &raw).unwrap();

        assert_eq!(
            tree.flatten(),
            vec![NavEntry {
                route: "/b".into(),
                trail: trail(&["A", "B"]),
            }]
        );
    }

    #[test]
    fn test_flatten_is_document_order() {
        let raw = vec![
            leaf("Home", "/"),
            group(
                "NODE",
                vec![
                    group("http", vec![leaf("GET", "/node/http/get"), leaf("POST", "/node/http/post")]),
                    leaf("ip", "/node/ip"),
                ],
            ),
        ];
        let tree = NavTree::from_raw("sidebar", &raw).unwrap();

        let routes: Vec<_> = tree.flatten().into_iter().map(|e| e.route).collect();
        assert_eq!(routes, ["/", "/node/http/get", "/node/http/post", "/node/ip"]);
    }

    #[test]
    fn test_flatten_yields_one_entry_per_leaf() {
        let raw = vec![
            leaf("A", "/a"),
            group("G", vec![leaf("B", "/b"), group("H", vec![leaf("C", "/c")])]),
        ];
        let tree = NavTree::from_raw("sidebar", &raw).unwrap();

        fn count_leaves(nodes: &[NavNode]) -> usize {
            nodes
                .iter()
                .map(|n| match n.items() {
                    None => 1,
                    Some(items) => count_leaves(items),
                })
                .sum()
        }

        assert_eq!(tree.flatten().len(), count_leaves(tree.roots()));
    }

    #[test]
    fn test_flatten_group_with_index_yields_both() {
        let mut raw_group = group("Guide", vec![leaf("Intro", "/guide/intro")]);
        raw_group.link = Some("/guide/index".into());

        let tree = NavTree::from_raw("sidebar", &[raw_group]).unwrap();
        assert_eq!(
            tree.flatten(),
            vec![
                NavEntry {
                    route: "/guide/index".into(),
                    trail: trail(&["Guide"]),
                },
                NavEntry {
                    route: "/guide/intro".into(),
                    trail: trail(&["Guide", "Intro"]),
                },
            ]
        );
    }

    #[test]
    fn test_flatten_is_restartable() {
        let raw = vec![group("A", vec![leaf("B", "/b")])];
        let tree = NavTree::from_raw("sidebar", &raw).unwrap();
        assert_eq!(tree.flatten(), tree.flatten());
    }

    #[test]
    fn test_flatten_roundtrip_preserves_link_set() {
        let raw = vec![
            leaf("Home", "/"),
            group(
                "NODE",
                vec![group("http", vec![leaf("GET", "/node/http/get")]), leaf("ip", "/node/ip")],
            ),
        ];
        let tree = NavTree::from_raw("sidebar", &raw).unwrap();
        let entries = tree.flatten();

        // Rebuild a raw tree from the breadcrumb trails alone
        let mut rebuilt: Vec<RawNavNode> = Vec::new();
        for entry in &entries {
            let mut level = &mut rebuilt;
            let (last, groups) = entry.trail.split_last().unwrap();
            for label in groups {
                let index = match level
                    .iter()
                    .position(|n| n.text.as_deref() == Some(label.as_str()))
                {
                    Some(index) => index,
                    None => {
                        level.push(group(label, vec![]));
                        level.len() - 1
                    }
                };
                level = level[index].items.as_mut().unwrap();
            }
            level.push(leaf(last, &entry.route));
        }

        let reconstructed = NavTree::from_raw("sidebar", &rebuilt).unwrap();
        let mut original_links: Vec<_> = entries.into_iter().map(|e| e.route).collect();
        let mut rebuilt_links: Vec<_> = reconstructed
            .flatten()
            .into_iter()
            .map(|e| e.route)
            .collect();
        original_links.sort();
        rebuilt_links.sort();
        assert_eq!(original_links, rebuilt_links);
    }

    #[test]
    fn test_serialized_entry_shape() {
        let entry = NavEntry {
            route: "/b".into(),
            trail: trail(&["A", "B"]),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"route":"/b","trail":["A","B"]}"#);
    }
}
