//! An opaque, iterative debug rendering of the tree. Not part of the
//! semantic contract: tests may check it doesn't panic and is non-empty,
//! but should never assert on its exact text.

use super::node::NodeId;
use super::{SuffixTree, ROOT, SENTINEL};

fn edge_label(tree: &SuffixTree, node: NodeId) -> String {
    let start = tree.nodes[node].start;
    let len = tree.edge_length(node);
    (0..len)
        .map(|i| {
            let c = tree.char_at(start + i);
            if c == SENTINEL {
                '$'
            } else {
                c
            }
        })
        .collect()
}

fn suffix_link_repr(tree: &SuffixTree, node: NodeId) -> String {
    let target = tree.nodes[node].suffix_link;
    if target == ROOT {
        "root".to_string()
    } else {
        let c = tree.char_at(tree.nodes[target].start);
        if c == SENTINEL {
            "$".to_string()
        } else {
            c.to_string()
        }
    }
}

/// Renders one line per node, indented by tree depth, in ascending
/// first-character order at every level.
pub(crate) fn render(tree: &SuffixTree) -> String {
    let mut out = String::new();
    let mut stack = vec![(ROOT, 0usize)];

    while let Some((node, indent)) = stack.pop() {
        if node == ROOT {
            out.push_str("root\n");
        } else {
            out.push_str(&"  ".repeat(indent));
            out.push_str(&edge_label(tree, node));
            if tree.nodes[node].is_leaf() {
                out.push_str(" [leaf]");
            } else {
                out.push_str(&format!(" [link -> {}]", suffix_link_repr(tree, node)));
            }
            out.push('\n');
        }

        let mut children = tree.nodes[node].sorted_children();
        children.reverse();
        for (_, child) in children {
            stack.push((child, indent + 1));
        }
    }

    out
}
