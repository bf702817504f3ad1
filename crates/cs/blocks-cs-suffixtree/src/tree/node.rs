use std::collections::HashMap;

use super::SENTINEL;

/// Index of a node inside [`super::SuffixTree`]'s node arena.
///
/// Nodes reference each other (children, suffix links) by index rather than
/// by pointer, which keeps [`Node`] small and sidesteps the
/// parent/child/suffix-link ownership cycle an arena-free representation
/// would otherwise run into.
pub(crate) type NodeId = usize;

/// The root is always the first node allocated.
pub(crate) const ROOT: NodeId = 0;

/// The end of an edge label.
///
/// Leaves grow automatically as characters are appended during
/// construction: their `end` stays [`EdgeEnd::Open`] and resolves against
/// the builder's current frontier. [`SuffixTree::build`](super::SuffixTree::build)
/// freezes every open end to [`EdgeEnd::Bounded`] once construction
/// finishes, after which the tree never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeEnd {
    /// Fixed end index into the text buffer (exclusive).
    Bounded(usize),
    /// Grows with the construction frontier; only valid on a leaf while building.
    Open,
}

/// A node in the suffix tree.
///
/// Every non-root node owns exactly one incoming edge, labeled by the
/// half-open range `text[start..end)`. A node is a leaf iff it has no
/// children: leaves are created once and never gain children afterward.
#[derive(Debug)]
pub(crate) struct Node {
    pub start: usize,
    pub end: EdgeEnd,
    pub children: HashMap<char, NodeId>,
    /// Suffix link target. Defaults to [`ROOT`], which is also what root's
    /// own link points to, so "no link set yet" and "linked to root" share
    /// a representation (exactly the fallback the builder wants when
    /// following a suffix link from a node that never got one explicitly).
    pub suffix_link: NodeId,
}

impl Node {
    pub fn new(start: usize, end: EdgeEnd) -> Self {
        Self {
            start,
            end,
            children: HashMap::new(),
            suffix_link: ROOT,
        }
    }

    pub fn root() -> Self {
        Self::new(0, EdgeEnd::Bounded(0))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Length of this node's incoming edge, resolving an open end against
    /// `frontier` (the current construction position; ignored once the end
    /// is bounded).
    pub fn edge_length(&self, frontier: usize) -> usize {
        let end = match self.end {
            EdgeEnd::Bounded(e) => e,
            EdgeEnd::Open => frontier + 1,
        };
        end - self.start
    }

    /// Children sorted by first edge character, for the enumeration
    /// boundary in §4.1/§4.7 of the design (printing, suffix enumeration):
    /// collect and sort here rather than paying for an ordered map on every
    /// insertion.
    ///
    /// The sentinel ranks below every real character rather than at its raw
    /// codepoint, so a suffix that is a strict prefix of a longer sibling
    /// suffix (whose edge continues past where the shorter one stops at
    /// `$`) is still visited first, keeping the traversal lexicographic.
    pub fn sorted_children(&self) -> Vec<(char, NodeId)> {
        let mut entries: Vec<(char, NodeId)> =
            self.children.iter().map(|(&c, &id)| (c, id)).collect();
        entries.sort_unstable_by_key(|&(c, _)| child_rank(c));
        entries
    }
}

/// Orders the sentinel before every real character, and real characters
/// among themselves by codepoint.
fn child_rank(c: char) -> (u8, char) {
    if c == SENTINEL {
        (0, c)
    } else {
        (1, c)
    }
}
