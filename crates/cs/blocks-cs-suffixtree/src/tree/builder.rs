//! Ukkonen's online construction algorithm.
//!
//! The active point and `remainder` only matter while a tree is being
//! built, so they live on a [`Builder`] that is created, run once, and
//! discarded (the finished [`super::SuffixTree`] never carries them). That
//! gives the "active-point registers... are cleared" lifecycle rule from
//! the design for free, rather than needing `Option` fields that get reset
//! by hand after construction.

use super::node::{EdgeEnd, Node, NodeId, ROOT};

pub(crate) struct Builder {
    text: Vec<char>,
    nodes: Vec<Node>,
    /// Index of the most recently appended character.
    position: usize,
    remainder: usize,
    active_node: NodeId,
    /// Index into `text` of the first character of the active edge.
    active_edge_pos: usize,
    active_length: usize,
    /// Internal node created earlier in the current phase still awaiting a suffix link.
    last_internal: Option<NodeId>,
}

impl Builder {
    pub fn new(text: Vec<char>) -> Self {
        Self {
            text,
            nodes: vec![Node::root()],
            position: 0,
            remainder: 0,
            active_node: ROOT,
            active_edge_pos: 0,
            active_length: 0,
            last_internal: None,
        }
    }

    /// Runs every phase of Ukkonen's algorithm and returns the finished
    /// node arena with all leaf ends frozen to `text.len()`.
    pub fn run(mut self) -> Vec<Node> {
        for position in 0..self.text.len() {
            self.position = position;
            self.extend_phase();
        }
        self.freeze_open_ends();
        self.nodes
    }

    fn edge_length(&self, node: NodeId) -> usize {
        self.nodes[node].edge_length(self.position)
    }

    fn extend_phase(&mut self) {
        self.remainder += 1;
        self.last_internal = None;
        let c = self.text[self.position];

        while self.remainder > 0 {
            if self.active_length == 0 {
                self.active_edge_pos = self.position;
            }
            let edge_char = self.text[self.active_edge_pos];

            match self.nodes[self.active_node].children.get(&edge_char).copied() {
                None => {
                    // Rule 1: no edge starting with `edge_char`, attach a fresh leaf.
                    let leaf = self.new_node(self.position, EdgeEnd::Open);
                    self.nodes[self.active_node].children.insert(c, leaf);
                    self.link_last_internal(self.active_node);
                    self.remainder -= 1;
                }
                Some(edge) => {
                    let edge_len = self.edge_length(edge);
                    if self.active_length >= edge_len {
                        // Walk down: re-root the active point onto `edge` and retry
                        // this extension without decrementing `remainder`.
                        self.active_node = edge;
                        self.active_edge_pos += edge_len;
                        self.active_length -= edge_len;
                        continue;
                    }

                    let next = self.text[self.nodes[edge].start + self.active_length];
                    if next == c {
                        // Rule 3 (showstopper): the suffix is already implicit here.
                        self.link_last_internal(self.active_node);
                        self.active_length += 1;
                        break;
                    }

                    // Rule 2: split the edge and hang a new leaf off the split point.
                    let split_start = self.nodes[edge].start;
                    let split = self.new_node(split_start, EdgeEnd::Bounded(split_start + self.active_length));
                    self.nodes[self.active_node].children.insert(edge_char, split);

                    let leaf = self.new_node(self.position, EdgeEnd::Open);
                    self.nodes[split].children.insert(c, leaf);

                    self.nodes[edge].start += self.active_length;
                    let shortened_first_char = self.text[self.nodes[edge].start];
                    self.nodes[split].children.insert(shortened_first_char, edge);

                    self.link_last_internal(split);
                    self.last_internal = Some(split);

                    self.remainder -= 1;
                }
            }

            if self.active_node == ROOT && self.active_length > 0 {
                self.active_length -= 1;
                self.active_edge_pos = self.position - self.remainder + 1;
            } else if self.active_node != ROOT {
                self.active_node = self.nodes[self.active_node].suffix_link;
            }
        }
    }

    fn link_last_internal(&mut self, target: NodeId) {
        if let Some(node) = self.last_internal.take() {
            self.nodes[node].suffix_link = target;
        }
    }

    fn new_node(&mut self, start: usize, end: EdgeEnd) -> NodeId {
        self.nodes.push(Node::new(start, end));
        self.nodes.len() - 1
    }

    fn freeze_open_ends(&mut self) {
        let full_len = self.text.len();
        for node in &mut self.nodes {
            if node.end == EdgeEnd::Open {
                node.end = EdgeEnd::Bounded(full_len);
            }
        }
    }
}
