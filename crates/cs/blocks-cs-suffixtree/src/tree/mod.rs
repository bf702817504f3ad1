//! A suffix tree built in linear time with Ukkonen's online algorithm.
//!
//! See the crate-level docs for an overview; this module holds the data
//! model (§3 of the design), the builder (§4.2), and re-exports the query
//! and derived-algorithm surfaces that live in the sibling `query`,
//! `algorithms`, and `print` modules.

mod algorithms;
mod builder;
mod node;
mod print;
mod query;

pub(crate) use node::{EdgeEnd, Node, NodeId, ROOT};

use crate::error::{Result, SuffixTreeError};

pub use algorithms::SuffixIter;

/// The character reserved to terminate the text during construction.
///
/// `\u{10FFFF}` is a Unicode noncharacter: it is guaranteed never to be
/// assigned to an interchangeable character, so well-formed text passed in
/// by a caller cannot contain it. Any input that does contain it is
/// rejected with [`SuffixTreeError::InvalidInput`] rather than silently
/// corrupting the tree.
pub const SENTINEL: char = '\u{10FFFF}';

/// A suffix tree over a fixed text, built once and read many times.
///
/// Construction appends the reserved [`SENTINEL`] character internally so
/// every suffix of the text ends at an explicit leaf; the sentinel is never
/// exposed back to callers (see [`SuffixTree::text`], [`SuffixTree::find_all`],
/// [`SuffixTree::get_all_suffixes`]).
///
/// Once built, a `SuffixTree` never mutates again: every query method takes
/// `&self`, so any number of readers may use the same tree concurrently.
#[derive(Debug)]
pub struct SuffixTree {
    /// Original input, sentinel excluded.
    text: Vec<char>,
    /// Arena of all nodes; index 0 is always the root.
    nodes: Vec<Node>,
}

/// Where a pattern walk from the root ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Landing {
    /// Node whose incoming edge was last entered.
    pub node: NodeId,
    /// Full path depth from root to `node` (i.e. to the end of its edge,
    /// not just the characters the pattern matched on it).
    pub depth: usize,
}

impl SuffixTree {
    /// Builds a suffix tree from `text` using Ukkonen's algorithm.
    ///
    /// Runs in `O(n)` amortized time and space, where `n = text.chars().count()`.
    ///
    /// # Errors
    /// Returns [`SuffixTreeError::InvalidInput`] if `text` contains the
    /// reserved [`SENTINEL`] character. No partial tree is observable in
    /// that case.
    ///
    /// # Example
    /// ```
    /// use blocks_cs_suffixtree::tree::SuffixTree;
    ///
    /// let st = SuffixTree::build("banana").unwrap();
    /// assert!(st.contains("nan").unwrap());
    /// ```
    pub fn build(text: &str) -> Result<Self> {
        let chars: Vec<char> = text.chars().collect();
        if chars.contains(&SENTINEL) {
            return Err(SuffixTreeError::invalid_input("build"));
        }

        let mut buffer = chars.clone();
        buffer.push(SENTINEL);

        let nodes = builder::Builder::new(buffer).run();

        Ok(Self { text: chars, nodes })
    }

    /// The original input, sentinel excluded.
    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    /// Number of characters in the original input (excluding the sentinel).
    pub(crate) fn len(&self) -> usize {
        self.text.len()
    }

    /// `text.len() + 1`: the length of the internally sentineled buffer,
    /// and the value every open leaf edge is frozen to after construction.
    pub(crate) fn full_len(&self) -> usize {
        self.text.len() + 1
    }

    pub(crate) fn char_at(&self, pos: usize) -> char {
        if pos == self.text.len() {
            SENTINEL
        } else {
            self.text[pos]
        }
    }

    pub(crate) fn edge_length(&self, node: NodeId) -> usize {
        self.nodes[node].edge_length(self.full_len())
    }

    fn validate_pattern(pattern: &str, context: &'static str) -> Result<Vec<char>> {
        let chars: Vec<char> = pattern.chars().collect();
        if chars.contains(&SENTINEL) {
            return Err(SuffixTreeError::invalid_input(context));
        }
        Ok(chars)
    }

    /// Whether `pattern` occurs anywhere in the text. The empty pattern is
    /// vacuously present.
    ///
    /// # Errors
    /// [`SuffixTreeError::InvalidInput`] if `pattern` contains the sentinel.
    pub fn contains(&self, pattern: &str) -> Result<bool> {
        let chars = Self::validate_pattern(pattern, "contains")?;
        Ok(self.walk(&chars).is_some())
    }

    /// How many times `pattern` occurs in the text. The empty pattern
    /// occurs `text.len()` times (once per starting position).
    ///
    /// # Errors
    /// [`SuffixTreeError::InvalidInput`] if `pattern` contains the sentinel.
    pub fn count(&self, pattern: &str) -> Result<usize> {
        let chars = Self::validate_pattern(pattern, "count")?;
        Ok(match self.walk(&chars) {
            Some(landing) => self.count_leaves(landing),
            None => 0,
        })
    }

    /// All starting positions where `pattern` occurs, in unspecified but
    /// stable order. The empty pattern returns every position `0..text.len()`.
    ///
    /// # Errors
    /// [`SuffixTreeError::InvalidInput`] if `pattern` contains the sentinel.
    pub fn find_all(&self, pattern: &str) -> Result<Vec<usize>> {
        let chars = Self::validate_pattern(pattern, "find_all")?;
        Ok(match self.walk(&chars) {
            Some(landing) => self.collect_leaf_positions(landing),
            None => Vec::new(),
        })
    }

    /// The longest substring that occurs at least twice in the text, found
    /// by locating the deepest internal node with two or more children.
    /// Returns the empty string if every character of the text is unique.
    pub fn longest_repeated_substring(&self) -> String {
        algorithms::longest_repeated_substring(self)
    }

    /// The longest substring shared with `other`, found by walking `other`
    /// against this tree from every starting position.
    ///
    /// Runs in `O(n * m)` where `n` is this tree's text length and `m =
    /// other.chars().count()`.
    ///
    /// # Errors
    /// [`SuffixTreeError::InvalidInput`] if `other` contains the sentinel.
    pub fn longest_common_substring(&self, other: &str) -> Result<String> {
        Ok(self.longest_common_substring_info(other)?.0)
    }

    /// Like [`Self::longest_common_substring`], but also reports the first
    /// occurrence of the match inside this tree's text and its occurrence
    /// inside `other`.
    ///
    /// # Errors
    /// [`SuffixTreeError::InvalidInput`] if `other` contains the sentinel.
    pub fn longest_common_substring_info(&self, other: &str) -> Result<(String, usize, usize)> {
        let other_chars = Self::validate_pattern(other, "longest_common_substring")?;
        Ok(algorithms::longest_common_substring(self, &other_chars))
    }

    /// Every non-empty suffix of the text, sorted ascending. `O(n^2)` memory
    /// in the worst case since suffixes themselves take quadratic space;
    /// see [`Self::enumerate_suffixes`] for the incremental-memory form.
    pub fn get_all_suffixes(&self) -> Vec<String> {
        algorithms::all_suffixes(self)
    }

    /// A lazy, sorted iterator over every non-empty suffix of the text,
    /// using `O(n)` incremental memory (a stack of in-progress edges)
    /// rather than materializing every suffix up front.
    pub fn enumerate_suffixes(&self) -> SuffixIter<'_> {
        SuffixIter::new(self)
    }

    /// An opaque, multi-line debug rendering of the tree: one line per
    /// node, indented by depth, showing its edge label (`$` for the
    /// sentinel), a leaf marker, and the first character reached by its
    /// suffix link. Not part of the semantic contract.
    pub fn print(&self) -> String {
        print::render(self)
    }
}
