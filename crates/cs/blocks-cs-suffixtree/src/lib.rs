/*!
This crate provides a linear-time suffix tree, built with Ukkonen's online
construction algorithm, plus the small suite of string algorithms that are
naturally expressed as traversals over it.

# Suffix Tree

- [`tree::SuffixTree`]: O(n) construction, O(1)-amortized extension per
  character, backed by an arena of indexed nodes.
  - `contains`/`count`/`find_all`: substring membership, occurrence
    counting, and all-occurrences enumeration, each in time proportional to
    the pattern length plus (for the latter two) the number of matches.
  - `longest_repeated_substring`: the deepest branching internal node's
    path-label.
  - `longest_common_substring`/`longest_common_substring_info`: greedy
    re-root walk of a second text against this tree.
  - `get_all_suffixes`/`enumerate_suffixes`: eager and lazy sorted suffix
    enumeration.
  - `print`: an opaque, iterative, depth-indented debug rendering.

# Usage Example

```rust
use blocks_cs_suffixtree::tree::SuffixTree;

let st = SuffixTree::build("banana").expect("banana has no sentinel");
assert!(st.contains("ana").unwrap());
assert_eq!(st.find_all("ana").unwrap(), vec![1, 3]);
assert_eq!(st.count("ana").unwrap(), 2);
assert_eq!(st.longest_repeated_substring(), "ana");
```

# Features
- Construction and every traversal are iterative (explicit heap stacks),
  so pathological inputs like `"a".repeat(n)` never blow a thread stack.
- Once built, a [`tree::SuffixTree`] is immutable and `Sync`: any number of
  readers may query it concurrently with no synchronization.
*/

pub mod error;
pub mod tree;

pub use error::{Result, SuffixTreeError};
pub use tree::SuffixTree;
