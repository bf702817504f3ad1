use thiserror::Error;

/// Errors that can occur while building or querying a [`SuffixTree`](crate::tree::SuffixTree).
///
/// The core only ever raises two conditions: a reserved character showed up
/// where it isn't allowed, or a required argument was missing. Anything else
/// (an empty pattern, a pattern longer than the text, a text with no
/// repeats) is a well-defined normal result, not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SuffixTreeError {
    /// `context`'s input contained the reserved sentinel character.
    #[error("input to `{context}` contains the reserved sentinel character")]
    InvalidInput {
        /// The operation that rejected the input (e.g. `"build"`, `"find_all"`).
        context: &'static str,
    },

    /// `context` requires an argument that was not provided.
    #[error("`{context}` requires a pattern argument but none was provided")]
    InvalidArgument {
        /// The operation that was missing its argument.
        context: &'static str,
    },
}

/// A specialized `Result` type for suffix tree operations.
pub type Result<T> = std::result::Result<T, SuffixTreeError>;

impl SuffixTreeError {
    /// Creates a new `InvalidInput` error naming the operation that rejected it.
    pub(crate) fn invalid_input(context: &'static str) -> Self {
        Self::InvalidInput { context }
    }

    /// Creates a new `InvalidArgument` error naming the operation that needed it.
    #[allow(dead_code)]
    pub(crate) fn invalid_argument(context: &'static str) -> Self {
        Self::InvalidArgument { context }
    }
}
