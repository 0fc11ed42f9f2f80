//! Error types for field paths.

use thiserror::Error;

/// Failure to build a path from text or from a leaf sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPathError {
    /// A path needs at least one leaf.
    #[error("field path must have at least one segment")]
    Empty,

    /// A dotted path contained an empty segment, as in `a..b` or `a.`.
    #[error("empty segment at position {position} in field path {input:?}")]
    EmptySegment {
        /// The dotted input.
        input: String,
        /// Zero-based segment position.
        position: usize,
    },
}
