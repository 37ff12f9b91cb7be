//! Error types for compression operations.

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input text contains no symbols to build a tree from.
    #[error("input contains no symbols")]
    EmptyInput,

    /// A symbol in the text has no code in the active tree.
    #[error("symbol {0:?} has no code in the active tree")]
    SymbolNotFound(char),

    /// The bit buffer ran out before a traversal reached a leaf.
    #[error("bit stream ended before reaching a leaf")]
    TruncatedStream,

    /// A serialized blob could not be parsed into a valid tree and buffer.
    #[error("corrupt data: {0}")]
    CorruptData(String),

    /// The context has never been populated by a compress or load call.
    #[error("context is not initialized: compress or load an encoding first")]
    NotInitialized,

    /// I/O error from an underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
