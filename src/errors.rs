//! Error types for tbgen-core.

use thiserror::Error;

use crate::types::SymbolKind;

/// Top-level error type for fixture generation.
#[derive(Debug, Error)]
pub enum TbgenError {
    /// Configuration-related errors.
    #[error("configuration error: {0}")]
    Config(String),

    /// A symbol line whose kind keyword is not `concept` or `role`, or that
    /// cannot be split into kind and name.
    #[error("malformed symbol at line {line}: `{found}`")]
    MalformedSymbol {
        /// 1-based line number in the source file.
        line: usize,
        /// The offending kind keyword or line fragment.
        found: String,
    },

    /// Attempt to attach a child under a parent of a different kind. This is
    /// a programming-contract violation, not a recoverable condition.
    #[error(
        "cannot attach {child_kind} node `{child}` (#{index}) under {parent_kind} node `{parent}`"
    )]
    HeterogeneousAttach {
        /// Kind of the would-be parent.
        parent_kind: SymbolKind,
        /// Display name of the would-be parent.
        parent: String,
        /// Kind of the rejected child.
        child_kind: SymbolKind,
        /// Display name of the rejected child.
        child: String,
        /// Arena index of the rejected child.
        index: usize,
    },

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde serialization/deserialization error.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for tbgen operations.
pub type Result<T> = std::result::Result<T, TbgenError>;
