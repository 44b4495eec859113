//! Error types for tree building, configuration and segment extraction
//!
//! Extraction distinguishes two failure families:
//! - internal invariant violations, raised when the parse tree lacks a node
//!   the grammar guarantees; these point at a grammar/extractor mismatch;
//! - unsupported constructs, raised when a recognized clause carries an
//!   expression shape the extractor cannot turn into a segment.
//!
//! A construct that is simply absent is never an error; extractors return
//! `Ok(None)` for it.

use thiserror::Error;

/// Extraction result type alias
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Coarse classification used by statement-level callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The grammar contract was broken.
    Internal,
    /// The statement uses a construct this layer cannot express.
    Unsupported,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    #[error("Internal error: required node `{rule}` not found under `{parent}` at offset {start}")]
    MissingNode {
        rule: &'static str,
        parent: String,
        start: usize,
    },

    #[error("Internal error: parameter marker at offset {start} has no index")]
    UnindexedParameterMarker { start: usize },

    #[error("Internal error: expression at [{start}, {stop}] resolved to nothing")]
    UnresolvedExpression { start: usize, stop: usize },

    #[error("Internal error: invalid literal `{text}` at offset {start}")]
    InvalidLiteral { text: String, start: usize },

    #[error("Internal error: owner of column `{column}` is already bound")]
    OwnerAlreadyBound { column: String },

    #[error("Unsupported {construct}: `{text}` at [{start}, {stop}]")]
    Unsupported {
        construct: &'static str,
        text: String,
        start: usize,
        stop: usize,
    },
}

impl ExtractError {
    pub fn missing_node(rule: &'static str, parent: impl Into<String>, start: usize) -> Self {
        ExtractError::MissingNode {
            rule,
            parent: parent.into(),
            start,
        }
    }

    pub fn unsupported(
        construct: &'static str,
        text: impl Into<String>,
        start: usize,
        stop: usize,
    ) -> Self {
        ExtractError::Unsupported {
            construct,
            text: text.into(),
            start,
            stop,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractError::Unsupported { .. } => ErrorKind::Unsupported,
            ExtractError::MissingNode { .. }
            | ExtractError::UnindexedParameterMarker { .. }
            | ExtractError::UnresolvedExpression { .. }
            | ExtractError::InvalidLiteral { .. }
            | ExtractError::OwnerAlreadyBound { .. } => ErrorKind::Internal,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.kind() == ErrorKind::Internal
    }
}

/// Errors raised while materializing a parse tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Offset {offset} is outside statement text of {len} characters")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("Node `{rule}` stops at {stop} before it starts at {start}")]
    InvertedRange {
        rule: String,
        start: usize,
        stop: usize,
    },

    #[error("Node `{rule}` at [{start}, {stop}] escapes its parent `{parent}`")]
    OutsideParent {
        rule: String,
        parent: String,
        start: usize,
        stop: usize,
    },

    #[error("Node `{rule}` starting at {start} does not follow sibling `{previous}` ending at {previous_stop}")]
    SiblingOverlap {
        rule: String,
        previous: String,
        start: usize,
        previous_stop: usize,
    },

    #[error("finish_node called with no open node")]
    NoOpenNode,

    #[error("Tree already has a root; `{rule}` would be a second one")]
    MultipleRoots { rule: String },

    #[error("{0} node(s) left open")]
    Unbalanced(usize),

    #[error("Tree has no root node")]
    Empty,
}

/// Errors raised while loading configuration or starting logging
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Decode(#[from] toml::de::Error),

    #[error("Cannot encode configuration: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}
