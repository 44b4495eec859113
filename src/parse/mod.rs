//! Parse tree input of the extraction layer
//!
//! The grammar front end materializes each statement as a [`ParseTree`]
//! through [`TreeBuilder`]; [`ParameterMarkerIndexes`] correlates its
//! placeholder nodes with their runtime parameter positions.

pub mod marker;
pub mod rule;
pub mod tree;

pub use marker::ParameterMarkerIndexes;
pub use rule::RuleName;
pub use tree::{NodeId, NodeRef, ParseTree, TreeBuilder};

/// A parsed statement together with its parameter marker positions.
#[derive(Debug, Clone)]
pub struct Statement {
    tree: ParseTree,
    markers: ParameterMarkerIndexes,
}

impl Statement {
    /// Wraps `tree`, numbering its parameter markers.
    pub fn new(tree: ParseTree) -> Self {
        let markers = ParameterMarkerIndexes::build(&tree);
        Self { tree, markers }
    }

    /// Wraps `tree` with markers computed elsewhere.
    pub fn with_markers(tree: ParseTree, markers: ParameterMarkerIndexes) -> Self {
        Self { tree, markers }
    }

    pub fn tree(&self) -> &ParseTree {
        &self.tree
    }

    pub fn markers(&self) -> &ParameterMarkerIndexes {
        &self.markers
    }

    pub fn text(&self) -> &str {
        self.tree.text()
    }
}
