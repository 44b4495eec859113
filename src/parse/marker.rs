//! Ordinal positions of parameter markers

use crate::parse::rule::RuleName;
use crate::parse::tree::{NodeId, NodeRef, ParseTree};
use std::collections::HashMap;

/// Maps every `parameterMarker` node of a statement to its position among
/// all markers, counting from zero in source order.
///
/// Built once per statement before extraction and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterMarkerIndexes {
    indexes: HashMap<NodeId, usize>,
}

impl ParameterMarkerIndexes {
    /// Numbers the markers of `tree` in pre-order, which is source order.
    pub fn build(tree: &ParseTree) -> Self {
        let mut indexes = HashMap::new();
        let mut stack = vec![tree.root()];
        while let Some(node) = stack.pop() {
            if node.is_rule(RuleName::ParameterMarker) {
                indexes.insert(node.id(), indexes.len());
            }
            let children: Vec<NodeRef<'_>> = node.rule_children().collect();
            stack.extend(children.into_iter().rev());
        }
        log::trace!("Indexed {} parameter marker(s)", indexes.len());
        Self { indexes }
    }

    pub fn get(&self, node: NodeId) -> Option<usize> {
        self.indexes.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }
}

impl From<HashMap<NodeId, usize>> for ParameterMarkerIndexes {
    fn from(indexes: HashMap<NodeId, usize>) -> Self {
        Self { indexes }
    }
}
