//! Parse tree lookups shared by the extractors
//!
//! Searches visit rule nodes only; terminals are skipped unless a function
//! says otherwise.

use crate::core::{ExtractError, ExtractResult};
use crate::parse::{NodeRef, RuleName};
use std::collections::VecDeque;

/// First rule node matching `rule` in breadth-first order, `node` included.
pub fn find_first_child_node<'a>(node: NodeRef<'a>, rule: RuleName) -> Option<NodeRef<'a>> {
    let mut queue = VecDeque::from([node]);
    while let Some(each) = queue.pop_front() {
        if each.is_rule(rule) {
            return Some(each);
        }
        queue.extend(each.rule_children());
    }
    None
}

/// Like [`find_first_child_node`], for nodes the grammar guarantees.
///
/// A miss means the tree does not match the grammar the extractors were
/// written against and is reported as an internal error.
pub fn get_first_child_node<'a>(node: NodeRef<'a>, rule: RuleName) -> ExtractResult<NodeRef<'a>> {
    find_first_child_node(node, rule).ok_or_else(|| {
        log::error!(
            "Grammar contract broken: no `{}` under `{}` at {}",
            rule,
            node.rule(),
            node.span()
        );
        ExtractError::missing_node(rule.name(), node.rule(), node.start())
    })
}

/// First direct rule child matching `rule`.
pub fn find_first_child_node_none_recursive<'a>(
    node: NodeRef<'a>,
    rule: RuleName,
) -> Option<NodeRef<'a>> {
    node.rule_children().find(|child| child.is_rule(rule))
}

/// First direct terminal child of token type `rule`.
pub fn find_token_child<'a>(node: NodeRef<'a>, rule: RuleName) -> Option<NodeRef<'a>> {
    node.children().find(|child| child.is_token(rule))
}

/// Every rule node matching `rule` in pre-order (source order), `node`
/// included.
pub fn get_all_descendant_nodes<'a>(node: NodeRef<'a>, rule: RuleName) -> Vec<NodeRef<'a>> {
    let mut result = Vec::new();
    let mut stack = vec![node];
    while let Some(each) = stack.pop() {
        if each.is_rule(rule) {
            result.push(each);
        }
        let children: Vec<NodeRef<'a>> = each.rule_children().collect();
        stack.extend(children.into_iter().rev());
    }
    result
}

/// Follows the chain of only children down from `node` and returns the first
/// node on it matching `rule`.
///
/// The walk stops at a node with several children or a terminal child, so a
/// match means the whole subtree is nothing but that rule: `expr -> literals
/// -> numberLiterals` matches, `expr -> (expr + expr)` does not.
pub fn find_single_node_from_first_descendant<'a>(
    node: NodeRef<'a>,
    rule: RuleName,
) -> Option<NodeRef<'a>> {
    let mut next = node;
    loop {
        if next.is_rule(rule) {
            return Some(next);
        }
        if next.child_count() != 1 {
            return None;
        }
        next = next.child(0).filter(|child| !child.is_terminal())?;
    }
}
