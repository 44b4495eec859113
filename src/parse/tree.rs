//! Immutable parse tree handed over by the grammar front end
//!
//! Nodes live in an arena owned by [`ParseTree`] and are addressed by
//! [`NodeId`]; [`NodeRef`] is the borrowed view extractors walk. Offsets are
//! character offsets into the statement text, stop inclusive.

use crate::core::{Span, TreeError};
use crate::parse::rule::RuleName;
use std::fmt;
use std::ops::Range;

/// Index of a node inside its tree.
///
/// Only meaningful for the tree that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Node {
    rule: Box<str>,
    terminal: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    span: Span,
    bytes: Range<usize>,
}

/// Parse tree of one statement.
#[derive(Debug, Clone)]
pub struct ParseTree {
    text: String,
    nodes: Vec<Node>,
    root: NodeId,
}

impl ParseTree {
    /// Statement text the offsets refer to.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            id: self.root,
        }
    }

    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { tree: self, id })
    }

    /// Number of nodes, terminals included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

/// Borrowed handle on one node of a [`ParseTree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a ParseTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'a ParseTree {
        self.tree
    }

    /// Grammar rule name, or token type for terminals.
    pub fn rule(&self) -> &'a str {
        &self.tree.get(self.id).rule
    }

    /// Whether this is a rule node (not a terminal) produced by `rule`.
    pub fn is_rule(&self, rule: RuleName) -> bool {
        !self.is_terminal() && self.rule() == rule.name()
    }

    /// Whether this is a terminal of token type `rule`.
    pub fn is_token(&self, rule: RuleName) -> bool {
        self.is_terminal() && self.rule() == rule.name()
    }

    pub fn is_terminal(&self) -> bool {
        self.tree.get(self.id).terminal
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        let tree = self.tree;
        tree.get(self.id).parent.map(|id| NodeRef { tree, id })
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let tree = self.tree;
        tree.get(self.id)
            .children
            .iter()
            .map(move |&id| NodeRef { tree, id })
    }

    /// Children that are rule nodes, skipping terminals.
    pub fn rule_children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        self.children().filter(|child| !child.is_terminal())
    }

    pub fn child(&self, index: usize) -> Option<NodeRef<'a>> {
        let tree = self.tree;
        tree.get(self.id)
            .children
            .get(index)
            .map(|&id| NodeRef { tree, id })
    }

    pub fn child_count(&self) -> usize {
        self.tree.get(self.id).children.len()
    }

    pub fn span(&self) -> Span {
        self.tree.get(self.id).span
    }

    pub fn start(&self) -> usize {
        self.span().start
    }

    pub fn stop(&self) -> usize {
        self.span().stop
    }

    /// Raw statement text covered by the node.
    pub fn text(&self) -> &'a str {
        let bytes = self.tree.get(self.id).bytes.clone();
        &self.tree.text[bytes]
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {:?}", self.rule(), self.span(), self.text())
    }
}

/// Builds a [`ParseTree`] from the rule/token stream of a parser.
///
/// Rule nodes are opened with [`start_node`](Self::start_node) and closed with
/// [`finish_node`](Self::finish_node); tokens are added as leaves. Offsets are
/// checked against the statement text and the enclosing node.
///
/// ```
/// use sqlsegment::parse::TreeBuilder;
///
/// let mut builder = TreeBuilder::new("TOP 5");
/// builder
///     .start_node("top", 0)?
///     .token("TOP", 0, 2)?
///     .start_node("expr", 4)?
///     .token("NUMBER_", 4, 4)?
///     .finish_node(4)?
///     .finish_node(4)?;
/// let tree = builder.finish()?;
/// assert_eq!(tree.root().text(), "TOP 5");
/// # Ok::<(), sqlsegment::core::TreeError>(())
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
    text: String,
    /// Byte offset of every character, followed by the text length.
    char_bytes: Vec<usize>,
    nodes: Vec<Node>,
    open: Vec<NodeId>,
    root: Option<NodeId>,
}

impl TreeBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let char_bytes = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();
        Self {
            text,
            char_bytes,
            nodes: Vec::new(),
            open: Vec::new(),
            root: None,
        }
    }

    fn char_len(&self) -> usize {
        self.char_bytes.len() - 1
    }

    fn check_offset(&self, offset: usize) -> Result<(), TreeError> {
        if offset >= self.char_len() {
            return Err(TreeError::OffsetOutOfRange {
                offset,
                len: self.char_len(),
            });
        }
        Ok(())
    }

    fn attach(&mut self, node: Node) -> Result<NodeId, TreeError> {
        let id = NodeId(self.nodes.len());
        match self.open.last() {
            Some(&parent_id) => {
                let parent = &self.nodes[parent_id.0];
                if node.span.start < parent.span.start {
                    return Err(TreeError::OutsideParent {
                        rule: node.rule.to_string(),
                        parent: parent.rule.to_string(),
                        start: node.span.start,
                        stop: node.span.stop,
                    });
                }
                if let Some(previous) = parent.children.last().map(|&c| &self.nodes[c.0]) {
                    if node.span.start <= previous.span.stop {
                        return Err(TreeError::SiblingOverlap {
                            rule: node.rule.to_string(),
                            previous: previous.rule.to_string(),
                            start: node.span.start,
                            previous_stop: previous.span.stop,
                        });
                    }
                }
                self.nodes[parent_id.0].children.push(id);
            }
            None => {
                if self.root.is_some() {
                    return Err(TreeError::MultipleRoots {
                        rule: node.rule.to_string(),
                    });
                }
                self.root = Some(id);
            }
        }
        self.nodes.push(Node {
            parent: self.open.last().copied(),
            ..node
        });
        Ok(id)
    }

    /// Opens a rule node starting at `start`.
    pub fn start_node(&mut self, rule: &str, start: usize) -> Result<&mut Self, TreeError> {
        self.check_offset(start)?;
        let id = self.attach(Node {
            rule: rule.into(),
            terminal: false,
            parent: None,
            children: Vec::new(),
            span: Span::at(start),
            bytes: 0..0,
        })?;
        self.open.push(id);
        Ok(self)
    }

    /// Adds a terminal covering `[start, stop]` to the open node.
    pub fn token(&mut self, rule: &str, start: usize, stop: usize) -> Result<&mut Self, TreeError> {
        self.check_offset(start)?;
        self.check_offset(stop)?;
        if stop < start {
            return Err(TreeError::InvertedRange {
                rule: rule.to_string(),
                start,
                stop,
            });
        }
        let bytes = self.char_bytes[start]..self.char_bytes[stop + 1];
        self.attach(Node {
            rule: rule.into(),
            terminal: true,
            parent: None,
            children: Vec::new(),
            span: Span::new(start, stop),
            bytes,
        })?;
        Ok(self)
    }

    /// Closes the innermost open rule node at `stop`.
    ///
    /// On error the node stays open, so a corrected `stop` can still close it
    /// and [`finish`](Self::finish) keeps reporting it as unbalanced.
    pub fn finish_node(&mut self, stop: usize) -> Result<&mut Self, TreeError> {
        let id = *self.open.last().ok_or(TreeError::NoOpenNode)?;
        self.check_offset(stop)?;
        let start = self.nodes[id.0].span.start;
        let rule = self.nodes[id.0].rule.to_string();
        if stop < start {
            return Err(TreeError::InvertedRange { rule, start, stop });
        }
        if let Some(escaping) = self.nodes[id.0]
            .children
            .iter()
            .map(|child| &self.nodes[child.0])
            .find(|child| child.span.stop > stop)
        {
            return Err(TreeError::OutsideParent {
                rule: escaping.rule.to_string(),
                parent: rule,
                start: escaping.span.start,
                stop: escaping.span.stop,
            });
        }
        self.open.pop();
        let node = &mut self.nodes[id.0];
        node.span = Span::new(start, stop);
        node.bytes = self.char_bytes[start]..self.char_bytes[stop + 1];
        Ok(self)
    }

    pub fn finish(self) -> Result<ParseTree, TreeError> {
        if !self.open.is_empty() {
            return Err(TreeError::Unbalanced(self.open.len()));
        }
        let root = self.root.ok_or(TreeError::Empty)?;
        Ok(ParseTree {
            text: self.text,
            nodes: self.nodes,
            root,
        })
    }
}
