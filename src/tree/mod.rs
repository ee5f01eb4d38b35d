//! Brace-depth token tree
//!
//! This is not a syntax tree in the grammatical sense: tokens are grouped
//! only by where `{` and `}` appear. See [`builder`] for the two grouping
//! strategies.
//!
//! Nodes live in an arena owned by [`SyntaxTree`] and refer to their
//! children by [`NodeId`]. Node 0 is always the synthetic root.

pub mod builder;

pub use builder::{build_tree, Nesting, TreeBuilder};

use crate::constants::TREE_INDENT;
use crate::lexer::TokenKind;

/// Index of a node in its tree's arena
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub label: String,
    /// Kind of the token this node was made from; `None` for the root.
    pub kind: Option<TokenKind>,
    pub children: Vec<NodeId>,
}

impl Node {
    fn new(label: impl Into<String>, kind: Option<TokenKind>) -> Self {
        Node {
            label: label.into(),
            kind,
            children: Vec::new(),
        }
    }

    fn is_delimiter(&self, text: &str) -> bool {
        self.kind == Some(TokenKind::Delimiter) && self.label == text
    }
}

/// Result of [`SyntaxTree::brace_balance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BraceBalance {
    /// `{` never matched by a `}`
    pub unclosed: usize,
    /// `}` seen with no `{` open
    pub stray: usize,
}

impl BraceBalance {
    pub fn is_balanced(&self) -> bool {
        self.unclosed == 0 && self.stray == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
}

impl SyntaxTree {
    pub const ROOT: NodeId = 0;

    /// A tree holding only the root node.
    pub fn new(root_label: &str) -> Self {
        SyntaxTree {
            nodes: vec![Node::new(root_label, None)],
        }
    }

    /// Append a new child under `parent` and return its id.
    pub(crate) fn push_child(&mut self, parent: NodeId, label: &str, kind: TokenKind) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(label, Some(kind)));
        self.nodes[parent].children.push(id);
        id
    }

    pub fn root(&self) -> &Node {
        &self.nodes[Self::ROOT]
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Child nodes of `id`, in insertion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        self.nodes
            .get(id)
            .into_iter()
            .flat_map(move |node| node.children.iter().map(move |&child| &self.nodes[child]))
    }

    /// Labels of the children of `id`.
    pub fn child_labels(&self, id: NodeId) -> Vec<&str> {
        self.children(id).map(|n| n.label.as_str()).collect()
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree holds only its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Depth-first pre-order walk yielding `(depth, node)`, root at depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: vec![(Self::ROOT, 0)],
        }
    }

    /// Deepest level reached by any node.
    pub fn depth(&self) -> usize {
        self.walk().map(|(depth, _)| depth).max().unwrap_or(0)
    }

    /// Lines of the printed tree: `4 * depth` spaces, `|- `, label.
    pub fn render_lines(&self) -> Vec<String> {
        self.walk()
            .map(|(depth, node)| format!("{}|- {}", " ".repeat(depth * TREE_INDENT), node.label))
            .collect()
    }

    /// The printed tree, one node per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.render_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Count unmatched braces with a real depth counter, independently of
    /// how the tree was shaped.
    pub fn brace_balance(&self) -> BraceBalance {
        let mut balance = BraceBalance::default();
        let mut depth = 0usize;

        // Arena order past the root is token order.
        for node in &self.nodes[1..] {
            if node.is_delimiter("{") {
                depth += 1;
            } else if node.is_delimiter("}") {
                if depth == 0 {
                    balance.stray += 1;
                } else {
                    depth -= 1;
                }
            }
        }

        balance.unclosed = depth;
        balance
    }
}

/// Iterator returned by [`SyntaxTree::walk`]
pub struct Walk<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let node = &self.tree.nodes[id];
        // Reverse so the first child is popped first.
        self.stack
            .extend(node.children.iter().rev().map(|&child| (child, depth + 1)));
        Some((depth, node))
    }
}
