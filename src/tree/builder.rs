//! Tree construction from a token stream
//!
//! Every token becomes exactly one node. Where it is attached depends on the
//! [`Nesting`] strategy:
//!
//! - [`Nesting::ResetToRoot`]: a single cursor. `{` moves the cursor to the
//!   node just created, `}` sends it straight back to the root no matter how
//!   deep it was. `{ { a } b }` therefore puts `b` at the root.
//! - [`Nesting::Stack`]: a stack of open nodes. `{` pushes, `}` pops one
//!   level, so blocks nest the way they read.
//!
//! Neither strategy rejects unbalanced input. A `}` with nothing open leaves
//! the cursor at the root, and an unclosed `{` keeps collecting the tokens
//! after it.

use super::{NodeId, SyntaxTree};
use crate::constants::ROOT_LABEL;
use crate::lexer::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Nesting {
    #[default]
    ResetToRoot,
    Stack,
}

pub struct TreeBuilder {
    nesting: Nesting,
    root_label: String,
}

impl TreeBuilder {
    pub fn new(nesting: Nesting) -> Self {
        TreeBuilder {
            nesting,
            root_label: ROOT_LABEL.to_string(),
        }
    }

    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }

    pub fn build(&self, tokens: &[Token]) -> SyntaxTree {
        let mut tree = SyntaxTree::new(&self.root_label);
        // Open nodes; the last one is the insertion point.
        let mut open: Vec<NodeId> = vec![SyntaxTree::ROOT];

        for token in tokens {
            let parent = open.last().copied().unwrap_or(SyntaxTree::ROOT);
            let id = tree.push_child(parent, &token.text, token.kind);

            if token.opens_block() {
                match self.nesting {
                    Nesting::ResetToRoot => {
                        open.truncate(1);
                        open.push(id);
                    }
                    Nesting::Stack => open.push(id),
                }
            }
            if token.closes_block() {
                match self.nesting {
                    Nesting::ResetToRoot => open.truncate(1),
                    Nesting::Stack => {
                        if open.len() > 1 {
                            open.pop();
                        }
                    }
                }
            }
        }

        tree
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(Nesting::default())
    }
}

/// Build a tree with the default reset-to-root strategy.
pub fn build_tree(tokens: &[Token]) -> SyntaxTree {
    TreeBuilder::default().build(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{SourceLocation, TokenKind};

    fn tok(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text, SourceLocation::default())
    }

    fn block_then_sibling() -> Vec<Token> {
        vec![
            tok(TokenKind::Delimiter, "{"),
            tok(TokenKind::Identifier, "a"),
            tok(TokenKind::Delimiter, "}"),
            tok(TokenKind::Identifier, "b"),
        ]
    }

    #[test]
    fn test_close_brace_returns_to_root() {
        let tree = build_tree(&block_then_sibling());

        assert_eq!(tree.root().label, "Programa");
        assert_eq!(tree.child_labels(SyntaxTree::ROOT), vec!["{", "b"]);
        // `}` is appended before the cursor resets.
        assert_eq!(tree.child_labels(1), vec!["a", "}"]);
    }

    #[test]
    fn test_every_token_becomes_a_node() {
        let tokens = block_then_sibling();
        let tree = build_tree(&tokens);
        assert_eq!(tree.len(), tokens.len() + 1);
    }

    #[test]
    fn test_empty_input_is_root_only() {
        let tree = build_tree(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.render(), "|- Programa\n");
    }

    #[test]
    fn test_reset_flattens_nested_blocks() {
        // { { a } b }
        let tokens = vec![
            tok(TokenKind::Delimiter, "{"),
            tok(TokenKind::Delimiter, "{"),
            tok(TokenKind::Identifier, "a"),
            tok(TokenKind::Delimiter, "}"),
            tok(TokenKind::Identifier, "b"),
            tok(TokenKind::Delimiter, "}"),
        ];
        let tree = build_tree(&tokens);

        assert_eq!(tree.child_labels(SyntaxTree::ROOT), vec!["{", "b", "}"]);
        assert_eq!(tree.child_labels(1), vec!["{"]);
        assert_eq!(tree.child_labels(2), vec!["a", "}"]);
    }

    #[test]
    fn test_stack_nesting_keeps_blocks() {
        let tokens = vec![
            tok(TokenKind::Delimiter, "{"),
            tok(TokenKind::Delimiter, "{"),
            tok(TokenKind::Identifier, "a"),
            tok(TokenKind::Delimiter, "}"),
            tok(TokenKind::Identifier, "b"),
            tok(TokenKind::Delimiter, "}"),
        ];
        let tree = TreeBuilder::new(Nesting::Stack).build(&tokens);

        assert_eq!(tree.child_labels(SyntaxTree::ROOT), vec!["{"]);
        assert_eq!(tree.child_labels(1), vec!["{", "b", "}"]);
        assert_eq!(tree.child_labels(2), vec!["a", "}"]);
    }

    #[test]
    fn test_brace_text_needs_delimiter_kind() {
        let tokens = vec![tok(TokenKind::Operator, "{"), tok(TokenKind::Identifier, "a")];
        let tree = build_tree(&tokens);
        assert_eq!(tree.child_labels(SyntaxTree::ROOT), vec!["{", "a"]);
    }

    #[test]
    fn test_custom_root_label() {
        let tree = TreeBuilder::default().with_root_label("main").build(&[]);
        assert_eq!(tree.root().label, "main");
    }
}
