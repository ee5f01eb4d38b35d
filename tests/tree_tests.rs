// Integration tests for tree construction and rendering

use minilex::lexer::{tokenize, SourceLocation, Token, TokenKind};
use minilex::symbols::SymbolTable;
use minilex::tree::{build_tree, Nesting, SyntaxTree, TreeBuilder};

fn tree_of(source: &str) -> SyntaxTree {
    let mut symbols = SymbolTable::new();
    build_tree(&tokenize(source, &mut symbols))
}

#[test]
fn test_block_then_sibling() {
    let loc = SourceLocation::default();
    let tokens = vec![
        Token::new(TokenKind::Delimiter, "{", loc),
        Token::new(TokenKind::Identifier, "a", loc),
        Token::new(TokenKind::Delimiter, "}", loc),
        Token::new(TokenKind::Identifier, "b", loc),
    ];
    let tree = build_tree(&tokens);

    assert_eq!(tree.child_labels(SyntaxTree::ROOT), vec!["{", "b"]);
    let block = tree.children(SyntaxTree::ROOT).next().unwrap();
    assert_eq!(block.label, "{");
    assert_eq!(block.children.len(), 2);
    assert_eq!(tree.node(block.children[0]).unwrap().label, "a");
}

#[test]
fn test_render_layout() {
    let tree = tree_of("if(x){y=2;}z");

    let expected = "\
|- Programa
    |- if
    |- (
    |- x
    |- )
    |- {
        |- y
        |- =
        |- 2
        |- ;
        |- }
    |- z
";
    assert_eq!(tree.render(), expected);
}

#[test]
fn test_extra_close_brace_is_harmless() {
    let tree = tree_of("} } a");

    assert_eq!(tree.child_labels(SyntaxTree::ROOT), vec!["}", "}", "a"]);
    let balance = tree.brace_balance();
    assert_eq!(balance.stray, 2);
    assert_eq!(balance.unclosed, 0);
}

#[test]
fn test_unclosed_brace_keeps_collecting() {
    let tree = tree_of("{ a b");

    assert_eq!(tree.child_labels(SyntaxTree::ROOT), vec!["{"]);
    assert_eq!(tree.child_labels(1), vec!["a", "b"]);
    assert_eq!(tree.brace_balance().unclosed, 1);
}

#[test]
fn test_reset_to_root_caps_depth_per_close() {
    // The second `}` is attached at the root because the first one reset the
    // cursor.
    let tree = tree_of("{{a}b}");
    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.child_labels(SyntaxTree::ROOT), vec!["{", "b", "}"]);
    assert!(tree.brace_balance().is_balanced());
}

#[test]
fn test_stack_nesting() {
    let mut symbols = SymbolTable::new();
    let tokens = tokenize("{{a}b}c", &mut symbols);
    let tree = TreeBuilder::new(Nesting::Stack).build(&tokens);

    let expected = "\
|- Programa
    |- {
        |- {
            |- a
            |- }
        |- b
        |- }
    |- c
";
    assert_eq!(tree.render(), expected);
}

#[test]
fn test_walk_visits_every_node_once() {
    let tree = tree_of("int f(){if(a){b=1;}return b;}");
    assert_eq!(tree.walk().count(), tree.len());
}
