//! # Introduction
//!
//! minilex tokenizes a small C-like language and groups the resulting
//! tokens into a tree keyed on `{`/`}` nesting. Results can be inspected in
//! a terminal UI built with [ratatui](https://docs.rs/ratatui) or printed in
//! batch mode.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → TreeBuilder → SyntaxTree
//!            └──→ SymbolTable → tabla_simbolos.txt
//! ```
//!
//! 1. [`lexer`] — classifies identifiers, reserved words, numbers, operators,
//!    delimiters and assignment; everything else is skipped.
//! 2. [`symbols`] — identifier table filled by the lexer, written out in a
//!    fixed two-column layout.
//! 3. [`tree`] — arena tree built from the token stream by brace depth only.
//!    There is no grammar: no precedence, no statements.
//! 4. [`diagnostics`] — what the lexer dropped and whether braces balance.
//! 5. [`session`] — the state the front ends share between actions.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use minilex::lexer::{tokenize, TokenKind};
//! use minilex::symbols::SymbolTable;
//! use minilex::tree::build_tree;
//!
//! let mut symbols = SymbolTable::new();
//! let tokens = tokenize("if(x<1){y=2;}", &mut symbols);
//! assert_eq!(tokens[0].kind, TokenKind::ReservedWord);
//! assert!(symbols.contains("y"));
//!
//! let tree = build_tree(&tokens);
//! assert_eq!(tree.child_labels(0), vec!["if", "(", "x", "<", "1", ")", "{"]);
//! ```

pub mod constants;
pub mod diagnostics;
pub mod lexer;
pub mod session;
pub mod symbols;
pub mod tree;
pub mod ui;
