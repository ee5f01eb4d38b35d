//! Lexical analysis
//!
//! - [`token`]: token kinds, tokens and source locations
//! - [`lexer`]: the scanner (source text → tokens)
//!
//! # Recognized Subset
//!
//! - Reserved words: `if`, `else`, `while`, `return`, `int`, `float`
//! - Identifiers: an ASCII letter followed by ASCII letters or digits
//! - Numbers: runs of decimal digits
//! - Operators: `+ - * / < >` and `==`
//! - Assignment: `=`
//! - Delimiters: `( ) { } ; ,`
//!
//! Anything else is skipped.

#[allow(clippy::module_inception)]
pub mod lexer;
pub mod token;

pub use lexer::{is_reserved_word, tokenize, Lexer};
pub use token::{SourceLocation, Token, TokenKind};
