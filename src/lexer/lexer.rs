//! Scanner turning a source string into [`Token`]s
//!
//! The scan is a single left-to-right pass that never backtracks. Characters
//! that fit no rule are dropped from the output; the lexer keeps a
//! [`Diagnostic`] for each of them so callers can report what was ignored.

use super::token::{SourceLocation, Token, TokenKind};
use crate::constants::{DELIMITERS, OPERATORS, RESERVED_WORDS};
use crate::diagnostics::Diagnostic;
use crate::symbols::SymbolTable;

/// Returns true if `word` is one of the reserved words.
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

fn is_single_char_operator(ch: char) -> bool {
    let mut buf = [0u8; 4];
    OPERATORS.contains(&&*ch.encode_utf8(&mut buf))
}

/// Lexer for the C-like subset
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire input.
    ///
    /// Every identifier found is added to `symbols` unless it is already
    /// there. Reserved words never are.
    pub fn tokenize(&mut self, symbols: &mut SymbolTable) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            let loc = self.current_location();
            self.advance();

            if ch.is_ascii_alphabetic() {
                let token = self.word(ch, loc);
                if token.kind == TokenKind::Identifier {
                    symbols.insert(&token.text);
                }
                tokens.push(token);
            } else if ch.is_ascii_digit() {
                tokens.push(self.number(ch, loc));
            } else if ch == '=' {
                tokens.push(self.equals(loc));
            } else if is_single_char_operator(ch) {
                self.note_split_operator(ch, loc);
                tokens.push(Token::new(TokenKind::Operator, ch, loc));
            } else if DELIMITERS.contains(&ch) {
                tokens.push(Token::new(TokenKind::Delimiter, ch, loc));
            } else if ch == '!' && self.peek() == Some('=') {
                // `!` alone is not an operator; it is dropped and the `=`
                // is scanned on its own.
                self.note_split_operator(ch, loc);
            } else if !ch.is_whitespace() {
                self.diagnostics
                    .push(Diagnostic::UnrecognizedCharacter { ch, location: loc });
            }
        }

        tokens
    }

    /// Anomalies recorded by the last call to [`Lexer::tokenize`].
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the lexer, keeping only its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Letter followed by letters/digits: reserved word or identifier
    fn word(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut word = String::new();
        word.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = if is_reserved_word(&word) {
            TokenKind::ReservedWord
        } else {
            TokenKind::Identifier
        };
        Token::new(kind, word, loc)
    }

    /// Run of decimal digits. No sign, point or exponent.
    fn number(&mut self, first_digit: char, loc: SourceLocation) -> Token {
        let mut digits = String::new();
        digits.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::Number, digits, loc)
    }

    /// `==` is an operator, a lone `=` is an assignment
    fn equals(&mut self, loc: SourceLocation) -> Token {
        if self.peek() == Some('=') {
            self.advance();
            Token::new(TokenKind::Operator, "==", loc)
        } else {
            Token::new(TokenKind::Assignment, "=", loc)
        }
    }

    fn note_split_operator(&mut self, ch: char, loc: SourceLocation) {
        if matches!(ch, '<' | '>' | '!') && self.peek() == Some('=') {
            self.diagnostics.push(Diagnostic::SplitOperator {
                text: format!("{}=", ch),
                location: loc,
            });
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Tokenize `source` against `symbols` in one call.
pub fn tokenize(source: &str, symbols: &mut SymbolTable) -> Vec<Token> {
    Lexer::new(source).tokenize(symbols)
}
