//! Token definitions shared by the lexer, the tree builder and the UI.

use std::fmt;

/// Line/column position of a token's first character (both 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Classification attached to every token.
///
/// `Unknown` is part of the classification scheme but the scanner never
/// assigns it: characters that match no rule are dropped instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    ReservedWord,
    Number,
    Operator,
    Delimiter,
    Unknown,
    Assignment,
}

impl TokenKind {
    /// Label used in the token listing and the symbol table file.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFICADOR",
            TokenKind::ReservedWord => "PALABRA_RESERVADA",
            TokenKind::Number => "NUMERO",
            TokenKind::Operator => "OPERADOR",
            TokenKind::Delimiter => "DELIMITADOR",
            TokenKind::Unknown => "DESCONOCIDO",
            TokenKind::Assignment => "ASIGNACION",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified lexeme together with the exact text it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Token {
            kind,
            text: text.into(),
            location,
        }
    }

    /// True for the `{` delimiter.
    pub fn opens_block(&self) -> bool {
        self.kind == TokenKind::Delimiter && self.text == "{"
    }

    /// True for the `}` delimiter.
    pub fn closes_block(&self) -> bool {
        self.kind == TokenKind::Delimiter && self.text == "}"
    }
}

/// One line of the token listing: `Token: <LABEL>, Valor: <text>`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token: {}, Valor: {}", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_listing_format() {
        let token = Token::new(TokenKind::ReservedWord, "while", SourceLocation::new(1, 1));
        assert_eq!(token.to_string(), "Token: PALABRA_RESERVADA, Valor: while");
    }

    #[test]
    fn test_block_delimiters() {
        let loc = SourceLocation::default();
        assert!(Token::new(TokenKind::Delimiter, "{", loc).opens_block());
        assert!(Token::new(TokenKind::Delimiter, "}", loc).closes_block());
        // Only delimiters count, whatever the text.
        assert!(!Token::new(TokenKind::Unknown, "{", loc).opens_block());
    }
}
