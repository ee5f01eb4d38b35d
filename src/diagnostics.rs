//! Anomalies noticed while lexing or building the tree.
//!
//! None of these stop processing: the offending input is dropped (or, for
//! braces, tolerated) exactly as if no diagnostic had been recorded. They
//! exist so that front ends can tell the user what was ignored.

use crate::lexer::token::SourceLocation;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A non-whitespace character that matches no token rule.
    UnrecognizedCharacter { ch: char, location: SourceLocation },

    /// `<=`, `>=` or `!=` written in the source. Only `==` is scanned as a
    /// two-character operator, so these come out as separate pieces.
    SplitOperator {
        text: String,
        location: SourceLocation,
    },

    /// `{` left open at the end of input, or `}` with nothing open.
    UnbalancedBraces { unclosed: usize, stray: usize },
}

impl Diagnostic {
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            Diagnostic::UnrecognizedCharacter { location, .. }
            | Diagnostic::SplitOperator { location, .. } => Some(*location),
            Diagnostic::UnbalancedBraces { .. } => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnrecognizedCharacter { ch, location } => {
                write!(f, "{}: ignored character {:?}", location, ch)
            }
            Diagnostic::SplitOperator { text, location } => {
                write!(f, "{}: '{}' is not a single operator and was split", location, text)
            }
            Diagnostic::UnbalancedBraces { unclosed, stray } => {
                write!(f, "unbalanced braces: {} unclosed '{{', {} stray '}}'", unclosed, stray)
            }
        }
    }
}
