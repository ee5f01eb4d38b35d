//! Errors raised by the I/O edge of a session
//!
//! Lexing and tree building cannot fail; only reading source files and
//! writing the symbol table can.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum SessionError {
    /// The source file could not be read
    ReadSource { path: PathBuf, source: io::Error },

    /// The symbol table could not be written
    SaveSymbols { path: PathBuf, source: io::Error },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::ReadSource { path, source } => {
                write!(f, "cannot read '{}': {}", path.display(), source)
            }
            SessionError::SaveSymbols { path, source } => {
                write!(f, "cannot write symbol table to '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::ReadSource { source, .. } | SessionError::SaveSymbols { source, .. } => {
                Some(source)
            }
        }
    }
}
