//! Symbol table filled in by the lexer
//!
//! The table maps identifier text to its classification. It is owned by the
//! caller and passed to every tokenizer call, so entries accumulate for as
//! long as the caller keeps the table around.

use crate::constants::SYMBOL_NAME_WIDTH;
use crate::lexer::TokenKind;
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: FxHashMap<String, TokenKind>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` as an identifier.
    ///
    /// Returns false if the name was already present; the existing entry is
    /// left untouched.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(name.to_string(), TokenKind::Identifier);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<TokenKind> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by name
    pub fn sorted(&self) -> Vec<(&str, TokenKind)> {
        let mut entries: Vec<(&str, TokenKind)> = self
            .entries
            .iter()
            .map(|(name, kind)| (name.as_str(), *kind))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Write the table in its two-column text layout.
    ///
    /// ```text
    /// ====== Tabla de Simbolos ======
    /// Identificador       Tipo
    /// ================================
    /// count               IDENTIFICADOR
    /// ```
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "====== Tabla de Simbolos ======")?;
        writeln!(out, "{:<width$}Tipo", "Identificador", width = SYMBOL_NAME_WIDTH)?;
        writeln!(out, "================================")?;
        for (name, _) in self.sorted() {
            // Every entry is an identifier; the column is fixed text.
            writeln!(
                out,
                "{:<width$}{}",
                name,
                TokenKind::Identifier.label(),
                width = SYMBOL_NAME_WIDTH
            )?;
        }
        Ok(())
    }

    /// Write the table to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(&mut out)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_if_absent() {
        let mut table = SymbolTable::new();

        assert!(table.insert("x"));
        assert!(!table.insert("x"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("x"), Some(TokenKind::Identifier));
    }

    #[test]
    fn test_file_layout() {
        let mut table = SymbolTable::new();
        table.insert("zeta");
        table.insert("alpha");

        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = "\
====== Tabla de Simbolos ======
Identificador       Tipo
================================
alpha               IDENTIFICADOR
zeta                IDENTIFICADOR
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_long_name_is_not_truncated() {
        let mut table = SymbolTable::new();
        table.insert("averyveryverylongname1");

        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.ends_with("averyveryverylongname1IDENTIFICADOR\n"));
    }
}
