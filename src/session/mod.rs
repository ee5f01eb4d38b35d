//! Editing session: source text, last token stream, symbol table and tree
//!
//! A [`Session`] holds what the front ends need between actions:
//!
//! 1. [`Session::set_source`] replaces the text being analysed.
//! 2. [`Session::analyze`] tokenizes it. The symbol table is kept across
//!    calls, so identifiers from every analysis accumulate.
//! 3. [`Session::build_tree`] groups the tokens of the *last* analysis. If no
//!    analysis ran yet the tree holds only its root.
//! 4. [`Session::save_symbols`] writes the symbol table file.
//!
//! Editing the source does not clear the previous tokens; the tree is always
//! built from whatever was analysed last.

pub mod errors;

use crate::constants::SYMBOL_TABLE_FILE;
use crate::diagnostics::Diagnostic;
use crate::lexer::{Lexer, Token};
use crate::symbols::SymbolTable;
use crate::tree::{Nesting, SyntaxTree, TreeBuilder};
use errors::SessionError;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Session {
    source: String,
    tokens: Vec<Token>,
    symbols: SymbolTable,
    tree: Option<SyntaxTree>,
    diagnostics: Vec<Diagnostic>,
    nesting: Nesting,
    symbols_path: PathBuf,
}

impl Session {
    pub fn new() -> Self {
        Session {
            source: String::new(),
            tokens: Vec::new(),
            symbols: SymbolTable::new(),
            tree: None,
            diagnostics: Vec::new(),
            nesting: Nesting::default(),
            symbols_path: PathBuf::from(SYMBOL_TABLE_FILE),
        }
    }

    pub fn with_nesting(mut self, nesting: Nesting) -> Self {
        self.nesting = nesting;
        self
    }

    pub fn with_symbols_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.symbols_path = path.into();
        self
    }

    /// Start a session with the contents of `path` as source.
    pub fn from_file(path: &Path) -> Result<Self, SessionError> {
        let source = fs::read_to_string(path).map_err(|source| SessionError::ReadSource {
            path: path.to_path_buf(),
            source,
        })?;
        let mut session = Session::new();
        session.set_source(source);
        Ok(session)
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Tokenize the current source, replacing the previous token stream.
    pub fn analyze(&mut self) -> &[Token] {
        let mut lexer = Lexer::new(&self.source);
        self.tokens = lexer.tokenize(&mut self.symbols);
        self.diagnostics = lexer.into_diagnostics();
        &self.tokens
    }

    /// Build the tree from the last token stream.
    pub fn build_tree(&mut self) -> &SyntaxTree {
        let tree = TreeBuilder::new(self.nesting).build(&self.tokens);

        self.diagnostics
            .retain(|d| !matches!(d, Diagnostic::UnbalancedBraces { .. }));
        let balance = tree.brace_balance();
        if !balance.is_balanced() {
            self.diagnostics.push(Diagnostic::UnbalancedBraces {
                unclosed: balance.unclosed,
                stray: balance.stray,
            });
        }

        self.tree.insert(tree)
    }

    /// Write the symbol table to the configured path and return that path.
    pub fn save_symbols(&self) -> Result<&Path, SessionError> {
        self.symbols
            .save(&self.symbols_path)
            .map_err(|source| SessionError::SaveSymbols {
                path: self.symbols_path.clone(),
                source,
            })?;
        Ok(&self.symbols_path)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn tree(&self) -> Option<&SyntaxTree> {
        self.tree.as_ref()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn nesting(&self) -> Nesting {
        self.nesting
    }

    pub fn symbols_path(&self) -> &Path {
        &self.symbols_path
    }

    /// Token listing as printed after an analysis.
    pub fn token_listing(&self) -> String {
        let mut out = String::from("Tokens generados:\n");
        for token in &self.tokens {
            out.push_str(&token.to_string());
            out.push('\n');
        }
        out
    }

    /// Tree listing as printed after tree construction; empty if no tree was
    /// built yet.
    pub fn tree_listing(&self) -> String {
        match &self.tree {
            Some(tree) => format!("Arbol Sintactico:\n{}", tree.render()),
            None => String::new(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
