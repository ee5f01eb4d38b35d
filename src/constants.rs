// Fixed names and layout values shared by the lexer, tree and output code

/// Identifier-shaped words that are classified as reserved.
pub const RESERVED_WORDS: [&str; 6] = ["if", "else", "while", "return", "int", "float"];

/// Operator table. The two-character entries other than `==` are never
/// produced: only `=` gets lookahead.
pub const OPERATORS: [&str; 10] = ["+", "-", "*", "/", ">", "<", "<=", ">=", "==", "!="];

pub const DELIMITERS: [char; 6] = ['(', ')', '{', '}', ';', ','];

/// Label of the synthetic root node
pub const ROOT_LABEL: &str = "Programa";

/// Spaces per depth level when printing a tree
pub const TREE_INDENT: usize = 4;

/// Default output path for the symbol table
pub const SYMBOL_TABLE_FILE: &str = "tabla_simbolos.txt";

/// Width of the left-aligned name column in the symbol table file
pub const SYMBOL_NAME_WIDTH: usize = 20;
