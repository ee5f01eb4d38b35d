// Integration tests for the lexer and symbol table

use minilex::lexer::{tokenize, Lexer, Token, TokenKind};
use minilex::symbols::SymbolTable;

fn pairs(tokens: &[Token]) -> Vec<(TokenKind, String)> {
    tokens.iter().map(|t| (t.kind, t.text.clone())).collect()
}

fn expected(items: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    items.iter().map(|(k, s)| (*k, s.to_string())).collect()
}

#[test]
fn test_if_block() {
    use TokenKind::*;

    let mut symbols = SymbolTable::new();
    let tokens = tokenize("if(x<1){y=2;}", &mut symbols);

    assert_eq!(
        pairs(&tokens),
        expected(&[
            (ReservedWord, "if"),
            (Delimiter, "("),
            (Identifier, "x"),
            (Operator, "<"),
            (Number, "1"),
            (Delimiter, ")"),
            (Delimiter, "{"),
            (Identifier, "y"),
            (Assignment, "="),
            (Number, "2"),
            (Delimiter, ";"),
            (Delimiter, "}"),
        ])
    );
}

#[test]
fn test_comparisons_other_than_equality_are_split() {
    use TokenKind::*;

    let mut symbols = SymbolTable::new();

    assert_eq!(
        pairs(&tokenize("x<=1", &mut symbols)),
        expected(&[(Identifier, "x"), (Operator, "<"), (Assignment, "="), (Number, "1")])
    );
    assert_eq!(
        pairs(&tokenize("x>=1", &mut symbols)),
        expected(&[(Identifier, "x"), (Operator, ">"), (Assignment, "="), (Number, "1")])
    );
    // `<` then `==`
    assert_eq!(
        pairs(&tokenize("a<==b", &mut symbols)),
        expected(&[(Identifier, "a"), (Operator, "<"), (Operator, "=="), (Identifier, "b")])
    );
}

#[test]
fn test_letter_runs_are_single_tokens() {
    let words = [
        "if", "else", "while", "return", "int", "float", "iff", "Int", "whilex", "abc", "z",
    ];

    for word in words {
        let mut symbols = SymbolTable::new();
        let tokens = tokenize(word, &mut symbols);

        assert_eq!(tokens.len(), 1, "input {:?}", word);
        assert_eq!(tokens[0].text, word);

        let reserved = ["if", "else", "while", "return", "int", "float"].contains(&word);
        if reserved {
            assert_eq!(tokens[0].kind, TokenKind::ReservedWord, "input {:?}", word);
            assert!(symbols.is_empty());
        } else {
            assert_eq!(tokens[0].kind, TokenKind::Identifier, "input {:?}", word);
            assert_eq!(symbols.len(), 1);
            assert!(symbols.contains(word));
        }
    }
}

#[test]
fn test_digit_runs_are_single_numbers() {
    for digits in ["0", "7", "42", "000123", "98765432109876543210"] {
        let mut symbols = SymbolTable::new();
        let tokens = tokenize(digits, &mut symbols);

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, digits);
    }
}

#[test]
fn test_retokenizing_is_idempotent() {
    let source = "while(count<10){count=count+1;total=total*count;}";
    let mut symbols = SymbolTable::new();

    let first = tokenize(source, &mut symbols);
    let after_first = symbols.len();
    let second = tokenize(source, &mut symbols);

    assert_eq!(first, second);
    assert_eq!(symbols.len(), after_first);
    assert_eq!(symbols.len(), 2);
}

#[test]
fn test_malformed_input_is_dropped() {
    let mut symbols = SymbolTable::new();
    let mut lexer = Lexer::new("a && b || !c");
    let tokens = lexer.tokenize(&mut symbols);

    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
    assert_eq!(lexer.diagnostics().len(), 5);
}

#[test]
fn test_empty_and_blank_input() {
    let mut symbols = SymbolTable::new();

    assert!(tokenize("", &mut symbols).is_empty());
    assert!(tokenize(" \t\n ", &mut symbols).is_empty());
}

#[test]
fn test_every_delimiter_and_operator() {
    let mut symbols = SymbolTable::new();
    let tokens = tokenize("(){};,+-*/<>", &mut symbols);

    let delimiters = tokens.iter().filter(|t| t.kind == TokenKind::Delimiter).count();
    let operators = tokens.iter().filter(|t| t.kind == TokenKind::Operator).count();
    assert_eq!(delimiters, 6);
    assert_eq!(operators, 6);
}
