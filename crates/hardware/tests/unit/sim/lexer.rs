//! Tokenizer.

use pretty_assertions::assert_eq;

use y86_core::common::LoadError;
use y86_core::sim::lexer::{Lexer, TokenKind};

fn kinds(src: &str) -> Vec<(String, TokenKind, usize)> {
    Lexer::new(src)
        .map(|t| t.map(|t| (t.text.to_owned(), t.kind, t.line)))
        .collect::<Result<_, _>>()
        .unwrap()
}

#[test]
fn splits_on_any_whitespace() {
    assert_eq!(
        kinds(".size\t20\r\n.text 0  10\n"),
        vec![
            (".size".to_owned(), TokenKind::Directive, 1),
            ("20".to_owned(), TokenKind::Word, 1),
            (".text".to_owned(), TokenKind::Directive, 2),
            ("0".to_owned(), TokenKind::Word, 2),
            ("10".to_owned(), TokenKind::Word, 2),
        ]
    );
}

#[test]
fn quoted_strings_keep_spaces_and_tabs() {
    let toks = kinds(".string 4 \"a b\tc\"\n.bss");
    assert_eq!(toks[2], ("a b\tc".to_owned(), TokenKind::Quoted, 1));
    assert_eq!(toks[3].1, TokenKind::Directive);
}

#[test]
fn quoted_string_runs_to_last_closing_quote_on_its_line() {
    let toks = kinds(".string 4 \"a \"b\" c\"\n.bss");
    assert_eq!(toks[2], ("a \"b\" c".to_owned(), TokenKind::Quoted, 1));
    assert_eq!(toks[3], (".bss".to_owned(), TokenKind::Directive, 2));
}

#[test]
fn empty_string() {
    assert_eq!(kinds("\"\"")[0].0, "");
}

#[test]
fn unterminated_string_is_an_error() {
    let result: Result<Vec<_>, _> = Lexer::new("\n.string 0 \"abc").collect();
    assert!(matches!(result, Err(LoadError::UnterminatedString { line: 2 })));
}

#[test]
fn empty_input_has_no_tokens() {
    assert_eq!(Lexer::new(" \n\t ").count(), 0);
}
