//! Integration tests for end-to-end tokenization.
//!
//! These tests drive the public API the way a parser would: pulling tokens
//! one at a time, draining whole programs, and reporting failures.

use basic_lexer::{
    errors::errors::ErrorImpl,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::{Token, TokenKind},
    },
    render_error,
};

const PROGRAM: &str = "/* count to ten */
LET n = 0
WHILE n < 10 REPEAT
    PRINT \"n is now\"
    PRINT n
    LET n = n + 1
ENDWHILE
";

fn kinds_and_text(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|token| (token.kind, token.text.as_str())).collect()
}

#[test]
fn test_tokenize_program() {
    let tokens = tokenize(PROGRAM, Some("count.bas".to_string())).unwrap();

    assert_eq!(
        kinds_and_text(&tokens),
        vec![
            (TokenKind::Newline, "\n"),
            (TokenKind::Identifier, "LETn"),
            (TokenKind::Assign, "="),
            (TokenKind::Number, "0"),
            (TokenKind::Newline, "\n"),
            (TokenKind::Identifier, "WHILEn"),
            (TokenKind::Lt, "<"),
            (TokenKind::Number, "10"),
            (TokenKind::Repeat, "REPEAT"),
            (TokenKind::Newline, "\n"),
            (TokenKind::Print, "PRINT"),
            (TokenKind::StringLiteral, "n is now"),
            (TokenKind::Newline, "\n"),
            (TokenKind::Identifier, "PRINTn"),
            (TokenKind::Newline, "\n"),
            (TokenKind::Identifier, "LETn"),
            (TokenKind::Assign, "="),
            (TokenKind::Identifier, "n"),
            (TokenKind::Plus, "+"),
            (TokenKind::Number, "1"),
            (TokenKind::Newline, "\n"),
            (TokenKind::EndWhile, "ENDWHILE"),
            (TokenKind::Newline, "\n"),
            (TokenKind::EndOfInput, "\0"),
        ]
    );
}

#[test]
fn test_line_oriented_program() {
    let source = "LABEL\nloop\nIF\nx\n>=\n10\nTHEN\nGOTO\nloop\nENDIF\nINPUT\nx";
    let tokens = tokenize(source, None).unwrap();
    let kinds: Vec<TokenKind> = tokens
        .iter()
        .map(|token| token.kind)
        .filter(|kind| *kind != TokenKind::Newline)
        .collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Label,
            TokenKind::Identifier,
            TokenKind::If,
            TokenKind::Identifier,
            TokenKind::GtEq,
            TokenKind::Number,
            TokenKind::Then,
            TokenKind::Goto,
            TokenKind::Identifier,
            TokenKind::EndIf,
            TokenKind::Input,
            TokenKind::Identifier,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_pull_tokens_one_at_a_time() {
    let mut lexer = Lexer::new("LABEL\nGOTO");

    let mut seen = vec![];
    while !lexer.is_exhausted() {
        seen.push(lexer.produce_next().unwrap().kind);
    }

    assert_eq!(
        seen,
        vec![
            TokenKind::Label,
            TokenKind::Newline,
            TokenKind::Goto,
            TokenKind::EndOfInput
        ]
    );
    assert_eq!(
        lexer.produce_next().unwrap_err().kind(),
        &ErrorImpl::ExhaustedIterator
    );
}

#[test]
fn test_fresh_lexer_rescans() {
    let first: Vec<_> = Lexer::new("PRINT\"a\"").collect();
    let second: Vec<_> = Lexer::new("PRINT\"a\"").collect();

    assert_eq!(first, second);
}

#[test]
fn test_lexer_as_iterator_adapters() {
    let numbers: Vec<String> = Lexer::new("1 + 2.5 * 3")
        .filter_map(Result::ok)
        .filter(|token| token.kind == TokenKind::Number)
        .map(|token| token.text)
        .collect();

    assert_eq!(numbers, vec!["1", "2.5", "3"]);
}

#[test]
fn test_report_error() {
    let source = "PRINT \"ok\"\nx = 4.\n";
    let lexer = Lexer::with_file(source, Some("broken.bas".to_string()));
    let normalized = lexer.source();

    let error = tokenize(source, Some("broken.bas".to_string())).unwrap_err();
    assert!(matches!(error.kind(), ErrorImpl::MalformedNumber { lexeme } if lexeme == "4."));

    let rendered = render_error(&error, &normalized);
    let mut lines = rendered.lines();

    assert_eq!(
        lines.next(),
        Some("Error: MalformedNumber (Invalid number: `4.`, expected a digit after the decimal point)")
    );
    assert_eq!(lines.next(), Some("-> broken.bas"));
    assert_eq!(lines.next(), Some("  |"));
    assert_eq!(lines.next(), Some("2 | x=4."));
    assert_eq!(lines.next(), Some("  | --^"));
    assert_eq!(lines.next(), None);
}
