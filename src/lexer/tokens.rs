use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

/// Lexeme of the `EndOfInput` token, and the character reported past the end of the source.
pub const SENTINEL: char = '\0';

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("LABEL", TokenKind::Label);
        map.insert("GOTO", TokenKind::Goto);
        map.insert("PRINT", TokenKind::Print);
        map.insert("INPUT", TokenKind::Input);
        map.insert("LET", TokenKind::Let);
        map.insert("IF", TokenKind::If);
        map.insert("THEN", TokenKind::Then);
        map.insert("ENDIF", TokenKind::EndIf);
        map.insert("WHILE", TokenKind::While);
        map.insert("REPEAT", TokenKind::Repeat);
        map.insert("ENDWHILE", TokenKind::EndWhile);
        map
    };

    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Minus);
        map.insert("*", TokenKind::Star);
        map.insert("/", TokenKind::Slash);
        map.insert("<", TokenKind::Lt);
        map.insert(">", TokenKind::Gt);
        map.insert("<=", TokenKind::LtEq);
        map.insert(">=", TokenKind::GtEq);
        map.insert("=", TokenKind::Assign);
        map.insert("==", TokenKind::Eq);
        map.insert("!=", TokenKind::NotEq);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfInput,
    Newline,
    Number,
    Identifier,
    StringLiteral,

    // Keywords
    Label,
    Goto,
    Print,
    Input,
    Let,
    If,
    Then,
    EndIf,
    While,
    Repeat,
    EndWhile,

    // Operators
    Assign, // =
    Plus,
    Minus,
    Star,
    Slash,
    Eq,    // ==
    NotEq, // !=
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        KEYWORD_LOOKUP.values().any(|kind| kind == self)
    }

    pub fn is_operator(&self) -> bool {
        OPERATOR_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Returns the keyword spelled exactly `text`, if any. Matching is case-sensitive.
pub fn classify_keyword(text: &str) -> Option<TokenKind> {
    KEYWORD_LOOKUP.get(text).copied()
}

/// Returns the operator spelled exactly `text`, if any.
pub fn classify_operator(text: &str) -> Option<TokenKind> {
    OPERATOR_LOOKUP.get(text).copied()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Number | TokenKind::Identifier | TokenKind::StringLiteral => {
                write!(f, "{}({:?})", self.kind, self.text)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}
