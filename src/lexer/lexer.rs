use std::{iter::FusedIterator, rc::Rc};

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::{Captures, Regex};

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_SPAN, MK_TOKEN};

use super::tokens::{classify_keyword, classify_operator, Token, TokenKind, SENTINEL};

lazy_static! {
    // A string literal, a non-greedy block comment that may span lines (group 1),
    // or a run of whitespace other than `\r` and `\n` (group 2). Comment delimiters
    // may be split by such whitespace.
    static ref NORMALIZE_PATTERN: Regex = Regex::new(
        r#""[^"]*"|(/[^\S\r\n]*\*(?s:.*?)\*[^\S\r\n]*/)|([^\S\r\n]+)"#
    )
    .unwrap();
}

pub type LexResult<T> = Result<T, Error>;

/// A classification rule. Receives the character under the cursor (`None` past the end).
///
/// On a match the rule leaves the cursor on the last character it consumed.
pub type RuleHandler = fn(&mut Lexer, Option<char>) -> LexResult<Option<Token>>;

const RULES: [RuleHandler; 6] = [
    number_handler,
    symbol_handler,
    end_of_input_handler,
    newline_handler,
    string_handler,
    operator_handler,
];

#[derive(Debug, Clone)]
pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    terminated: bool,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: impl AsRef<str>) -> Lexer {
        Lexer::with_file(source, None)
    }

    pub fn with_file(source: impl AsRef<str>, file: Option<String>) -> Lexer {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from("shell")));
        let normalized = normalize(source.as_ref());

        debug!(
            "normalized {} ({} -> {} chars)",
            file_name,
            source.as_ref().chars().count(),
            normalized.chars().count()
        );

        Lexer {
            source: normalized.chars().collect(),
            pos: 0,
            terminated: false,
            file: file_name,
        }
    }

    /// The source after whitespace and comment removal.
    ///
    /// Token positions index into this text, and error lexemes are sliced from it, so an
    /// unterminated `"a b` is reported as `"ab`.
    pub fn source(&self) -> String {
        self.source.iter().collect()
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn is_exhausted(&self) -> bool {
        self.terminated
    }

    /// Produces the next token.
    ///
    /// The first call past the end of the source yields `EndOfInput`. Every call
    /// after that, or after any error, fails with `ExhaustedIterator`.
    pub fn produce_next(&mut self) -> LexResult<Token> {
        if self.terminated {
            return Err(Error::new(ErrorImpl::ExhaustedIterator, self.position_at(self.pos)));
        }

        let current = self.at();

        for rule in RULES {
            let outcome = rule(self, current);

            if let Err(error) = &outcome {
                debug!("lexing failed: {}", error);
                self.terminated = true;
            }

            if let Some(token) = outcome? {
                if token.kind == TokenKind::EndOfInput {
                    self.terminated = true;
                }

                self.advance_n(1);
                trace!("{} @ {}", token, token.span.start);
                return Ok(token);
            }
        }

        self.terminated = true;
        let error = Error::new(
            ErrorImpl::UnrecognisedCharacter { character: current.unwrap_or(SENTINEL) },
            self.position_at(self.pos),
        );
        debug!("lexing failed: {}", error);
        Err(error)
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn at(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn lexeme(&self, start: usize, end: usize) -> String {
        self.source[start..end].iter().collect()
    }

    fn position_at(&self, offset: usize) -> Position {
        Position(offset as u32, Rc::clone(&self.file))
    }
}

impl Iterator for Lexer {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.terminated {
            return None;
        }

        Some(self.produce_next())
    }
}

impl FusedIterator for Lexer {}

/// Deletes comments and whitespace in a single leftmost scan, keeping string literals intact.
///
/// Quotes inside a comment never pair up with quotes outside it.
fn normalize(source: &str) -> String {
    NORMALIZE_PATTERN
        .replace_all(source, |caps: &Captures| {
            if caps.get(1).is_some() || caps.get(2).is_some() {
                String::new()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

fn number_handler(lexer: &mut Lexer, current: Option<char>) -> LexResult<Option<Token>> {
    if !current.is_some_and(|c| c.is_ascii_digit()) {
        return Ok(None);
    }

    let start = lexer.pos;
    while lexer.peek().is_some_and(|c| c.is_ascii_digit()) {
        lexer.advance_n(1);
    }

    if lexer.peek() == Some('.') {
        lexer.advance_n(1);

        // At least one digit must follow the decimal point.
        if !lexer.peek().is_some_and(|c| c.is_ascii_digit()) {
            return Err(Error::new(
                ErrorImpl::MalformedNumber { lexeme: lexer.lexeme(start, lexer.pos + 1) },
                lexer.position_at(start),
            ));
        }

        while lexer.peek().is_some_and(|c| c.is_ascii_digit()) {
            lexer.advance_n(1);
        }
    }

    let text = lexer.lexeme(start, lexer.pos + 1);
    Ok(Some(MK_TOKEN!(TokenKind::Number, text, MK_SPAN!(&lexer.file, start, lexer.pos + 1))))
}

fn symbol_handler(lexer: &mut Lexer, current: Option<char>) -> LexResult<Option<Token>> {
    if !current.is_some_and(|c| c.is_alphabetic()) {
        return Ok(None);
    }

    let start = lexer.pos;
    while lexer.peek().is_some_and(|c| c.is_alphanumeric()) {
        lexer.advance_n(1);
    }

    let text = lexer.lexeme(start, lexer.pos + 1);
    let kind = classify_keyword(&text).unwrap_or(TokenKind::Identifier);

    Ok(Some(MK_TOKEN!(kind, text, MK_SPAN!(&lexer.file, start, lexer.pos + 1))))
}

fn end_of_input_handler(lexer: &mut Lexer, _current: Option<char>) -> LexResult<Option<Token>> {
    if !lexer.at_eof() {
        return Ok(None);
    }

    Ok(Some(MK_TOKEN!(
        TokenKind::EndOfInput,
        SENTINEL.to_string(),
        MK_SPAN!(&lexer.file, lexer.pos, lexer.pos)
    )))
}

fn newline_handler(lexer: &mut Lexer, current: Option<char>) -> LexResult<Option<Token>> {
    let start = lexer.pos;

    match current {
        Some('\n') => {}
        Some('\r') if lexer.peek() == Some('\n') => lexer.advance_n(1),
        _ => return Ok(None),
    }

    let text = lexer.lexeme(start, lexer.pos + 1);
    Ok(Some(MK_TOKEN!(TokenKind::Newline, text, MK_SPAN!(&lexer.file, start, lexer.pos + 1))))
}

fn string_handler(lexer: &mut Lexer, current: Option<char>) -> LexResult<Option<Token>> {
    if current != Some('"') {
        return Ok(None);
    }

    let start = lexer.pos;
    let Some(length) = lexer.source[start + 1..].iter().position(|c| *c == '"') else {
        return Err(Error::new(
            ErrorImpl::UnterminatedString { lexeme: lexer.lexeme(start, lexer.source.len()) },
            lexer.position_at(start),
        ));
    };

    let text = lexer.lexeme(start + 1, start + 1 + length);
    // Leave the cursor on the closing quote.
    lexer.advance_n(length + 1);

    Ok(Some(MK_TOKEN!(TokenKind::StringLiteral, text, MK_SPAN!(&lexer.file, start, lexer.pos + 1))))
}

fn operator_handler(lexer: &mut Lexer, current: Option<char>) -> LexResult<Option<Token>> {
    let Some(first) = current else {
        return Ok(None);
    };

    let start = lexer.pos;

    // Two-character operators win over their one-character prefixes.
    if let Some(second) = lexer.peek() {
        let pair = String::from_iter([first, second]);

        if let Some(kind) = classify_operator(&pair) {
            lexer.advance_n(1);
            return Ok(Some(MK_TOKEN!(kind, pair, MK_SPAN!(&lexer.file, start, start + 2))));
        }
    }

    let single = first.to_string();
    Ok(classify_operator(&single)
        .map(|kind| MK_TOKEN!(kind, single, MK_SPAN!(&lexer.file, start, start + 1))))
}

pub fn tokenize(source: impl AsRef<str>, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::with_file(source, file).collect()
}
