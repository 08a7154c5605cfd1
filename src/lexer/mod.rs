//! Lexical analysis for the BASIC dialect.
//!
//! This module contains the lexer that turns source text into a lazy,
//! forward-only stream of tokens. It handles:
//!
//! - Normalisation: horizontal whitespace and `/* */` comments are removed up front
//! - Recognition of keywords, identifiers, numbers, strings, operators and newlines
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
