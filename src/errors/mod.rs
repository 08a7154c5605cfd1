//! Error types for lexing.
//!
//! - `ErrorImpl` names what went wrong
//! - `Error` pairs it with the position it happened at
//! - `ErrorTip` carries an optional hint for diagnostics

pub mod errors;
