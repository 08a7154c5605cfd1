#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A character offset into a lexer's normalized source, tagged with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding the character at `position`.
///
/// Returns the 1-based line number, the line text (newline included) and the
/// 0-based column. The offset one past the last character resolves to the end
/// of the final line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line: Option<&str> = None;

    for line in source.split_inclusive('\n') {
        let end = start + line.chars().count();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last_line = Some(line);
        start = end;
        line_number += 1;
    }

    if pos != start {
        return None;
    }

    match last_line {
        Some(line) if !line.ends_with('\n') => {
            Some((line_number - 1, line.to_string(), line.chars().count()))
        }
        _ => Some((line_number, String::new(), 0)),
    }
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
        -> file.bas
           |
        20 | LETa=#
           | ------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) =
        get_line_at_position(source, position.0).unwrap_or((1, String::new(), 0));

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    let arrows = line_pos + 1;

    let header = match error.get_tip() {
        ErrorTip::None => format!("Error: {}", error.get_error_name()),
        tip => format!("Error: {} ({})", error.get_error_name(), tip),
    };

    [
        header,
        format!("-> {}", position.1),
        format!("{:>padding$}", "|"),
        format!("{} | {}", line_string, line_text.trim_end_matches(['\r', '\n'])),
        format!("{:>padding$} {:->arrows$}", "|", "^"),
    ]
    .join("\n")
}
