//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span over the lexer's normalized source

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            text: $text,
            span: $span,
        }
    };
}

/// Creates a Span from two character offsets, both tagged with the same file.
///
/// `$end` is exclusive.
#[macro_export]
macro_rules! MK_SPAN {
    ($file:expr, $start:expr, $end:expr) => {
        $crate::Span {
            start: $crate::Position($start as u32, std::rc::Rc::clone($file)),
            end: $crate::Position($end as u32, std::rc::Rc::clone($file)),
        }
    };
}
