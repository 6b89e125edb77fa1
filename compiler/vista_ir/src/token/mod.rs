//! Token types for the Vista lexer.
//!
//! A template lexes into a flat sequence of [`Token`]s. Literal text and
//! the bodies of tags/directives become `Expression` tokens; delimiters get
//! their own open/close kinds so the parser never has to re-inspect text.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

/// A token with the line it starts on.
///
/// `text` is the exact matched substring. Expression bodies inside tags and
/// directives are trimmed; literal text outside tags is kept verbatim.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based line of the token's first character.
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} @ line {}",
            self.kind.display_name(),
            self.text,
            self.line
        )
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    // String (24) + u32 line + 1-byte kind, padded to 8.
    crate::static_assert_size!(Token, 32);
    crate::static_assert_size!(TokenKind, 1);
}
