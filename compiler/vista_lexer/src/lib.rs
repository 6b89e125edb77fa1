//! Lexer for Vista templates.
//!
//! Turns template source into a flat [`TokenList`] for the parser. Four
//! delimiter families are recognised:
//!
//! | Family      | Default delimiters | Tokens                                   |
//! |-------------|--------------------|------------------------------------------|
//! | directive   | `<%` `%>`          | open, name, optional expression, close   |
//! | sanitized   | `{{` `}}`          | open, optional expression, close         |
//! | unsanitized | `{{!` `!}}`        | open, optional expression, close         |
//! | raw code    | `<?php`/`<?` `?>`  | open, optional expression, optional close|
//!
//! Everything outside a delimiter pair is literal `Expression` text. A
//! backslash directly before an open delimiter escapes it: the backslash is
//! dropped and the delimiter stays literal text.
//!
//! Lexing is a single pass with no recovery. The first malformed construct
//! aborts the call with a [`LexError`].
//!
//! ```
//! use vista_ir::{Delimiters, TokenKind};
//!
//! let tokens = vista_lexer::lex(&Delimiters::default(), "Hello {{name}}!").unwrap();
//! assert_eq!(
//!     tokens.kinds(),
//!     [
//!         TokenKind::Expression,
//!         TokenKind::SanitizedTagOpen,
//!         TokenKind::Expression,
//!         TokenKind::SanitizedTagClose,
//!         TokenKind::Expression,
//!     ]
//! );
//! ```

mod candidates;
mod delimited;
mod directive;
mod lex_error;
mod scanner;

pub use lex_error::{LexError, LexResult};

use tracing::debug;
use vista_ir::{DelimiterSource, TokenList};

use crate::scanner::ScanState;

/// Template lexer.
///
/// Holds no scan state between calls: every [`lex`](Lexer::lex) builds a
/// fresh cursor, line counter and token list, so one `Lexer` can be shared
/// freely, across threads included.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lexer;

impl Lexer {
    pub fn new() -> Self {
        Lexer
    }

    /// Lex `input` using the delimiters supplied by `delimiters`.
    ///
    /// Empty input yields an empty token list.
    pub fn lex(&self, delimiters: &impl DelimiterSource, input: &str) -> LexResult<TokenList> {
        let tokens = ScanState::new(delimiters, input).run()?;
        debug!(
            input_len = input.len(),
            tokens = tokens.len(),
            "lexed template"
        );
        Ok(tokens)
    }
}

/// Lex `input` with a throwaway [`Lexer`].
pub fn lex(delimiters: &impl DelimiterSource, input: &str) -> LexResult<TokenList> {
    Lexer::new().lex(delimiters, input)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
