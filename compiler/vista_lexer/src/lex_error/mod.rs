//! Lexer errors.
//!
//! Every variant is fatal: the lexing call returns the error and no tokens.
//! Messages name the line so a development error page can point at it.

use thiserror::Error;

/// Result of a lexing step.
pub type LexResult<T> = Result<T, LexError>;

/// A malformed template.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexError {
    /// A directive open delimiter was not followed by a name.
    #[error("Expected T_DIRECTIVE_NAME on line {line}, none found")]
    MissingDirectiveName { line: u32 },

    /// A directive's parenthesized expression never got back to depth zero.
    #[error("Unmatched parenthesis on line {line}")]
    UnbalancedParenthesis { line: u32 },

    /// A required close delimiter was not found.
    ///
    /// `found` is the input at the point the close was expected, at most as
    /// long as `expected` (empty at end of input).
    #[error("Expected {expected}, found {found} on line {line}")]
    UnterminatedDelimiter {
        expected: String,
        found: String,
        line: u32,
    },
}

impl LexError {
    pub fn missing_directive_name(line: u32) -> Self {
        LexError::MissingDirectiveName { line }
    }

    pub fn unbalanced_parenthesis(line: u32) -> Self {
        LexError::UnbalancedParenthesis { line }
    }

    pub fn unterminated_delimiter(
        expected: impl Into<String>,
        found: impl Into<String>,
        line: u32,
    ) -> Self {
        LexError::UnterminatedDelimiter {
            expected: expected.into(),
            found: found.into(),
            line,
        }
    }

    /// Line the error was detected on.
    pub fn line(&self) -> u32 {
        match self {
            LexError::MissingDirectiveName { line }
            | LexError::UnbalancedParenthesis { line }
            | LexError::UnterminatedDelimiter { line, .. } => *line,
        }
    }
}
