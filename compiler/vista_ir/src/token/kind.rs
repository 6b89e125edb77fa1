//! Token kinds for Vista templates.

use std::fmt;

/// The closed set of token categories the lexer produces.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Literal text, or the trimmed body of a tag/directive.
    Expression,
    DirectiveName,
    DirectiveOpen,
    DirectiveClose,
    SanitizedTagOpen,
    SanitizedTagClose,
    UnsanitizedTagOpen,
    UnsanitizedTagClose,
    /// `<?php` or `<?`
    RawCodeOpen,
    /// `?>`
    RawCodeClose,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 10] = [
        TokenKind::Expression,
        TokenKind::DirectiveName,
        TokenKind::DirectiveOpen,
        TokenKind::DirectiveClose,
        TokenKind::SanitizedTagOpen,
        TokenKind::SanitizedTagClose,
        TokenKind::UnsanitizedTagOpen,
        TokenKind::UnsanitizedTagClose,
        TokenKind::RawCodeOpen,
        TokenKind::RawCodeClose,
    ];

    /// Stable name used in diagnostics and token dumps.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Expression => "T_EXPRESSION",
            TokenKind::DirectiveName => "T_DIRECTIVE_NAME",
            TokenKind::DirectiveOpen => "T_DIRECTIVE_OPEN",
            TokenKind::DirectiveClose => "T_DIRECTIVE_CLOSE",
            TokenKind::SanitizedTagOpen => "T_SANITIZED_TAG_OPEN",
            TokenKind::SanitizedTagClose => "T_SANITIZED_TAG_CLOSE",
            TokenKind::UnsanitizedTagOpen => "T_UNSANITIZED_TAG_OPEN",
            TokenKind::UnsanitizedTagClose => "T_UNSANITIZED_TAG_CLOSE",
            TokenKind::RawCodeOpen => "T_PHP_OPEN_TAG",
            TokenKind::RawCodeClose => "T_PHP_CLOSE_TAG",
        }
    }

    /// Returns `true` for kinds whose text is an opening delimiter.
    pub const fn is_open(self) -> bool {
        matches!(
            self,
            TokenKind::DirectiveOpen
                | TokenKind::SanitizedTagOpen
                | TokenKind::UnsanitizedTagOpen
                | TokenKind::RawCodeOpen
        )
    }

    /// Returns `true` for kinds whose text is a closing delimiter.
    pub const fn is_close(self) -> bool {
        matches!(
            self,
            TokenKind::DirectiveClose
                | TokenKind::SanitizedTagClose
                | TokenKind::UnsanitizedTagClose
                | TokenKind::RawCodeClose
        )
    }

    /// The closing kind that pairs with an opening kind.
    pub const fn closing_kind(self) -> Option<TokenKind> {
        match self {
            TokenKind::DirectiveOpen => Some(TokenKind::DirectiveClose),
            TokenKind::SanitizedTagOpen => Some(TokenKind::SanitizedTagClose),
            TokenKind::UnsanitizedTagOpen => Some(TokenKind::UnsanitizedTagClose),
            TokenKind::RawCodeOpen => Some(TokenKind::RawCodeClose),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
