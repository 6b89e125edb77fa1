//! Ordered open-delimiter candidates for the top-level scan.
//!
//! Open delimiters may be textual prefixes of each other (`{{` and `{{!`,
//! `<?` and `<?php`). Candidates are therefore tried longest first; ties
//! keep declaration order (directive, sanitized, unsanitized, `<?php`,
//! `<?`).

use vista_ir::{
    DelimiterKind, DelimiterSource, TokenKind, RAW_CODE_CLOSE, RAW_CODE_OPEN, RAW_CODE_SHORT_OPEN,
};

/// Which sub-scanner handles a matched open delimiter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Family {
    Directive,
    SanitizedTag,
    UnsanitizedTag,
    RawCode,
}

/// Everything a delimited sub-scanner needs to know about its family.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Statement<'d> {
    pub family: Family,
    pub open_kind: TokenKind,
    pub open: &'d str,
    pub close_kind: TokenKind,
    pub close: &'d str,
    /// EOF may stand in for the close delimiter.
    pub close_optional: bool,
}

/// Length-sorted candidate list, built once per lexing call.
#[derive(Clone, Debug)]
pub(crate) struct Candidates<'d> {
    statements: Vec<Statement<'d>>,
    /// First byte of every open delimiter, for the literal fast path.
    lead_bytes: Vec<u8>,
}

impl<'d> Candidates<'d> {
    pub fn new(source: &'d impl DelimiterSource) -> Self {
        let directive = source.delimiters(DelimiterKind::Directive);
        let sanitized = source.delimiters(DelimiterKind::SanitizedTag);
        let unsanitized = source.delimiters(DelimiterKind::UnsanitizedTag);

        let mut statements = vec![
            Statement {
                family: Family::Directive,
                open_kind: TokenKind::DirectiveOpen,
                open: directive.open(),
                close_kind: TokenKind::DirectiveClose,
                close: directive.close(),
                close_optional: false,
            },
            Statement {
                family: Family::SanitizedTag,
                open_kind: TokenKind::SanitizedTagOpen,
                open: sanitized.open(),
                close_kind: TokenKind::SanitizedTagClose,
                close: sanitized.close(),
                close_optional: false,
            },
            Statement {
                family: Family::UnsanitizedTag,
                open_kind: TokenKind::UnsanitizedTagOpen,
                open: unsanitized.open(),
                close_kind: TokenKind::UnsanitizedTagClose,
                close: unsanitized.close(),
                close_optional: false,
            },
            raw_code(RAW_CODE_OPEN),
            raw_code(RAW_CODE_SHORT_OPEN),
        ];

        // Stable: equal lengths keep declaration order.
        statements.sort_by_key(|s| std::cmp::Reverse(s.open.len()));

        let mut lead_bytes: Vec<u8> = statements
            .iter()
            .filter_map(|s| s.open.as_bytes().first().copied())
            .collect();
        lead_bytes.sort_unstable();
        lead_bytes.dedup();

        Candidates {
            statements,
            lead_bytes,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Statement<'d> {
        self.statements[index]
    }

    /// Returns `true` if some open delimiter starts with `byte`.
    #[inline]
    pub fn may_open_at(&self, byte: u8) -> bool {
        self.lead_bytes.binary_search(&byte).is_ok()
    }
}

fn raw_code(open: &'static str) -> Statement<'static> {
    Statement {
        family: Family::RawCode,
        open_kind: TokenKind::RawCodeOpen,
        open,
        close_kind: TokenKind::RawCodeClose,
        close: RAW_CODE_CLOSE,
        close_optional: true,
    }
}
