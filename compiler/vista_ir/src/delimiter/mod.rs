//! Delimiter configuration for template lexing.
//!
//! Three delimiter families are configurable per template: directives,
//! sanitized tags and unsanitized tags. The raw-code family is fixed and
//! exposed as constants. The lexer only ever reads delimiters through the
//! [`DelimiterSource`] trait, so a host can back it with whatever template
//! object it already has.

use std::fmt;

use thiserror::Error;

/// Long raw-code open marker.
pub const RAW_CODE_OPEN: &str = "<?php";
/// Short raw-code open marker.
pub const RAW_CODE_SHORT_OPEN: &str = "<?";
/// Raw-code close marker. Optional: EOF also ends a raw-code block.
pub const RAW_CODE_CLOSE: &str = "?>";

/// The configurable delimiter families.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DelimiterKind {
    Directive,
    SanitizedTag,
    UnsanitizedTag,
}

impl DelimiterKind {
    pub const ALL: [DelimiterKind; 3] = [
        DelimiterKind::Directive,
        DelimiterKind::SanitizedTag,
        DelimiterKind::UnsanitizedTag,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            DelimiterKind::Directive => "directive",
            DelimiterKind::SanitizedTag => "sanitized tag",
            DelimiterKind::UnsanitizedTag => "unsanitized tag",
        }
    }
}

impl fmt::Display for DelimiterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejected delimiter configuration.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DelimiterError {
    #[error("open delimiter must not be empty")]
    EmptyOpen,
    #[error("close delimiter must not be empty")]
    EmptyClose,
    /// Textual form was not `OPEN,CLOSE` or `OPEN CLOSE`.
    #[error("expected a delimiter pair like \"{{{{,}}}}\", found {0:?}")]
    Malformed(String),
}

/// An (open, close) pair of non-empty delimiter strings.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DelimiterPair {
    open: String,
    close: String,
}

impl DelimiterPair {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Result<Self, DelimiterError> {
        let open = open.into();
        let close = close.into();
        if open.is_empty() {
            return Err(DelimiterError::EmptyOpen);
        }
        if close.is_empty() {
            return Err(DelimiterError::EmptyClose);
        }
        Ok(DelimiterPair { open, close })
    }

    /// Parse `OPEN,CLOSE` (or whitespace separated `OPEN CLOSE`).
    ///
    /// The comma form wins when present, so delimiters containing spaces
    /// can still be written.
    pub fn parse(spec: &str) -> Result<Self, DelimiterError> {
        let (open, close) = spec
            .split_once(',')
            .or_else(|| spec.trim().split_once(char::is_whitespace))
            .ok_or_else(|| DelimiterError::Malformed(spec.to_owned()))?;
        Self::new(open.trim(), close.trim())
    }

    /// Built-in defaults, known to be non-empty.
    fn builtin(open: &str, close: &str) -> Self {
        DelimiterPair {
            open: open.to_owned(),
            close: close.to_owned(),
        }
    }

    #[inline]
    pub fn open(&self) -> &str {
        &self.open
    }

    #[inline]
    pub fn close(&self) -> &str {
        &self.close
    }
}

/// Capability that supplies delimiters for the template being lexed.
pub trait DelimiterSource {
    /// The pair for `kind`. Must not change during a lexing call.
    fn delimiters(&self, kind: DelimiterKind) -> &DelimiterPair;
}

impl<T: DelimiterSource + ?Sized> DelimiterSource for &T {
    fn delimiters(&self, kind: DelimiterKind) -> &DelimiterPair {
        (**self).delimiters(kind)
    }
}

/// Concrete delimiter set for all three configurable families.
///
/// Defaults: directives `<% %>`, sanitized tags `{{ }}`, unsanitized tags
/// `{{! !}}`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Delimiters {
    directive: DelimiterPair,
    sanitized: DelimiterPair,
    unsanitized: DelimiterPair,
}

impl Default for Delimiters {
    fn default() -> Self {
        Delimiters {
            directive: DelimiterPair::builtin("<%", "%>"),
            sanitized: DelimiterPair::builtin("{{", "}}"),
            unsanitized: DelimiterPair::builtin("{{!", "!}}"),
        }
    }
}

impl Delimiters {
    pub fn get(&self, kind: DelimiterKind) -> &DelimiterPair {
        match kind {
            DelimiterKind::Directive => &self.directive,
            DelimiterKind::SanitizedTag => &self.sanitized,
            DelimiterKind::UnsanitizedTag => &self.unsanitized,
        }
    }

    pub fn set(&mut self, kind: DelimiterKind, pair: DelimiterPair) {
        match kind {
            DelimiterKind::Directive => self.directive = pair,
            DelimiterKind::SanitizedTag => self.sanitized = pair,
            DelimiterKind::UnsanitizedTag => self.unsanitized = pair,
        }
    }

    #[must_use]
    pub fn with_directive(mut self, pair: DelimiterPair) -> Self {
        self.directive = pair;
        self
    }

    #[must_use]
    pub fn with_sanitized(mut self, pair: DelimiterPair) -> Self {
        self.sanitized = pair;
        self
    }

    #[must_use]
    pub fn with_unsanitized(mut self, pair: DelimiterPair) -> Self {
        self.unsanitized = pair;
        self
    }
}

impl DelimiterSource for Delimiters {
    fn delimiters(&self, kind: DelimiterKind) -> &DelimiterPair {
        self.get(kind)
    }
}
