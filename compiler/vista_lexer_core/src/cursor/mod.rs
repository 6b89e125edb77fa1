//! Forward-only cursor over template source.
//!
//! Every read goes through a [`Window`], so repeated "does the input here
//! start with X" checks at a slowly advancing position stay cheap. The
//! cursor only ever stands on UTF-8 character boundaries: it advances by
//! whole characters or by the length of text it just matched.

use crate::window::floor_char_boundary;
use crate::Window;

/// Byte cursor over a template, backed by a [`Window`].
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    window: Window<'a>,
    /// Current read position (byte offset into the source).
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor {
            window: Window::new(source),
            pos: 0,
        }
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.window.base().len()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len()
    }

    /// Unscanned input from the current position to end of source.
    #[inline]
    pub fn rest(&mut self) -> &'a str {
        self.window.fetch(self.pos, None)
    }

    /// Up to `len` bytes of input at the current position.
    ///
    /// Shorter than `len` near end of input, and never splits a character.
    pub fn peek_str(&mut self, len: usize) -> &'a str {
        self.window.fetch(self.pos, Some(len))
    }

    /// Byte at the current position, `None` at EOF.
    #[inline]
    pub fn current_byte(&mut self) -> Option<u8> {
        self.rest().as_bytes().first().copied()
    }

    /// Character at the current position, `None` at EOF.
    #[inline]
    pub fn current(&mut self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns `true` if the input at the cursor starts with `expected`.
    #[inline]
    pub fn matches(&mut self, expected: &str) -> bool {
        self.rest().starts_with(expected)
    }

    /// Returns `true` if the input at the cursor is `\` followed by `expected`.
    pub fn matches_escaped(&mut self, expected: &str) -> bool {
        self.rest()
            .strip_prefix('\\')
            .is_some_and(|after| after.starts_with(expected))
    }

    /// Consume `expected` if the input at the cursor starts with it.
    pub fn eat(&mut self, expected: &str) -> bool {
        if self.matches(expected) {
            self.pos += expected.len();
            true
        } else {
            false
        }
    }

    /// Consume and return one character, `None` at EOF.
    pub fn advance_char(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advance by `n` bytes, clamped to end of source.
    ///
    /// # Contract
    ///
    /// `n` should come from text just matched at the cursor so the new
    /// position is a character boundary. Mid-character targets are clamped
    /// back to the start of that character.
    pub fn advance_n(&mut self, n: usize) {
        let target = self.pos.saturating_add(n);
        self.pos = floor_char_boundary(self.window.base(), target);
    }

    /// Consume bytes while `pred` holds and return the consumed text.
    ///
    /// `pred` is only ever asked about ASCII bytes; scanning stops at the
    /// first non-ASCII byte so the consumed text is always valid UTF-8.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest
            .bytes()
            .position(|b| !b.is_ascii() || !pred(b))
            .unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Consume everything up to the next occurrence of `needle`, or to EOF.
    ///
    /// The needle itself is left unconsumed. Uses `memchr::memmem` instead
    /// of testing every position.
    pub fn eat_until(&mut self, needle: &str) -> &'a str {
        let rest = self.rest();
        let len = memchr::memmem::find(rest.as_bytes(), needle.as_bytes()).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }
}
