//! Blank-run trimming and newline bookkeeping.
//!
//! Tag and directive bodies are reported trimmed, and their tokens carry
//! the line of their first non-blank character. Newlines that appear before
//! any content move the line counter before the token is emitted; newlines
//! after content are only applied once the token is out. [`NewlineSplit`]
//! captures exactly that split for a scanned body.

/// Bytes treated as blank when trimming bodies.
#[inline]
pub const fn is_blank_byte(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C' | b'\0')
}

/// `s` with leading and trailing blank bytes removed.
pub fn trim_blank(s: &str) -> &str {
    // Blank bytes are all ASCII, so byte positions are char boundaries.
    let bytes = s.as_bytes();
    let start = bytes
        .iter()
        .position(|&b| !is_blank_byte(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| !is_blank_byte(b))
        .map_or(start, |i| i + 1);
    &s[start..end]
}

/// Whitespace allowed between the words of a directive name.
///
/// Same as [`is_blank_byte`] minus NUL.
#[inline]
pub const fn is_whitespace_byte(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C')
}

/// Number of `\n` bytes in `s`.
#[inline]
pub fn count_newlines(s: &str) -> u32 {
    let count = memchr::memchr_iter(b'\n', s.as_bytes()).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Newlines of a scanned body, split around its first non-blank byte.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NewlineSplit {
    /// Newlines before any content; applied before the body token.
    pub leading: u32,
    /// Newlines after content started; applied after the body token.
    pub trailing: u32,
}

impl NewlineSplit {
    pub fn of(body: &str) -> Self {
        let content_start = body
            .bytes()
            .position(|b| !is_blank_byte(b))
            .unwrap_or(body.len());
        NewlineSplit {
            leading: count_newlines(&body[..content_start]),
            trailing: count_newlines(&body[content_start..]),
        }
    }
}
