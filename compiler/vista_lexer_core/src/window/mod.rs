//! Cached view of the unscanned remainder of a template.
//!
//! Scanners ask for "the input from here on" (or "the next `n` bytes from
//! here") far more often than they move. The window remembers the last
//! request and, when the cursor only moved forward with the same length
//! request, derives the new view from the cached one instead of going back
//! to the base input. Backward movement or a different length always
//! recomputes from the base.
//!
//! # Contract
//!
//! [`fetch`](Window::fetch) returns exactly what slicing the base input
//! would return. Positions and lengths are clamped down to the nearest
//! UTF-8 character boundary, so a window never splits a character.

/// Sentinel start for an empty cache.
const NO_WINDOW: usize = usize::MAX;

/// Cached `&str` view into a base input.
#[derive(Clone, Debug)]
pub struct Window<'a> {
    base: &'a str,
    /// Byte offset of `text` in `base`, or `NO_WINDOW`.
    start: usize,
    /// Length of the last request; `None` means "to end of input".
    len: Option<usize>,
    text: &'a str,
    /// Number of times the view was rebuilt from `base`.
    recomputes: u32,
}

impl<'a> Window<'a> {
    pub fn new(base: &'a str) -> Self {
        Window {
            base,
            start: NO_WINDOW,
            len: None,
            text: "",
            recomputes: 0,
        }
    }

    /// The full input this window views.
    #[inline]
    pub fn base(&self) -> &'a str {
        self.base
    }

    /// How many requests could not be served from the cached view.
    pub fn recompute_count(&self) -> u32 {
        self.recomputes
    }

    /// Input starting at `cursor`, `len` bytes long or to end of input.
    pub fn fetch(&mut self, cursor: usize, len: Option<usize>) -> &'a str {
        let cursor = floor_char_boundary(self.base, cursor);

        if self.start == NO_WINDOW || self.len != len || self.start > cursor {
            self.recompute(cursor, len);
        } else if self.start != cursor {
            self.slide(cursor, len);
        }

        self.text
    }

    /// Move the cached view forward to `cursor`, reusing the cached tail.
    fn slide(&mut self, cursor: usize, len: Option<usize>) {
        let offset = cursor - self.start;
        let cached_end = self.start + self.text.len();

        match len {
            None => {
                // The cached view already runs to end of input.
                self.text = &self.text[offset.min(self.text.len())..];
                self.start = cursor;
            }
            Some(n) => {
                let end = self.end_for(cursor, n);
                if end <= cached_end {
                    self.text = &self.text[offset..end - self.start];
                    self.start = cursor;
                } else {
                    // Requested bytes run past the cached view.
                    self.recompute(cursor, len);
                }
            }
        }
    }

    fn recompute(&mut self, cursor: usize, len: Option<usize>) {
        let end = match len {
            None => self.base.len(),
            Some(n) => self.end_for(cursor, n),
        };
        self.start = cursor;
        self.len = len;
        self.text = &self.base[cursor..end];
        self.recomputes += 1;
    }

    fn end_for(&self, cursor: usize, n: usize) -> usize {
        floor_char_boundary(self.base, cursor.saturating_add(n))
    }
}

/// Largest char boundary in `s` that is `<= index` (clamped to `s.len()`).
pub(crate) fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
