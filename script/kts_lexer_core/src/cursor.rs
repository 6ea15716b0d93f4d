//! Byte cursor for the context scanner.
//!
//! Reads never bounds-check against the script length: the buffer behind
//! the cursor ends in a `0x00` sentinel plus zero padding, so looking one or
//! two bytes past the last script byte is always valid. A `0x00` inside the
//! script is ordinary content; only a `0x00` at `pos >= source_len` is EOF.

/// Nearer of two `memchr` hits, for searches over more than three needles.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    [a, b].into_iter().flatten().min()
}

/// Position in a [`SourceBuffer`](crate::SourceBuffer).
///
/// `Copy`: the scanner that owns it is snapshotted for lookahead by plain
/// assignment.
///
/// # Invariant
///
/// `buf[source_len..]` is all `0x00` and at least three bytes long.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    /// Script length; `buf` continues past it with the sentinel.
    source_len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            buf.len() >= source_len as usize + 3,
            "buffer must hold the sentinel and two bytes of lookahead"
        );
        debug_assert!(
            buf[source_len as usize..].iter().all(|&b| b == 0),
            "bytes past the script must be zero"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    #[inline]
    fn at(&self, ahead: u32) -> u8 {
        self.buf[(self.pos + ahead) as usize]
    }

    /// Byte under the cursor; `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.at(0)
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.at(1)
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.at(2)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// `true` on the sentinel, never on an interior `0x00`.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Script bytes in `start..end`.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(
            start <= end && end <= self.source_len,
            "slice {start}..{end} out of script bounds 0..{}",
            self.source_len
        );
        &self.buf[start as usize..end as usize]
    }

    /// Consume bytes while `pred` accepts them.
    ///
    /// `pred(0)` must be `false`, otherwise the loop runs into the padding.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character, never past the sentinel.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source_len.max(self.pos));
    }

    /// Unscanned script bytes (sentinel excluded).
    #[inline]
    fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    /// Stop on the next line terminator, or at EOF.
    ///
    /// The terminator itself is left for the whitespace scanner, so a line
    /// comment never swallows it.
    pub fn eat_until_newline_or_eof(&mut self) {
        let hit = memchr::memchr2(b'\n', b'\r', self.rest());
        self.land(hit);
    }

    /// Jump to the next `*` or `/` of a block comment body.
    /// Yields the byte landed on; 0 means EOF.
    pub fn skip_to_comment_delim(&mut self) -> u8 {
        let hit = memchr::memchr2(b'*', b'/', self.rest());
        self.land(hit)
    }

    /// Jump over plain `"` literal content to the next `"`, `\`, `$` or
    /// line terminator. Yields the byte landed on; 0 means EOF.
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let rest = self.rest();
        let hit = earliest_of(
            memchr::memchr3(b'"', b'\\', b'$', rest),
            memchr::memchr2(b'\n', b'\r', rest),
        );
        self.land(hit)
    }

    /// Jump over raw `"""` content to the next `"` or `$`; raw literals
    /// span lines and have no escapes. Yields 0 at EOF.
    pub fn skip_to_raw_string_delim(&mut self) -> u8 {
        let hit = memchr::memchr2(b'"', b'$', self.rest());
        self.land(hit)
    }

    /// Jump over char literal content to the next `'`, `\` or line
    /// terminator. Yields 0 at EOF.
    pub fn skip_to_char_delim(&mut self) -> u8 {
        let rest = self.rest();
        let hit = earliest_of(
            memchr::memchr3(b'\'', b'\\', b'\n', rest),
            memchr::memchr(b'\r', rest),
        );
        self.land(hit)
    }

    /// Move `offset` bytes ahead, or to EOF on `None`, and return the byte
    /// under the cursor afterwards.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets into rest() are below source_len, a u32"
    )]
    fn land(&mut self, offset: Option<usize>) -> u8 {
        self.pos = match offset {
            Some(offset) => self.pos + offset as u32,
            None => self.source_len,
        };
        self.current()
    }
}

#[cfg(test)]
mod tests;
