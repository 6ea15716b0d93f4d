//! Sentinel-terminated copy of a build script.
//!
//! Scanning never compares the position against the script length on the
//! hot path: the copy is followed by a `0x00` sentinel and zero padding out
//! to the next cache line, at least [`LOOKAHEAD`] bytes of it.

use crate::Cursor;

const CACHE_LINE: usize = 64;

/// Zero bytes guaranteed after the script: the sentinel plus what `peek2`
/// can reach from the last script byte.
const LOOKAHEAD: usize = 3;

/// Owned script bytes with trailing zeros.
///
/// ```text
/// [script bytes ..., 0x00, 0x00, 0x00, ... 0x00]
///  0                 ^ len             ^ multiple of 64
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a padded buffer.
    ///
    /// Offsets are `u32`, so anything past the first `u32::MAX` bytes is
    /// dropped.
    pub fn new(source: &str) -> Self {
        let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let kept = &source.as_bytes()[..source_len as usize];

        let padded_len = (kept.len() + LOOKAHEAD).next_multiple_of(CACHE_LINE);
        let mut buf = Vec::with_capacity(padded_len);
        buf.extend_from_slice(kept);
        buf.resize(padded_len, 0);

        Self { buf, source_len }
    }

    /// Cursor at offset 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }
}

#[cfg(test)]
mod tests;
