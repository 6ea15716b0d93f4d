//! Byte ranges into a script.

use std::fmt;
use std::ops::Range;

/// Half-open byte range `start..end` into a script.
///
/// Layout: 8 bytes. Carries no reference to the text; callers re-slice the
/// original `&str` with [`Span::to_range`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Offset of the last byte covered, if any.
    ///
    /// For an extracted block this is the closing `}`.
    #[inline]
    pub const fn last(&self) -> Option<u32> {
        if self.is_empty() {
            None
        } else {
            Some(self.end - 1)
        }
    }

    /// `usize` range for slicing the script text.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Same `start..end` form as `Debug`; used by `kts extract --range`.
impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const _: () = assert!(std::mem::size_of::<Span>() == 8);
