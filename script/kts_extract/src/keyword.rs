//! Validated block keywords.

use std::fmt;

/// Why a string cannot be used as a block keyword.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidKeyword {
    #[error("block keyword must not be empty")]
    Empty,
    #[error("block keyword `{keyword}` starts with a digit")]
    StartsWithDigit { keyword: String },
    #[error("block keyword `{keyword}` contains {ch:?} at byte {offset}, which cannot appear in an identifier")]
    InvalidChar {
        keyword: String,
        ch: char,
        offset: usize,
    },
}

/// Name of the block to look for, guaranteed to be a plain identifier.
///
/// Validation happens once here so extraction itself cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keyword<'k> {
    text: &'k str,
}

impl Keyword<'static> {
    pub const BUILDSCRIPT: Keyword<'static> = Keyword {
        text: "buildscript",
    };
    pub const PLUGINS: Keyword<'static> = Keyword { text: "plugins" };
}

impl<'k> Keyword<'k> {
    /// Accepts letters, digits and `_`, not starting with a digit.
    pub fn new(text: &'k str) -> Result<Self, InvalidKeyword> {
        let Some(first) = text.chars().next() else {
            return Err(InvalidKeyword::Empty);
        };
        if let Some((offset, ch)) = text
            .char_indices()
            .find(|&(_, ch)| !(ch.is_alphanumeric() || ch == '_'))
        {
            return Err(InvalidKeyword::InvalidChar {
                keyword: text.to_owned(),
                ch,
                offset,
            });
        }
        if first.is_numeric() {
            return Err(InvalidKeyword::StartsWithDigit {
                keyword: text.to_owned(),
            });
        }
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &'k str {
        self.text
    }

    /// Byte-for-byte comparison against an identifier token.
    pub(crate) fn matches(&self, ident: &[u8]) -> bool {
        ident == self.text.as_bytes()
    }
}

impl<'k> TryFrom<&'k str> for Keyword<'k> {
    type Error = InvalidKeyword;

    fn try_from(text: &'k str) -> Result<Self, Self::Error> {
        Keyword::new(text)
    }
}

impl fmt::Display for Keyword<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}
