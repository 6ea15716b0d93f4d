//! Lexical contexts of the scanner state machine.

use crate::RawTag;

/// Where the scanner currently is, lexically.
///
/// Exactly one context is active at a time. Only `Code` lets braces and
/// identifiers through to consumers; every other context swallows its
/// content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LexContext {
    #[default]
    Code,
    /// `//` (or a leading `#!`) up to the line terminator.
    LineComment,
    /// `/* ... */`; `depth` counts open comments and is always >= 1.
    BlockComment { depth: u32 },
    /// Inside a string or char literal.
    StringLiteral(Delimiter),
}

/// Opening delimiter of a literal; decides how it ends and what it escapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `"`: escapes, templates, single line.
    Quote,
    /// `"""`: no escapes, templates, may span lines.
    TripleQuote,
    /// `'`: escapes, single line.
    Apostrophe,
}

impl Delimiter {
    /// Byte length of the opening (and closing) delimiter.
    pub const fn width(self) -> u32 {
        match self {
            Delimiter::Quote | Delimiter::Apostrophe => 1,
            Delimiter::TripleQuote => 3,
        }
    }

    /// `\` makes the next character literal.
    pub const fn has_escapes(self) -> bool {
        !matches!(self, Delimiter::TripleQuote)
    }

    /// `${ ... }` switches back to code until the matching `}`.
    pub const fn has_templates(self) -> bool {
        !matches!(self, Delimiter::Apostrophe)
    }

    /// A line terminator before the closing delimiter leaves the literal
    /// unterminated.
    pub const fn is_single_line(self) -> bool {
        !matches!(self, Delimiter::TripleQuote)
    }

    /// Tag of a properly closed literal with this delimiter.
    pub const fn closed_tag(self) -> RawTag {
        match self {
            Delimiter::Quote => RawTag::String,
            Delimiter::TripleQuote => RawTag::RawString,
            Delimiter::Apostrophe => RawTag::Char,
        }
    }
}
