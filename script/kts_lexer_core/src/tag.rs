//! Token tags produced by the [`ContextScanner`](crate::ContextScanner).

/// Classification of a raw token.
///
/// Code tokens (`Ident`, braces, `Punct`, `Whitespace`) are emitted one per
/// lexeme. Every comment and literal collapses into a single token whose
/// tag records whether it was terminated. Malformed input never produces an
/// error; it produces an `Unterminated*` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    /// Maximal run of identifier bytes (`[A-Za-z0-9_]` or non-ASCII).
    Ident = 0,
    /// Backtick-quoted identifier, e.g. `` `my task` ``.
    QuotedIdent = 1,

    /// `"..."`, templates included.
    String = 8,
    /// `"""..."""`.
    RawString = 9,
    /// `'c'`.
    Char = 10,
    /// A literal cut short by a line terminator or EOF.
    UnterminatedString = 11,

    /// `// ...` or a `#!` shebang line (at offset 0 or right after a leading
    /// BOM), without its terminator.
    LineComment = 16,
    /// `/* ... */`, nested comments included.
    BlockComment = 17,
    /// A block comment still open at EOF.
    UnterminatedBlockComment = 18,

    LeftBrace = 32,
    RightBrace = 33,
    /// Any other code byte (operators, parens, dots, interior NUL).
    Punct = 34,

    /// Spaces, tabs, form feeds, line terminators and a leading BOM.
    Whitespace = 48,

    /// End of input (`len == 0`).
    Eof = 255,
}

impl RawTag {
    /// Returns `true` for tokens that separate code without meaning anything:
    /// whitespace and comments (terminated or not).
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            RawTag::Whitespace
                | RawTag::LineComment
                | RawTag::BlockComment
                | RawTag::UnterminatedBlockComment
        )
    }
}

/// A `(tag, len)` pair; the start offset is tracked by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
