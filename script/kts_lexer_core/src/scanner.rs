//! Lexical-context scanner producing `(RawTag, len)` pairs.
//!
//! The scanner is a state machine over [`LexContext`]. In `Code` it emits
//! one token per lexeme; on a comment or literal opener it switches context
//! and keeps consuming until the context closes, so the whole construct
//! comes back as a single token. Braces inside comments and literals are
//! therefore never visible to consumers.
//!
//! # Design
//!
//! `next_token` dispatches on the current context. The `Code` arm either
//! produces a token or performs a transition (consuming the opener); the
//! other arms consume their body and transition back to `Code`. A context
//! other than `Code` survives a call only when EOF cut the construct short,
//! which [`ContextScanner::context`] then reports.
//!
//! String templates (`${ ... }`) are scanned as code with their own brace
//! counter. Nested literals inside a template push a frame onto a local
//! stack, so the only allocation happens for literals nested in templates.

use crate::context::{Delimiter, LexContext};
use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// One level of nesting inside a single literal token.
#[derive(Clone, Copy, Debug)]
enum Frame {
    Literal(Delimiter),
    /// Inside `${ ... }` of a literal opened with `within`.
    Template { braces: u32, within: Delimiter },
}

/// How a run of literal content ended.
enum LiteralStop {
    Closed,
    TemplateOpen,
    LineEnd,
    Eof,
}

/// How a run of template code ended.
enum TemplateStop {
    Closed,
    Literal(Delimiter),
    Eof,
}

/// Scanner over a build script, tracking the lexical context.
///
/// [`Copy`]: consumers snapshot it for lookahead and restore the snapshot
/// to rewind.
#[derive(Clone, Copy, Debug)]
pub struct ContextScanner<'a> {
    cursor: Cursor<'a>,
    context: LexContext,
}

impl<'a> ContextScanner<'a> {
    /// Create a scanner in `Code` context at the cursor's position.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            context: LexContext::Code,
        }
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Current lexical context.
    ///
    /// Always `Code` between tokens, except after EOF interrupted a comment
    /// or literal.
    #[inline]
    pub fn context(&self) -> LexContext {
        self.context
    }

    /// Script bytes in `start..end`.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        self.cursor.slice(start, end)
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` once the script is exhausted,
    /// and keeps returning it on subsequent calls.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }
        let tag = loop {
            let produced = match self.context {
                LexContext::Code => self.code(),
                LexContext::LineComment => Some(self.line_comment()),
                LexContext::BlockComment { depth } => Some(self.block_comment(depth)),
                LexContext::StringLiteral(delimiter) => Some(self.literal(delimiter)),
            };
            if let Some(tag) = produced {
                break tag;
            }
        };
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// Consume the opener of a comment or literal and switch context.
    fn enter(&mut self, context: LexContext, opener_len: u32) -> Option<RawTag> {
        self.cursor.advance_n(opener_len);
        self.context = context;
        None
    }

    // ─── Code ───────────────────────────────────────────────────────

    fn code(&mut self) -> Option<RawTag> {
        match self.cursor.current() {
            b' ' | b'\t' | b'\n' | b'\r' | 0x0C => {
                self.cursor.eat_while(is_whitespace);
                Some(RawTag::Whitespace)
            }
            0xEF if self.is_leading_bom() => {
                self.cursor.advance_n(3);
                Some(RawTag::Whitespace)
            }
            b'/' => match self.cursor.peek() {
                b'/' => self.enter(LexContext::LineComment, 2),
                b'*' => self.enter(LexContext::BlockComment { depth: 1 }, 2),
                _ => Some(self.single(RawTag::Punct)),
            },
            b'#' if self.is_shebang() => {
                self.enter(LexContext::LineComment, 2)
            }
            b'"' => {
                let delimiter = self.quote_delimiter();
                self.enter(LexContext::StringLiteral(delimiter), delimiter.width())
            }
            b'\'' => self.enter(LexContext::StringLiteral(Delimiter::Apostrophe), 1),
            b'`' => Some(self.quoted_ident()),
            b'{' => Some(self.single(RawTag::LeftBrace)),
            b'}' => Some(self.single(RawTag::RightBrace)),
            b if is_ident_continue(b) => {
                self.cursor.eat_while(is_ident_continue);
                Some(RawTag::Ident)
            }
            _ => Some(self.single(RawTag::Punct)),
        }
    }

    fn single(&mut self, tag: RawTag) -> RawTag {
        self.cursor.advance();
        tag
    }

    fn is_leading_bom(&self) -> bool {
        self.cursor.pos() == 0 && self.cursor.peek() == 0xBB && self.cursor.peek2() == 0xBF
    }

    /// `#!` at the very start of the script, a leading BOM aside.
    fn is_shebang(&self) -> bool {
        self.cursor.peek() == b'!'
            && match self.cursor.pos() {
                0 => true,
                3 => self.cursor.slice(0, 3) == UTF8_BOM,
                _ => false,
            }
    }

    /// `"""` or `"` at the current position.
    fn quote_delimiter(&self) -> Delimiter {
        if self.cursor.peek() == b'"' && self.cursor.peek2() == b'"' {
            Delimiter::TripleQuote
        } else {
            Delimiter::Quote
        }
    }

    fn quoted_ident(&mut self) -> RawTag {
        self.cursor.advance(); // opening '`'
        loop {
            match self.cursor.current() {
                b'`' => {
                    self.cursor.advance();
                    break;
                }
                b'\n' | b'\r' => break,
                0 if self.cursor.is_eof() => break,
                _ => self.cursor.advance(),
            }
        }
        RawTag::QuotedIdent
    }

    // ─── Comments ───────────────────────────────────────────────────

    fn line_comment(&mut self) -> RawTag {
        self.cursor.eat_until_newline_or_eof();
        self.context = LexContext::Code;
        RawTag::LineComment
    }

    fn block_comment(&mut self, depth: u32) -> RawTag {
        match self.eat_block_comment(depth) {
            Ok(()) => {
                self.context = LexContext::Code;
                RawTag::BlockComment
            }
            Err(open) => {
                self.context = LexContext::BlockComment { depth: open };
                RawTag::UnterminatedBlockComment
            }
        }
    }

    /// Consume block comment content with `depth` comments open.
    ///
    /// Returns `Err(depth)` with the number still open when EOF is hit.
    fn eat_block_comment(&mut self, mut depth: u32) -> Result<(), u32> {
        loop {
            match self.cursor.skip_to_comment_delim() {
                0 => return Err(depth),
                b'*' if self.cursor.peek() == b'/' => {
                    self.cursor.advance_n(2);
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                b'/' if self.cursor.peek() == b'*' => {
                    self.cursor.advance_n(2);
                    depth += 1;
                }
                _ => self.cursor.advance(),
            }
        }
    }

    // ─── Literals ───────────────────────────────────────────────────

    fn literal(&mut self, delimiter: Delimiter) -> RawTag {
        let mut frame = Frame::Literal(delimiter);
        // Frames suspended by a literal nested inside a template.
        let mut enclosing: Vec<Frame> = Vec::new();
        loop {
            frame = match frame {
                Frame::Literal(current) => match self.literal_body(current) {
                    LiteralStop::Closed => match enclosing.pop() {
                        Some(outer) => outer,
                        None => {
                            self.context = LexContext::Code;
                            return delimiter.closed_tag();
                        }
                    },
                    LiteralStop::TemplateOpen => Frame::Template {
                        braces: 0,
                        within: current,
                    },
                    LiteralStop::LineEnd => {
                        self.context = LexContext::Code;
                        return RawTag::UnterminatedString;
                    }
                    LiteralStop::Eof => return RawTag::UnterminatedString,
                },
                Frame::Template { mut braces, within } => {
                    match self.template_body(&mut braces) {
                        TemplateStop::Closed => Frame::Literal(within),
                        TemplateStop::Literal(nested) => {
                            enclosing.push(Frame::Template { braces, within });
                            Frame::Literal(nested)
                        }
                        TemplateStop::Eof => return RawTag::UnterminatedString,
                    }
                }
            };
        }
    }

    /// Consume literal content up to its closing delimiter, a template
    /// opener, a line end (single-line literals only), or EOF.
    ///
    /// Which bytes are special comes from the [`Delimiter`] predicates alone.
    fn literal_body(&mut self, delimiter: Delimiter) -> LiteralStop {
        loop {
            let b = if !delimiter.has_escapes() {
                self.cursor.skip_to_raw_string_delim()
            } else if delimiter.has_templates() {
                self.cursor.skip_to_string_delim()
            } else {
                self.cursor.skip_to_char_delim()
            };
            match b {
                0 => return LiteralStop::Eof,
                b'\n' | b'\r' if delimiter.is_single_line() => return LiteralStop::LineEnd,
                b'\\' if delimiter.has_escapes() => {
                    self.cursor.advance();
                    // An escaped line terminator still ends the line.
                    if !matches!(self.cursor.current(), b'\n' | b'\r') {
                        self.cursor.advance_char();
                    }
                }
                b'$' if delimiter.has_templates() => {
                    self.cursor.advance();
                    if self.cursor.current() == b'{' {
                        self.cursor.advance();
                        return LiteralStop::TemplateOpen;
                    }
                }
                _ if self.at_closing(delimiter) => {
                    self.cursor.advance_n(delimiter.width());
                    if delimiter == Delimiter::TripleQuote {
                        // `""""` closes on the last three quotes.
                        self.cursor.eat_while(|b| b == b'"');
                    }
                    return LiteralStop::Closed;
                }
                _ => self.cursor.advance(),
            }
        }
    }

    fn at_closing(&self, delimiter: Delimiter) -> bool {
        match delimiter {
            Delimiter::Quote => self.cursor.current() == b'"',
            Delimiter::Apostrophe => self.cursor.current() == b'\'',
            Delimiter::TripleQuote => {
                self.cursor.current() == b'"'
                    && self.cursor.peek() == b'"'
                    && self.cursor.peek2() == b'"'
            }
        }
    }

    /// Consume template code until its closing `}`, a nested literal
    /// opener, or EOF.
    fn template_body(&mut self, braces: &mut u32) -> TemplateStop {
        loop {
            match self.cursor.current() {
                0 if self.cursor.is_eof() => return TemplateStop::Eof,
                b'{' => {
                    *braces += 1;
                    self.cursor.advance();
                }
                b'}' => {
                    self.cursor.advance();
                    match braces.checked_sub(1) {
                        Some(open) => *braces = open,
                        None => return TemplateStop::Closed,
                    }
                }
                b'"' => {
                    let delimiter = self.quote_delimiter();
                    self.cursor.advance_n(delimiter.width());
                    return TemplateStop::Literal(delimiter);
                }
                b'\'' => {
                    self.cursor.advance();
                    return TemplateStop::Literal(Delimiter::Apostrophe);
                }
                b'/' if self.cursor.peek() == b'/' => self.cursor.eat_until_newline_or_eof(),
                b'/' if self.cursor.peek() == b'*' => {
                    self.cursor.advance_n(2);
                    if self.eat_block_comment(1).is_err() {
                        return TemplateStop::Eof;
                    }
                }
                _ => self.cursor.advance(),
            }
        }
    }
}

impl Iterator for ContextScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Lookup table for identifier bytes: `a-z`, `A-Z`, `0-9`, `_`, and every
/// non-ASCII byte (Kotlin identifiers may contain any Unicode letter).
/// The sentinel byte (0x00) maps to `false`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | 0x80..=0xFF
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` can continue an identifier.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0C)
}

/// Tokenize a script and collect every token except the final `Eof`.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    ContextScanner::new(buf.cursor()).collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
