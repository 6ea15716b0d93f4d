//! The block extractor: one left-to-right pass over the script.
//!
//! The [`ContextScanner`] already hides comments and literals, so this layer
//! only keeps the brace depth and looks at identifiers at depth 0. A keyword
//! hit is confirmed by a lookahead on a copy of the scanner; if the next
//! significant token is not `{`, the copy is dropped and scanning resumes
//! right after the keyword.

use kts_lexer_core::{ContextScanner, RawTag, SourceBuffer, Span};
use tracing::{debug, trace};

use crate::Keyword;

/// Find the first top-level `keyword { ... }` block in `source`.
///
/// The returned span starts at the keyword's first byte and ends just past
/// the `}` that closes the keyword's own block. Returns `None` when no
/// occurrence qualifies, including when the matching block is still open at
/// the end of the script.
#[tracing::instrument(level = "trace", skip_all, fields(keyword = %keyword, len = source.len()))]
pub fn extract_block(source: &str, keyword: &Keyword<'_>) -> Option<Span> {
    let buf = SourceBuffer::new(source);
    let mut scanner = ContextScanner::new(buf.cursor());
    let mut depth: u32 = 0;

    loop {
        let start = scanner.pos();
        let tok = scanner.next_token();
        match tok.tag {
            RawTag::Eof => {
                trace!(context = ?scanner.context(), "no top-level block");
                return None;
            }
            RawTag::LeftBrace => depth += 1,
            // Unmatched closers floor at zero.
            RawTag::RightBrace => depth = depth.saturating_sub(1),
            RawTag::Ident if depth == 0 && keyword.matches(scanner.slice(start, start + tok.len)) => {
                let Some(mut body) = opening_brace(scanner) else {
                    trace!(offset = start, "bare reference, not a block");
                    continue;
                };
                return match closing_brace(&mut body) {
                    Some(end) => {
                        let span = Span::new(start, end);
                        debug!(%span, "found top-level block");
                        Some(span)
                    }
                    None => {
                        debug!(offset = start, "block never closes");
                        None
                    }
                };
            }
            _ => {}
        }
    }
}

/// The matched block's text, sliced from `source`.
pub fn block_text<'s>(source: &'s str, keyword: &Keyword<'_>) -> Option<&'s str> {
    extract_block(source, keyword).map(|span| &source[span.to_range()])
}

/// Skip whitespace and comments after a keyword.
///
/// Returns the scanner positioned just past `{` if that is what follows.
fn opening_brace(mut lookahead: ContextScanner<'_>) -> Option<ContextScanner<'_>> {
    loop {
        let tok = lookahead.next_token();
        if !tok.tag.is_trivia() {
            return (tok.tag == RawTag::LeftBrace).then_some(lookahead);
        }
    }
}

/// Run to the `}` closing a block whose `{` was just consumed.
///
/// Returns the offset just past it, or `None` at EOF.
fn closing_brace(scanner: &mut ContextScanner<'_>) -> Option<u32> {
    let mut depth: u32 = 1;
    loop {
        match scanner.next_token().tag {
            RawTag::LeftBrace => depth += 1,
            RawTag::RightBrace => {
                depth -= 1;
                if depth == 0 {
                    return Some(scanner.pos());
                }
            }
            RawTag::Eof => return None,
            _ => {}
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests;
