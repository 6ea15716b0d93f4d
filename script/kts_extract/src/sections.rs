//! Splitting a script into its extracted block and the remaining body.
//!
//! Tools that evaluate a `buildscript` block first and the rest of the
//! script later want the body with the block removed but every other
//! offset, line and column left where it was. Blanking does that: the block
//! is overwritten with spaces, line terminators are kept.

use std::borrow::Cow;

use kts_lexer_core::Span;
use tracing::debug;

use crate::{extract_block, Keyword};

/// A script split around one extracted block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptSections<'a> {
    /// Where the block was found.
    pub block: Option<Span>,
    /// The block's text.
    pub block_text: Option<&'a str>,
    /// The script with the block blanked; borrowed unchanged when no block
    /// was found.
    pub body: Cow<'a, str>,
}

/// Copy of `source` with the bytes of `span` replaced by spaces.
///
/// `\n` and `\r` are kept, and a multi-byte character becomes as many spaces
/// as it had bytes, so the result has the same length and line structure.
/// `None` when `span` runs past the end of `source`, is reversed, or does not
/// fall on character boundaries.
pub fn blank_block(source: &str, span: Span) -> Option<String> {
    let range = span.to_range();
    let head = source.get(..range.start)?;
    let block = source.get(range.clone())?;
    let tail = source.get(range.end..)?;

    let mut blanked = String::with_capacity(source.len());
    blanked.push_str(head);
    for ch in block.chars() {
        match ch {
            '\n' | '\r' => blanked.push(ch),
            _ => {
                for _ in 0..ch.len_utf8() {
                    blanked.push(' ');
                }
            }
        }
    }
    blanked.push_str(tail);
    Some(blanked)
}

/// Extract the first top-level `keyword` block and blank it out of the body.
#[tracing::instrument(level = "debug", skip_all, fields(keyword = %keyword))]
pub fn partition<'a>(source: &'a str, keyword: &Keyword<'_>) -> ScriptSections<'a> {
    let found = extract_block(source, keyword).and_then(|span| {
        let text = source.get(span.to_range())?;
        let body = blank_block(source, span)?;
        Some((span, text, body))
    });
    match found {
        Some((span, text, body)) => {
            debug!(%span, "blanking block out of script body");
            ScriptSections {
                block: Some(span),
                block_text: Some(text),
                body: Cow::Owned(body),
            }
        }
        None => ScriptSections {
            block: None,
            block_text: None,
            body: Cow::Borrowed(source),
        },
    }
}
