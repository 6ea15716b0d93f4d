//! Low-level scanner for Kotlin build scripts.
//!
//! This crate knows just enough of the Kotlin lexical grammar to tell code
//! apart from comments and literals:
//!
//! - [`SourceBuffer`] owns a sentinel-terminated copy of the script.
//! - [`Cursor`] walks that buffer byte by byte.
//! - [`ContextScanner`] runs the [`LexContext`] state machine and emits
//!   [`RawToken`]s for code, collapsing every comment and literal into a
//!   single token.
//!
//! It resolves nothing: no keywords, no escapes, no numbers. Consumers such
//! as `kts_extract` build their own semantics on top of the token stream.

mod context;
mod cursor;
mod scanner;
mod source_buffer;
mod span;
mod tag;

pub use context::{Delimiter, LexContext};
pub use cursor::Cursor;
pub use scanner::{is_ident_continue, tokenize, ContextScanner};
pub use source_buffer::SourceBuffer;
pub use span::Span;
pub use tag::{RawTag, RawToken};
