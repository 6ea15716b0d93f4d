//! Top-level block extraction for Kotlin build scripts.
//!
//! Given the text of a script, [`extract_block`] finds the first
//! `keyword { ... }` invocation that sits at brace depth 0 in code, that is,
//! not inside a comment or literal, not nested in another block, and not a
//! bare reference or a longer identifier.
//!
//! ```
//! use kts_extract::{extract_block, Keyword};
//!
//! let script = "val a = buildscript\nbuildscript { repositories {} }\nplugins {}";
//! let span = extract_block(script, &Keyword::BUILDSCRIPT).unwrap();
//! assert_eq!(&script[span.to_range()], "buildscript { repositories {} }");
//! ```
//!
//! Malformed input (unterminated comments or literals, unbalanced braces) is
//! never an error: the answer is simply `None`. The only failure is an
//! invalid [`Keyword`], rejected when it is constructed.

mod extractor;
mod keyword;
mod sections;

pub use extractor::{block_text, extract_block};
pub use keyword::{InvalidKeyword, Keyword};
pub use kts_lexer_core::Span;
pub use sections::{blank_block, partition, ScriptSections};
