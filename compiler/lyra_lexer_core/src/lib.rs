//! Low-level lexing substrate for Lyra.
//!
//! This crate is deliberately standalone: it knows nothing about tokens,
//! diagnostics, or files. It provides:
//!
//! - [`SourceBuffer`] - byte storage for one source text
//! - [`Cursor`] - a copyable codepoint cursor with line/column tracking
//!   and a fixed replacement policy for malformed UTF-8
//! - [`classify`] - character classification used by the scanners
//!
//! # Malformed UTF-8
//!
//! The cursor decodes UTF-8 by hand. Any malformed unit (bad lead byte,
//! truncated sequence, bad continuation, overlong encoding, surrogate,
//! value above U+10FFFF) decodes to U+FFFD and consumes exactly one byte.
//! This is silent: encoding garbage is not a lexical error, and the
//! replacement character then flows through ordinary classification.

pub mod classify;
mod cursor;
mod source_buffer;

pub use cursor::{Cursor, REPLACEMENT};
pub use source_buffer::SourceBuffer;
