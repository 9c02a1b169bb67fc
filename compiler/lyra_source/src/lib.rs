//! Source files and positions for the Lyra compiler.
//!
//! Everything downstream of the lexer talks about source locations through
//! the types in this crate:
//!
//! - [`FileId`] - opaque handle to a loaded source file
//! - [`Span`] - a 1-based (line, column) position inside a file
//! - [`SourceTable`] - read access to loaded buffers, keyed by `FileId`
//! - [`SourceManager`] - the real, deduplicating file loader
//! - [`InMemorySources`] - an in-memory table for tests and tooling

mod span;
mod table;

pub use span::{FileId, Span};
pub use table::{InMemorySources, SourceError, SourceManager, SourceTable};
