use std::fmt;

/// Opaque handle to a loaded source file.
///
/// Produced by a [`crate::SourceManager`] (or [`crate::InMemorySources`]);
/// the numeric value is an index private to the table that issued it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FileId(pub(crate) u32);

impl FileId {
    /// Raw index, for tables that store files in a `Vec`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Construct from a raw index. Only meaningful for ids that came out of
    /// the same table the index refers to; tests use this to fabricate ids.
    pub fn from_index(index: u32) -> Self {
        FileId(index)
    }
}

/// A position in a source file.
///
/// `line` and `column` are 1-based. Columns count *codepoints*, not bytes,
/// so a position after `'ñ'` on a line is one column further, not two.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Span {
    pub file: FileId,
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn new(file: FileId, line: u32, column: u32) -> Self {
        Span { file, line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
