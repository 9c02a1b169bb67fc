use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::FileId;

/// Failure to bring a file into the source table.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read access to loaded source buffers.
///
/// The lexer and diagnostic printer only need this view; the concrete table
/// behind it can be the real [`SourceManager`] or an [`InMemorySources`]
/// built up by a test.
pub trait SourceTable {
    /// Full text of the file, or `None` for an id this table never issued.
    fn buffer(&self, file: FileId) -> Option<&str>;

    /// Path the file was loaded from (a display name for in-memory tables).
    fn path(&self, file: FileId) -> Option<&Path>;

    /// A single 1-based line of the file, without its trailing newline.
    fn line(&self, file: FileId, line: u32) -> Option<&str> {
        if line == 0 {
            return None;
        }
        self.buffer(file)?
            .lines()
            .nth(line as usize - 1)
    }
}

struct LoadedFile {
    path: PathBuf,
    text: String,
}

/// Owning table of on-disk source files.
///
/// Loading the same file twice (through any spelling of its path that
/// canonicalizes identically) returns the original [`FileId`].
#[derive(Default)]
pub struct SourceManager {
    files: Vec<LoadedFile>,
    by_path: FxHashMap<PathBuf, FileId>,
}

impl SourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file from disk, deduplicating by canonical path.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<FileId, SourceError> {
        let path = path.as_ref();
        let canonical = path.canonicalize().map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(&id) = self.by_path.get(&canonical) {
            return Ok(id);
        }

        let text = fs::read_to_string(&canonical).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %canonical.display(), bytes = text.len(), "loaded source file");

        let id = FileId(u32::try_from(self.files.len()).unwrap_or(u32::MAX));
        self.files.push(LoadedFile {
            path: canonical.clone(),
            text,
        });
        self.by_path.insert(canonical, id);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl SourceTable for SourceManager {
    fn buffer(&self, file: FileId) -> Option<&str> {
        self.files.get(file.index()).map(|f| f.text.as_str())
    }

    fn path(&self, file: FileId) -> Option<&Path> {
        self.files.get(file.index()).map(|f| f.path.as_path())
    }
}

/// Source table backed by strings instead of the filesystem.
///
/// Used by tests and by tooling that lexes text it already holds.
#[derive(Default)]
pub struct InMemorySources {
    files: Vec<LoadedFile>,
}

impl InMemorySources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named buffer and get an id for it.
    pub fn add(&mut self, name: impl Into<PathBuf>, text: impl Into<String>) -> FileId {
        let id = FileId(u32::try_from(self.files.len()).unwrap_or(u32::MAX));
        self.files.push(LoadedFile {
            path: name.into(),
            text: text.into(),
        });
        id
    }
}

impl SourceTable for InMemorySources {
    fn buffer(&self, file: FileId) -> Option<&str> {
        self.files.get(file.index()).map(|f| f.text.as_str())
    }

    fn path(&self, file: FileId) -> Option<&Path> {
        self.files.get(file.index()).map(|f| f.path.as_path())
    }
}
