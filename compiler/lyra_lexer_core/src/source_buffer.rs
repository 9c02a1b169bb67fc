use crate::Cursor;

/// Byte storage for one source text.
///
/// Holds the raw bytes and hands out [`Cursor`]s over them. Construction
/// from `&str` is the common path; [`SourceBuffer::from_bytes`] exists for
/// callers that read files as raw bytes and want the cursor's replacement
/// policy to deal with encoding damage.
pub struct SourceBuffer {
    bytes: Vec<u8>,
}

impl SourceBuffer {
    pub fn new(source: &str) -> Self {
        SourceBuffer {
            bytes: source.as_bytes().to_vec(),
        }
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        SourceBuffer {
            bytes: bytes.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// A cursor positioned at the start of the buffer, line 1 column 1.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_source() {
        let buf = SourceBuffer::new("");
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());
        assert!(buf.cursor().is_eof());
    }

    #[test]
    fn bytes_are_preserved() {
        let buf = SourceBuffer::new("let x");
        assert_eq!(buf.as_bytes(), b"let x");
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn from_bytes_accepts_invalid_utf8() {
        let buf = SourceBuffer::from_bytes(vec![b'a', 0xFF, b'b']);
        assert_eq!(buf.len(), 3);
    }
}
