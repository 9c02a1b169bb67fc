use memchr::memchr;

/// What malformed UTF-8 decodes to.
pub const REPLACEMENT: char = '\u{FFFD}';

/// Codepoint cursor over a source buffer.
///
/// `Copy` on purpose: scanners checkpoint by copying the cursor and
/// restore by assigning the copy back.
///
/// The cursor tracks a byte position plus 1-based line and column. Columns
/// count codepoints. A newline moves to the next line, column 1; every
/// other decoded codepoint (including a replacement for a malformed byte)
/// advances the column by one.
#[derive(Copy, Clone)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Cursor {
            buf,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current byte offset.
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Current (line, column), both 1-based.
    pub fn coords(&self) -> (u32, u32) {
        (self.line, self.column)
    }

    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.buf.len()
    }

    /// Codepoint at the cursor, without advancing. [`REPLACEMENT`] at EOF.
    pub fn peek(&self) -> char {
        decode_at(self.buf, self.pos as usize).0
    }

    /// Codepoint `n` codepoints ahead of the cursor (`peek_at(0)` is
    /// `peek()`). [`REPLACEMENT`] past EOF.
    pub fn peek_at(&self, n: usize) -> char {
        let mut p = self.pos as usize;
        for _ in 0..n {
            let (_, width) = decode_at(self.buf, p);
            if width == 0 {
                return REPLACEMENT;
            }
            p += width as usize;
        }
        decode_at(self.buf, p).0
    }

    /// Decode the codepoint at the cursor and advance past it. At EOF this
    /// is a no-op returning [`REPLACEMENT`].
    pub fn bump(&mut self) -> char {
        let (c, width) = decode_at(self.buf, self.pos as usize);
        if width == 0 {
            return REPLACEMENT;
        }
        self.pos += width;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Consume the codepoint at the cursor if it equals `expected`.
    /// Returns whether it matched. Always `false` at EOF.
    pub fn matches(&mut self, expected: char) -> bool {
        if !self.is_eof() && self.peek() == expected {
            self.bump();
            return true;
        }
        false
    }

    /// Advance to the next `\n` (not consuming it) or to EOF.
    pub fn eat_line(&mut self) {
        let start = self.pos as usize;
        let end = memchr(b'\n', &self.buf[start..]).map_or(self.buf.len(), |i| start + i);
        let mut p = start;
        let mut cols = 0u32;
        while p < end {
            let (_, width) = decode_at(self.buf, p);
            p += width.max(1) as usize;
            cols += 1;
        }
        self.pos = end as u32;
        self.column += cols;
    }

    /// Decode the byte range `from..to` into owned text, applying the same
    /// replacement policy as [`Cursor::bump`]. Scanners use this to build
    /// lexemes from the span they consumed.
    pub fn lexeme(&self, from: u32, to: u32) -> String {
        let mut out = String::new();
        let mut p = from as usize;
        let end = (to as usize).min(self.buf.len());
        while p < end {
            let (c, width) = decode_at(self.buf, p);
            if width == 0 {
                break;
            }
            out.push(c);
            p += width as usize;
        }
        out
    }
}

/// Decode one codepoint starting at `pos`.
///
/// Returns `(codepoint, bytes_consumed)`. Every malformed unit yields
/// `(REPLACEMENT, 1)`; at EOF the width is 0.
fn decode_at(buf: &[u8], pos: usize) -> (char, u32) {
    let Some(&b0) = buf.get(pos) else {
        return (REPLACEMENT, 0);
    };
    if b0 < 0x80 {
        return (b0 as char, 1);
    }

    // 0x80..=0xC1 covers stray continuation bytes and the always-overlong
    // leads C0/C1; 0xF5+ encodes values above U+10FFFF.
    let width = match b0 {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return (REPLACEMENT, 1),
    };

    let Some(rest) = buf.get(pos + 1..pos + width) else {
        return (REPLACEMENT, 1);
    };
    if rest.iter().any(|&b| !(0x80..=0xBF).contains(&b)) {
        return (REPLACEMENT, 1);
    }

    let mut cp = u32::from(b0 & (0x7F >> width));
    for &b in rest {
        cp = (cp << 6) | u32::from(b & 0x3F);
    }

    let overlong = match width {
        3 => cp < 0x800,
        4 => cp < 0x1_0000,
        _ => false,
    };
    if overlong || cp > 0x10_FFFF {
        return (REPLACEMENT, 1);
    }
    // from_u32 rejects the surrogate range.
    match char::from_u32(cp) {
        Some(c) => (c, width as u32),
        None => (REPLACEMENT, 1),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::SourceBuffer;
    use pretty_assertions::assert_eq;

    // === Basic navigation ===

    #[test]
    fn peek_returns_first_codepoint() {
        let buf = SourceBuffer::new("abc");
        let cursor = buf.cursor();
        assert_eq!(cursor.peek(), 'a');
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn bump_advances_and_returns() {
        let buf = SourceBuffer::new("abc");
        let mut cursor = buf.cursor();
        assert_eq!(cursor.bump(), 'a');
        assert_eq!(cursor.peek(), 'b');
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn bump_at_eof_is_noop() {
        let buf = SourceBuffer::new("");
        let mut cursor = buf.cursor();
        assert!(cursor.is_eof());
        assert_eq!(cursor.bump(), REPLACEMENT);
        assert_eq!(cursor.pos(), 0);
        assert_eq!(cursor.coords(), (1, 1));
    }

    #[test]
    fn peek_at_looks_ahead_by_codepoints() {
        let buf = SourceBuffer::new("añc");
        let cursor = buf.cursor();
        assert_eq!(cursor.peek_at(0), 'a');
        assert_eq!(cursor.peek_at(1), 'ñ');
        assert_eq!(cursor.peek_at(2), 'c');
        assert_eq!(cursor.peek_at(3), REPLACEMENT);
    }

    // === Line and column tracking ===

    #[test]
    fn starts_at_line_one_column_one() {
        let buf = SourceBuffer::new("x");
        assert_eq!(buf.cursor().coords(), (1, 1));
    }

    #[test]
    fn newline_resets_column() {
        let buf = SourceBuffer::new("ab\ncd");
        let mut cursor = buf.cursor();
        cursor.bump();
        cursor.bump();
        assert_eq!(cursor.coords(), (1, 3));
        cursor.bump(); // '\n'
        assert_eq!(cursor.coords(), (2, 1));
        cursor.bump();
        assert_eq!(cursor.coords(), (2, 2));
    }

    #[test]
    fn multibyte_codepoint_is_one_column() {
        let buf = SourceBuffer::new("ñx");
        let mut cursor = buf.cursor();
        assert_eq!(cursor.bump(), 'ñ');
        assert_eq!(cursor.pos(), 2);
        assert_eq!(cursor.coords(), (1, 2));
    }

    #[test]
    fn four_byte_codepoint_is_one_column() {
        let buf = SourceBuffer::new("🦀!");
        let mut cursor = buf.cursor();
        assert_eq!(cursor.bump(), '🦀');
        assert_eq!(cursor.pos(), 4);
        assert_eq!(cursor.coords(), (1, 2));
        assert_eq!(cursor.bump(), '!');
    }

    #[test]
    fn matches_consumes_only_on_equality() {
        let buf = SourceBuffer::new("ab");
        let mut cursor = buf.cursor();
        assert!(!cursor.matches('b'));
        assert_eq!(cursor.pos(), 0);
        assert!(cursor.matches('a'));
        assert_eq!(cursor.pos(), 1);
        assert!(cursor.matches('b'));
        assert!(!cursor.matches('c'));
        assert!(cursor.is_eof());
        assert!(!cursor.matches(REPLACEMENT));
    }

    // === Checkpoint / restore ===

    #[test]
    fn copy_is_a_checkpoint() {
        let buf = SourceBuffer::new("hello");
        let mut cursor = buf.cursor();
        cursor.bump();
        cursor.bump();
        let saved = cursor;
        cursor.bump();
        cursor.bump();
        cursor = saved;
        assert_eq!(cursor.peek(), 'l');
        assert_eq!(cursor.pos(), 2);
    }

    // === Malformed UTF-8 ===

    #[test]
    fn stray_continuation_byte_is_one_replacement() {
        let buf = SourceBuffer::from_bytes(vec![b'a', 0x80, b'b']);
        let mut cursor = buf.cursor();
        assert_eq!(cursor.bump(), 'a');
        assert_eq!(cursor.bump(), REPLACEMENT);
        assert_eq!(cursor.pos(), 2);
        assert_eq!(cursor.bump(), 'b');
    }

    #[test]
    fn overlong_two_byte_encoding_is_rejected_per_byte() {
        // C0 80 is an overlong encoding of NUL.
        let buf = SourceBuffer::from_bytes(vec![0xC0, 0x80]);
        let mut cursor = buf.cursor();
        assert_eq!(cursor.bump(), REPLACEMENT);
        assert_eq!(cursor.pos(), 1);
        assert_eq!(cursor.bump(), REPLACEMENT);
        assert_eq!(cursor.pos(), 2);
    }

    #[test]
    fn overlong_three_byte_encoding_is_rejected() {
        // E0 80 80 would decode to 0, far below the 3-byte minimum 0x800.
        let buf = SourceBuffer::from_bytes(vec![0xE0, 0x80, 0x80]);
        let mut cursor = buf.cursor();
        assert_eq!(cursor.bump(), REPLACEMENT);
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn surrogate_encoding_is_rejected() {
        // ED A0 80 encodes U+D800.
        let buf = SourceBuffer::from_bytes(vec![0xED, 0xA0, 0x80]);
        let mut cursor = buf.cursor();
        assert_eq!(cursor.bump(), REPLACEMENT);
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn out_of_range_encoding_is_rejected() {
        // F4 90 80 80 encodes U+110000.
        let buf = SourceBuffer::from_bytes(vec![0xF4, 0x90, 0x80, 0x80]);
        let mut cursor = buf.cursor();
        assert_eq!(cursor.bump(), REPLACEMENT);
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn truncated_sequence_at_eof() {
        // E2 82 is the first two bytes of '€'.
        let buf = SourceBuffer::from_bytes(vec![0xE2, 0x82]);
        let mut cursor = buf.cursor();
        assert_eq!(cursor.bump(), REPLACEMENT);
        assert_eq!(cursor.pos(), 1);
        assert_eq!(cursor.bump(), REPLACEMENT);
        assert!(cursor.is_eof());
    }

    #[test]
    fn valid_boundary_codepoints_decode() {
        for (text, expected) in [
            ("\u{7F}", '\u{7F}'),
            ("\u{80}", '\u{80}'),
            ("\u{7FF}", '\u{7FF}'),
            ("\u{800}", '\u{800}'),
            ("\u{FFFF}", '\u{FFFF}'),
            ("\u{10000}", '\u{10000}'),
            ("\u{10FFFF}", '\u{10FFFF}'),
        ] {
            let buf = SourceBuffer::new(text);
            assert_eq!(buf.cursor().peek(), expected, "text {text:?}");
        }
    }

    // === eat_line ===

    #[test]
    fn eat_line_stops_at_newline() {
        let buf = SourceBuffer::new("// comment\nnext");
        let mut cursor = buf.cursor();
        cursor.eat_line();
        assert_eq!(cursor.peek(), '\n');
        assert_eq!(cursor.coords(), (1, 11));
    }

    #[test]
    fn eat_line_at_last_line_reaches_eof() {
        let buf = SourceBuffer::new("no newline");
        let mut cursor = buf.cursor();
        cursor.eat_line();
        assert!(cursor.is_eof());
        assert_eq!(cursor.coords(), (1, 11));
    }

    #[test]
    fn eat_line_counts_multibyte_columns_once() {
        let buf = SourceBuffer::new("ñño\n");
        let mut cursor = buf.cursor();
        cursor.eat_line();
        assert_eq!(cursor.coords(), (1, 4));
    }

    // === Lexeme extraction ===

    #[test]
    fn lexeme_extracts_byte_range() {
        let buf = SourceBuffer::new("let xs = 1");
        let cursor = buf.cursor();
        assert_eq!(cursor.lexeme(4, 6), "xs");
    }

    #[test]
    fn lexeme_replaces_malformed_bytes() {
        let buf = SourceBuffer::from_bytes(vec![b'a', 0xFF, b'b']);
        let cursor = buf.cursor();
        assert_eq!(cursor.lexeme(0, 3), "a\u{FFFD}b");
    }

    // === Properties ===

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn valid_text_decodes_to_its_chars(text in ".{0,64}") {
                let buf = SourceBuffer::new(&text);
                let mut cursor = buf.cursor();
                for expected in text.chars() {
                    prop_assert_eq!(cursor.bump(), expected);
                }
                prop_assert!(cursor.is_eof());
            }

            #[test]
            fn arbitrary_bytes_always_terminate(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
                let len = bytes.len() as u32;
                let buf = SourceBuffer::from_bytes(bytes);
                let mut cursor = buf.cursor();
                let mut steps = 0u32;
                while !cursor.is_eof() {
                    let before = cursor.pos();
                    cursor.bump();
                    prop_assert!(cursor.pos() > before);
                    steps += 1;
                }
                prop_assert!(steps <= len);
                prop_assert_eq!(cursor.pos(), len);
            }

            #[test]
            fn lexeme_of_valid_text_round_trips(text in ".{0,64}") {
                let buf = SourceBuffer::new(&text);
                let cursor = buf.cursor();
                let len = u32::try_from(text.len()).unwrap();
                prop_assert_eq!(cursor.lexeme(0, len), text);
            }
        }
    }
}
