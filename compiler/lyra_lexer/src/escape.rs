//! Escape sequence validation, shared by the char and string scanners.
//!
//! The validator consumes from the cursor (positioned just after the `\`)
//! and either resolves the escape to its codepoint or stops at the
//! offending character without consuming it. Errors are context-free;
//! callers map them to char-literal or string-literal diagnostic ids.

use lyra_diagnostic::DiagnosticId;
use lyra_lexer_core::Cursor;

/// Why an escape sequence failed to validate.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum EscapeError {
    /// `\q` and friends. Carries the unknown escape character.
    Unknown(char),
    /// `\x` with fewer than two hex digits before the closing quote.
    HexTooShort,
    /// `\x` ran into a non-hex character. Carries it.
    InvalidHexDigit(char),
    /// `\xHH` above 0x7F.
    HexOutOfRange,
    /// `\u` not followed by `{`.
    MissingUnicodeBrace,
    /// Non-hex character inside `\u{...}`. Carries it.
    InvalidUnicodeDigit(char),
    /// `\u{...` with no closing `}`.
    UnterminatedUnicode,
    /// `\u{}`.
    EmptyUnicode,
    /// More than six digits inside `\u{...}`.
    OverlongUnicode,
    /// Above U+10FFFF or inside the surrogate range.
    UnicodeOutOfRange,
}

impl EscapeError {
    pub fn message(self) -> String {
        match self {
            EscapeError::Unknown(c) => format!("unknown character escape: `{c}`"),
            EscapeError::HexTooShort => "numeric character escape is too short".into(),
            EscapeError::InvalidHexDigit(c) => {
                format!("invalid character in numeric character escape: `{c}`")
            }
            EscapeError::HexOutOfRange => "out of range hex escape".into(),
            EscapeError::MissingUnicodeBrace => "incorrect unicode escape sequence".into(),
            EscapeError::InvalidUnicodeDigit(c) => {
                format!("invalid character in unicode escape: `{c}`")
            }
            EscapeError::UnterminatedUnicode => "unterminated unicode escape".into(),
            EscapeError::EmptyUnicode => "empty unicode escape".into(),
            EscapeError::OverlongUnicode => "overlong unicode escape".into(),
            EscapeError::UnicodeOutOfRange => "unicode escape out of valid codepoint range".into(),
        }
    }

    /// Diagnostic id when the escape appeared in a char literal.
    pub fn char_id(self) -> DiagnosticId {
        use DiagnosticId::*;
        match self {
            EscapeError::Unknown(_) => CharEscapeUnknown,
            EscapeError::HexTooShort => CharEscapeHexTooShort,
            EscapeError::InvalidHexDigit(_) => CharEscapeInvalidHexDigit,
            EscapeError::HexOutOfRange => CharEscapeHexOutOfRange,
            EscapeError::MissingUnicodeBrace => CharEscapeMissingUnicodeBrace,
            EscapeError::InvalidUnicodeDigit(_) => CharEscapeInvalidUnicodeDigit,
            EscapeError::UnterminatedUnicode => CharEscapeUnterminatedUnicode,
            EscapeError::EmptyUnicode => CharEscapeEmptyUnicode,
            EscapeError::OverlongUnicode => CharEscapeOverlongUnicode,
            EscapeError::UnicodeOutOfRange => CharEscapeUnicodeOutOfRange,
        }
    }

    /// Diagnostic id when the escape appeared in a string literal.
    pub fn string_id(self) -> DiagnosticId {
        use DiagnosticId::*;
        match self {
            EscapeError::Unknown(_) => StringEscapeUnknown,
            EscapeError::HexTooShort => StringEscapeHexTooShort,
            EscapeError::InvalidHexDigit(_) => StringEscapeInvalidHexDigit,
            EscapeError::HexOutOfRange => StringEscapeHexOutOfRange,
            EscapeError::MissingUnicodeBrace => StringEscapeMissingUnicodeBrace,
            EscapeError::InvalidUnicodeDigit(_) => StringEscapeInvalidUnicodeDigit,
            EscapeError::UnterminatedUnicode => StringEscapeUnterminatedUnicode,
            EscapeError::EmptyUnicode => StringEscapeEmptyUnicode,
            EscapeError::OverlongUnicode => StringEscapeOverlongUnicode,
            EscapeError::UnicodeOutOfRange => StringEscapeUnicodeOutOfRange,
        }
    }
}

/// Validate one escape sequence with the cursor positioned after the `\`.
///
/// On success the full sequence is consumed and the resolved codepoint
/// returned. On failure the offending character is left unconsumed so the
/// enclosing literal scanner can keep looking for its closing quote.
pub fn scan_escape(cursor: &mut Cursor<'_>) -> Result<char, EscapeError> {
    match cursor.peek() {
        '\\' => consume_as(cursor, '\\'),
        '\'' => consume_as(cursor, '\''),
        '"' => consume_as(cursor, '"'),
        'n' => consume_as(cursor, '\n'),
        'r' => consume_as(cursor, '\r'),
        't' => consume_as(cursor, '\t'),
        'b' => consume_as(cursor, '\u{8}'),
        'f' => consume_as(cursor, '\u{C}'),
        'v' => consume_as(cursor, '\u{B}'),
        '0' => consume_as(cursor, '\0'),
        'x' => {
            cursor.bump();
            scan_hex_escape(cursor)
        }
        'u' => {
            cursor.bump();
            scan_unicode_escape(cursor)
        }
        other => Err(EscapeError::Unknown(other)),
    }
}

fn consume_as(cursor: &mut Cursor<'_>, resolved: char) -> Result<char, EscapeError> {
    cursor.bump();
    Ok(resolved)
}

/// `\xHH`, exactly two hex digits, value at most 0x7F.
fn scan_hex_escape(cursor: &mut Cursor<'_>) -> Result<char, EscapeError> {
    let mut value: u32 = 0;
    for _ in 0..2 {
        let c = cursor.peek();
        if c == '\'' || c == '"' {
            return Err(EscapeError::HexTooShort);
        }
        let Some(digit) = c.to_digit(16) else {
            return Err(EscapeError::InvalidHexDigit(c));
        };
        cursor.bump();
        value = value * 16 + digit;
    }
    if value > 0x7F {
        return Err(EscapeError::HexOutOfRange);
    }
    char::from_u32(value).ok_or(EscapeError::HexOutOfRange)
}

/// `\u{N...}`, one to six hex digits, a valid scalar value.
fn scan_unicode_escape(cursor: &mut Cursor<'_>) -> Result<char, EscapeError> {
    if !cursor.matches('{') {
        return Err(EscapeError::MissingUnicodeBrace);
    }

    let mut value: u32 = 0;
    let mut digits = 0u32;
    // Quote characters end the digit run so a forgotten `}` inside a
    // literal fails as unterminated instead of swallowing the quote.
    while !cursor.is_eof() {
        let c = cursor.peek();
        if c == '\'' || c == '"' || c == '}' {
            break;
        }
        let Some(digit) = c.to_digit(16) else {
            return Err(EscapeError::InvalidUnicodeDigit(c));
        };
        cursor.bump();
        // Saturate instead of overflowing; the digit count check below
        // rejects anything past six digits anyway.
        value = value.saturating_mul(16).saturating_add(digit);
        digits += 1;
    }

    if !cursor.matches('}') {
        return Err(EscapeError::UnterminatedUnicode);
    }

    if digits == 0 {
        return Err(EscapeError::EmptyUnicode);
    }
    if digits > 6 {
        return Err(EscapeError::OverlongUnicode);
    }
    if value > 0x10_FFFF {
        return Err(EscapeError::UnicodeOutOfRange);
    }
    char::from_u32(value).ok_or(EscapeError::UnicodeOutOfRange)
}
