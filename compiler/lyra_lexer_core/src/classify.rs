//! Character classification for the scanners.
//!
//! Identifier classes follow Unicode UAX #31 (XID_Start / XID_Continue).
//! Number-start is a two-codepoint decision so that `_123` and `.5` route
//! to the number scanner (and get number diagnostics) while `_foo` stays
//! an identifier and a bare `.` stays a symbol.

/// Numeric base of a number literal.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }
}

/// ASCII fast path for identifier continuation.
static IS_ASCII_IDENT_CONTINUE: [bool; 128] = {
    let mut table = [false; 128];
    let mut b = 0usize;
    while b < 128 {
        let c = b as u8;
        table[b] = c == b'_' || c.is_ascii_alphanumeric();
        b += 1;
    }
    table
};

pub fn is_ident_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

pub fn is_ident_continue(c: char) -> bool {
    if c.is_ascii() {
        return IS_ASCII_IDENT_CONTINUE[c as usize];
    }
    unicode_ident::is_xid_continue(c)
}

/// Whether `first` (with `second` as lookahead) opens a number literal.
///
/// A digit always does. `.` or `_` only when immediately followed by a
/// decimal digit, so malformed forms like `.5` and `_123` are scanned as
/// numbers and diagnosed there.
pub fn is_number_start(first: char, second: char) -> bool {
    first.is_ascii_digit() || ((first == '.' || first == '_') && second.is_ascii_digit())
}

pub fn is_digit_in(c: char, base: Base) -> bool {
    c.is_digit(base.radix())
}

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\u{B}' | '\u{C}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underscore_starts_identifiers() {
        assert!(is_ident_start('_'));
        assert!(is_ident_start('a'));
        assert!(is_ident_start('ñ'));
        assert!(!is_ident_start('1'));
        assert!(!is_ident_start('$'));
    }

    #[test]
    fn identifier_continue_accepts_digits() {
        assert!(is_ident_continue('0'));
        assert!(is_ident_continue('_'));
        assert!(is_ident_continue('z'));
        assert!(is_ident_continue('者'));
        assert!(!is_ident_continue(' '));
        assert!(!is_ident_continue('-'));
    }

    #[test]
    fn ascii_table_matches_slow_path() {
        for b in 0u8..128 {
            let c = b as char;
            let expected = c == '_' || unicode_ident::is_xid_continue(c);
            assert_eq!(is_ident_continue(c), expected, "byte {b:#x}");
        }
    }

    #[test]
    fn number_start_needs_digit_after_dot_or_underscore() {
        assert!(is_number_start('7', 'x'));
        assert!(is_number_start('.', '5'));
        assert!(is_number_start('_', '1'));
        assert!(!is_number_start('.', 'a'));
        assert!(!is_number_start('_', 'f'));
        assert!(!is_number_start('x', '1'));
    }

    #[test]
    fn whitespace_includes_vertical_tab_and_form_feed() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\r'));
        assert!(is_whitespace('\n'));
        assert!(is_whitespace('\u{B}'));
        assert!(is_whitespace('\u{C}'));
        assert!(!is_whitespace('\u{A0}'));
        assert!(!is_whitespace('a'));
    }

    #[test]
    fn digits_respect_base() {
        assert!(is_digit_in('1', Base::Binary));
        assert!(!is_digit_in('2', Base::Binary));
        assert!(is_digit_in('7', Base::Octal));
        assert!(!is_digit_in('8', Base::Octal));
        assert!(is_digit_in('9', Base::Decimal));
        assert!(!is_digit_in('a', Base::Decimal));
        assert!(is_digit_in('f', Base::Hexadecimal));
        assert!(is_digit_in('F', Base::Hexadecimal));
        assert!(!is_digit_in('g', Base::Hexadecimal));
    }
}
