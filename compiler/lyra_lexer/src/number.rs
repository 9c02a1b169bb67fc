//! The number literal state machine.
//!
//! One pass over the literal records validation flags; at the end exactly
//! one diagnostic is chosen by fixed priority, so a literal like `_1__2`
//! reports its most significant defect instead of a cascade. A malformed
//! literal is always consumed in full and becomes a single error token.

use lyra_diagnostic::DiagnosticId;
use lyra_lexer_core::classify::{is_digit_in, Base};
use lyra_lexer_core::Cursor;

use crate::TokenKind;

/// The single diagnostic selected for a malformed number literal.
pub(crate) struct NumberError {
    pub id: DiagnosticId,
    pub message: String,
    /// Follow-up hint accompanying an invalid-suffix error.
    pub hint: Option<&'static str>,
}

impl NumberError {
    fn new(id: DiagnosticId, message: impl Into<String>) -> Self {
        NumberError {
            id,
            message: message.into(),
            hint: None,
        }
    }
}

fn is_suffix_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scan a number literal whose first codepoint (`first`) has already been
/// consumed. Returns the token kind, or the one diagnostic to report.
pub(crate) fn scan_number(
    cursor: &mut Cursor<'_>,
    first: char,
) -> Result<TokenKind, NumberError> {
    let mut base = Base::Decimal;
    let mut is_float = false;

    // Validation flags, resolved by priority once scanning is done.
    let mut empty_digits = false;
    let mut invalid_digit = false;
    let mut empty_exponent = false;
    let mut leading_dot = false;
    let mut multiple_dots = false;
    let mut consecutive_underscore = false;
    let mut leading_underscore = false;
    let mut trailing_underscore = false;
    let mut underscore_before_prefix = false;
    let mut underscore_after_prefix = false;
    let mut underscore_before_dot = false;

    let mut invalid_suffix = String::new();

    // `.5` and `_5` reach here because number-start looks one codepoint
    // ahead; both are malformed, not identifiers or symbols.
    if first == '.' {
        leading_dot = true;
        cursor.bump();
    }
    if first == '_' {
        leading_underscore = true;
        cursor.bump();
    }

    // Underscore between `0` and a base prefix, e.g. `0_xFF`.
    if first == '0' && cursor.peek() == '_' {
        trailing_underscore = true;
        cursor.bump();
    }

    if first == '0' {
        match cursor.peek() {
            'x' | 'X' => {
                cursor.bump();
                base = Base::Hexadecimal;
            }
            'b' | 'B' => {
                cursor.bump();
                base = Base::Binary;
            }
            'o' | 'O' => {
                cursor.bump();
                base = Base::Octal;
            }
            _ => {}
        }
    }

    if base != Base::Decimal && trailing_underscore {
        underscore_before_prefix = true;
        trailing_underscore = false;
    }

    // Underscore right after the prefix, e.g. `0x_FF`.
    if base != Base::Decimal && cursor.peek() == '_' {
        underscore_after_prefix = true;
        cursor.bump();
    }

    // A prefixed literal needs at least one valid digit after the prefix.
    if base != Base::Decimal && !is_digit_in(cursor.peek(), base) {
        if is_suffix_char(cursor.peek()) {
            invalid_digit = true;
        } else {
            empty_digits = true;
        }
    }

    // Integer part.
    while is_digit_in(cursor.peek(), base) || cursor.peek() == '_' {
        if cursor.peek() == '_' {
            if cursor.peek_at(1) == '_' {
                consecutive_underscore = true;
            }
            trailing_underscore = true;
        } else {
            trailing_underscore = false;
        }
        cursor.bump();
    }

    // Fraction. The dot belongs to the number only when a digit follows,
    // so `1.foo()` stays Integer Dot Identifier.
    if base == Base::Decimal && cursor.peek() == '.' && cursor.peek_at(1).is_ascii_digit() {
        if trailing_underscore {
            trailing_underscore = false;
            underscore_before_dot = true;
        } else {
            is_float = true;
        }
        cursor.bump();
    }

    while cursor.peek().is_ascii_digit() || cursor.peek() == '_' {
        if cursor.peek() == '_' {
            if cursor.peek_at(1) == '_' {
                consecutive_underscore = true;
            }
            trailing_underscore = true;
        } else {
            trailing_underscore = false;
        }
        cursor.bump();
    }

    // A second fraction (`1.2.3`) is consumed whole so the literal stays
    // one error token.
    if is_float && cursor.peek() == '.' && cursor.peek_at(1).is_ascii_digit() {
        multiple_dots = true;
        cursor.bump();
        while cursor.peek().is_ascii_digit() || cursor.peek() == '.' {
            cursor.bump();
        }
    }

    // Exponent, decimal only.
    if base == Base::Decimal && matches!(cursor.peek(), 'e' | 'E') {
        cursor.bump();
        is_float = true;
        if matches!(cursor.peek(), '+' | '-') {
            cursor.bump();
        }
        if !cursor.peek().is_ascii_digit() {
            empty_exponent = true;
        }
        while cursor.peek().is_ascii_digit() {
            cursor.bump();
        }
    }

    // Integer suffixes, exact spellings only: i8/i16/i32/i64/i128 and the
    // u-forms. Anything else falls through to the invalid-suffix catch-all.
    if !is_float && matches!(cursor.peek(), 'i' | 'I' | 'u' | 'U') {
        let l1 = cursor.peek_at(1);
        let l2 = cursor.peek_at(2);
        let l3 = cursor.peek_at(3);
        if l1 == '8' {
            cursor.bump();
            cursor.bump();
        } else if l1 == '1' {
            if l2 == '6' {
                cursor.bump();
                cursor.bump();
                cursor.bump();
            } else if l2 == '2' && l3 == '8' {
                cursor.bump();
                cursor.bump();
                cursor.bump();
                cursor.bump();
            }
        } else if (l1 == '3' && l2 == '2') || (l1 == '6' && l2 == '4') {
            cursor.bump();
            cursor.bump();
            cursor.bump();
        }
    }

    // Float suffixes f32/f64. A bare `f` marks the literal float but is
    // left for the catch-all, producing the float-flavored suffix error.
    if matches!(cursor.peek(), 'f' | 'F') {
        is_float = true;
        let l1 = cursor.peek_at(1);
        let l2 = cursor.peek_at(2);
        if (l1 == '3' && l2 == '2') || (l1 == '6' && l2 == '4') {
            cursor.bump();
            cursor.bump();
            cursor.bump();
        }
    }

    // Whatever identifier-ish tail remains is an invalid suffix.
    while is_suffix_char(cursor.peek()) {
        invalid_suffix.push(cursor.bump());
    }

    let family = if is_float { "float" } else { "number" };

    if !invalid_suffix.is_empty() {
        let mut err = NumberError::new(
            DiagnosticId::NumberInvalidSuffix,
            format!("invalid suffix `{invalid_suffix}` for {family} literal"),
        );
        err.hint = Some(if is_float {
            "valid suffixes are `f32` and `f64`"
        } else {
            "valid suffix must be one of the numeric types (`i32`, `u32`, `i64`, `u64` etc.)"
        });
        return Err(err);
    }
    if empty_digits {
        return Err(NumberError::new(
            DiagnosticId::NumberEmptyDigits,
            "no valid digit found for number",
        ));
    }
    if leading_dot {
        return Err(NumberError::new(
            DiagnosticId::NumberLeadingDot,
            "float literals must have an integer part before decimal dot",
        ));
    }
    if multiple_dots {
        return Err(NumberError::new(
            DiagnosticId::NumberMultipleDots,
            format!("multiple decimal dots are not allowed in {family} literal"),
        ));
    }
    if invalid_digit {
        return Err(NumberError::new(
            DiagnosticId::NumberInvalidDigit,
            format!("invalid digit for a base {} literal", base.radix()),
        ));
    }
    if empty_exponent {
        return Err(NumberError::new(
            DiagnosticId::NumberEmptyExponent,
            "expected at least one digit in exponent",
        ));
    }
    if consecutive_underscore {
        return Err(NumberError::new(
            DiagnosticId::NumberConsecutiveUnderscore,
            format!("multiple consecutive underscores are not allowed in {family} literal"),
        ));
    }
    if leading_underscore {
        return Err(NumberError::new(
            DiagnosticId::NumberLeadingUnderscore,
            format!("leading underscores are not allowed in {family} literal"),
        ));
    }
    if trailing_underscore {
        return Err(NumberError::new(
            DiagnosticId::NumberTrailingUnderscore,
            format!("trailing underscores are not allowed in {family} literal"),
        ));
    }
    if underscore_before_prefix {
        return Err(NumberError::new(
            DiagnosticId::NumberUnderscoreBeforePrefix,
            "underscores are not allowed before base prefix in numeric literal",
        ));
    }
    if underscore_after_prefix {
        return Err(NumberError::new(
            DiagnosticId::NumberUnderscoreAfterPrefix,
            "underscores are not allowed after base prefix in numeric literal",
        ));
    }
    if underscore_before_dot {
        return Err(NumberError::new(
            DiagnosticId::NumberUnderscoreBeforeDot,
            "underscores are not allowed before decimal point in numeric literal",
        ));
    }

    Ok(if is_float {
        TokenKind::FloatLiteral
    } else {
        TokenKind::IntegerLiteral
    })
}
