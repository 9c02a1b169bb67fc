use std::fmt;

/// Severity of a diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Severity {
    Note,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// Whether this severity should fail the compilation.
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Error | Severity::Fatal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Note => write!(f, "note"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
            Severity::Fatal => write!(f, "fatal"),
        }
    }
}

/// Identity of a reportable condition.
///
/// Each id maps to a stable code so errors stay searchable across releases.
/// Lexical diagnostics occupy `E1xxx` (comments, symbols), `E2xxx` (number
/// literals), `E30xx` (char literals), and `E31xx` (string literals).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticId {
    BlockCommentUnterminated,
    UnrecognizedSymbol,

    // Number literals
    NumberInvalidSuffix,
    NumberSuffixHint,
    NumberEmptyDigits,
    NumberLeadingDot,
    NumberMultipleDots,
    NumberInvalidDigit,
    NumberEmptyExponent,
    NumberConsecutiveUnderscore,
    NumberLeadingUnderscore,
    NumberTrailingUnderscore,
    NumberUnderscoreBeforePrefix,
    NumberUnderscoreAfterPrefix,
    NumberUnderscoreBeforeDot,

    // Char literals
    CharEmpty,
    CharMultiCodepoint,
    CharUnterminated,
    CharEscapeUnknown,
    CharEscapeHexTooShort,
    CharEscapeInvalidHexDigit,
    CharEscapeHexOutOfRange,
    CharEscapeMissingUnicodeBrace,
    CharEscapeInvalidUnicodeDigit,
    CharEscapeUnterminatedUnicode,
    CharEscapeEmptyUnicode,
    CharEscapeOverlongUnicode,
    CharEscapeUnicodeOutOfRange,

    // String literals
    StringUnterminated,
    StringEscapeUnknown,
    StringEscapeHexTooShort,
    StringEscapeInvalidHexDigit,
    StringEscapeHexOutOfRange,
    StringEscapeMissingUnicodeBrace,
    StringEscapeInvalidUnicodeDigit,
    StringEscapeUnterminatedUnicode,
    StringEscapeEmptyUnicode,
    StringEscapeOverlongUnicode,
    StringEscapeUnicodeOutOfRange,
}

impl DiagnosticId {
    /// Stable code for this id.
    pub fn code(self) -> &'static str {
        use DiagnosticId::*;
        match self {
            BlockCommentUnterminated => "E1001",
            UnrecognizedSymbol => "E1010",

            NumberInvalidSuffix => "E2001",
            NumberEmptyDigits => "E2002",
            NumberLeadingDot => "E2003",
            NumberMultipleDots => "E2004",
            NumberInvalidDigit => "E2005",
            NumberEmptyExponent => "E2006",
            NumberConsecutiveUnderscore => "E2007",
            NumberLeadingUnderscore => "E2008",
            NumberTrailingUnderscore => "E2009",
            NumberUnderscoreBeforePrefix => "E2010",
            NumberUnderscoreAfterPrefix => "E2011",
            NumberUnderscoreBeforeDot => "E2012",
            // Hints share the code of the error they accompany.
            NumberSuffixHint => "E2001",

            CharEmpty => "E3001",
            CharMultiCodepoint => "E3002",
            CharUnterminated => "E3003",
            CharEscapeUnknown => "E3004",
            CharEscapeHexTooShort => "E3005",
            CharEscapeInvalidHexDigit => "E3006",
            CharEscapeHexOutOfRange => "E3007",
            CharEscapeMissingUnicodeBrace => "E3008",
            CharEscapeInvalidUnicodeDigit => "E3009",
            CharEscapeUnterminatedUnicode => "E3010",
            CharEscapeEmptyUnicode => "E3011",
            CharEscapeOverlongUnicode => "E3012",
            CharEscapeUnicodeOutOfRange => "E3013",

            StringUnterminated => "E3101",
            StringEscapeUnknown => "E3102",
            StringEscapeHexTooShort => "E3103",
            StringEscapeInvalidHexDigit => "E3104",
            StringEscapeHexOutOfRange => "E3105",
            StringEscapeMissingUnicodeBrace => "E3106",
            StringEscapeInvalidUnicodeDigit => "E3107",
            StringEscapeUnterminatedUnicode => "E3108",
            StringEscapeEmptyUnicode => "E3109",
            StringEscapeOverlongUnicode => "E3110",
            StringEscapeUnicodeOutOfRange => "E3111",
        }
    }

    /// Default severity. Suffix hints are advisory; everything else is a
    /// hard error.
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticId::NumberSuffixHint => Severity::Warning,
            _ => Severity::Error,
        }
    }
}
