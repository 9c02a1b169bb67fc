//! The operator/punctuation table.
//!
//! Built once behind a `OnceLock` and never mutated. The symbol scanner
//! relies on one structural property: every prefix of a multi-codepoint
//! spelling is itself a spelling in the table (`<` and `<<` exist, so
//! maximal munch can grow `<` into `<<=` one codepoint at a time).

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::TokenKind;

static SYMBOLS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();

fn table() -> &'static FxHashMap<&'static str, TokenKind> {
    SYMBOLS.get_or_init(|| {
        use TokenKind::*;
        let entries: &[(&str, TokenKind)] = &[
            ("=", Assign),
            ("+", Plus),
            ("-", Minus),
            ("*", Star),
            ("/", Slash),
            ("%", Percent),
            ("++", PlusPlus),
            ("--", MinusMinus),
            ("&", Amp),
            ("|", Pipe),
            ("^", Caret),
            ("~", Tilde),
            ("<<", Shl),
            (">>", Shr),
            ("==", EqEq),
            ("!=", NotEq),
            ("<", Lt),
            (">", Gt),
            ("<=", LtEq),
            (">=", GtEq),
            ("&&", AndAnd),
            ("||", OrOr),
            ("!", Bang),
            ("?", Question),
            ("+=", PlusAssign),
            ("-=", MinusAssign),
            ("*=", StarAssign),
            ("/=", SlashAssign),
            ("%=", PercentAssign),
            ("&=", AmpAssign),
            ("|=", PipeAssign),
            ("^=", CaretAssign),
            ("<<=", ShlAssign),
            (">>=", ShrAssign),
            (".", Dot),
            ("->", Arrow),
            (",", Comma),
            (":", Colon),
            (";", Semicolon),
            ("(", LParen),
            (")", RParen),
            ("{", LBrace),
            ("}", RBrace),
            ("[", LBracket),
            ("]", RBracket),
        ];
        entries.iter().copied().collect()
    })
}

/// Token kind for an exact symbol spelling.
pub fn lookup(spelling: &str) -> Option<TokenKind> {
    table().get(spelling).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_codepoint_symbols_resolve() {
        assert_eq!(lookup("="), Some(TokenKind::Assign));
        assert_eq!(lookup("."), Some(TokenKind::Dot));
        assert_eq!(lookup("?"), Some(TokenKind::Question));
        assert_eq!(lookup("{"), Some(TokenKind::LBrace));
    }

    #[test]
    fn compound_symbols_resolve() {
        assert_eq!(lookup("<<="), Some(TokenKind::ShlAssign));
        assert_eq!(lookup(">>="), Some(TokenKind::ShrAssign));
        assert_eq!(lookup("->"), Some(TokenKind::Arrow));
        assert_eq!(lookup("++"), Some(TokenKind::PlusPlus));
        assert_eq!(lookup("^="), Some(TokenKind::CaretAssign));
    }

    #[test]
    fn unknown_spellings_miss() {
        assert_eq!(lookup("@"), None);
        assert_eq!(lookup("$"), None);
        assert_eq!(lookup("#"), None);
        assert_eq!(lookup("=>"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn every_prefix_of_every_spelling_is_a_spelling() {
        for spelling in table().keys() {
            let mut prefix = String::new();
            for c in spelling.chars() {
                prefix.push(c);
                assert!(
                    lookup(&prefix).is_some(),
                    "prefix `{prefix}` of `{spelling}` missing from table"
                );
            }
        }
    }
}
