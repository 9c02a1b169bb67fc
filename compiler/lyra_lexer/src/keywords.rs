//! Keyword and primitive-type-name lookup.
//!
//! The table is a length-bucketed `match` instead of a hash map: the
//! compiler turns each arm into a handful of comparisons, and lookup
//! happens once per identifier.

use crate::TokenKind;

/// Map normalized identifier text to a keyword token kind.
///
/// Expects NFKC-normalized input; the identifier scanner normalizes
/// before calling.
pub fn lookup(text: &str) -> Option<TokenKind> {
    use TokenKind::*;
    let kind = match text.len() {
        2 => match text {
            "fn" => Fn,
            "if" => If,
            "u8" => U8,
            "i8" => I8,
            _ => return None,
        },
        3 => match text {
            "let" => Let,
            "for" => For,
            "u16" => U16,
            "u32" => U32,
            "u64" => U64,
            "i16" => I16,
            "i32" => I32,
            "i64" => I64,
            "f16" => F16,
            "f32" => F32,
            "f64" => F64,
            _ => return None,
        },
        4 => match text {
            "elif" => Elif,
            "else" => Else,
            "true" => True,
            "enum" => Enum,
            "null" => Null,
            "u128" => U128,
            "i128" => I128,
            "char" => Char,
            "bool" => Bool,
            "void" => Void,
            _ => return None,
        },
        5 => match text {
            "const" => Const,
            "while" => While,
            "break" => Break,
            "false" => False,
            _ => return None,
        },
        6 => match text {
            "return" => Return,
            "import" => Import,
            "export" => Export,
            "string" => String,
            _ => return None,
        },
        8 => match text {
            "continue" => Continue,
            _ => return None,
        },
        _ => return None,
    };
    Some(kind)
}
