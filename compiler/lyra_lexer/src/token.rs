use lyra_source::Span;

/// Every kind of token the lexer can produce.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Keywords
    Let,
    Const,
    Fn,
    Return,
    If,
    Elif,
    Else,
    While,
    Break,
    Continue,
    For,
    True,
    False,
    Enum,
    Null,
    Import,
    Export,

    // Primitive type names
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
    F16,
    F32,
    F64,
    Char,
    String,
    Bool,
    Void,

    // Operators
    Assign,       // =
    Plus,         // +
    Minus,        // -
    Star,         // *
    Slash,        // /
    Percent,      // %
    PlusPlus,     // ++
    MinusMinus,   // --
    Amp,          // &
    Pipe,         // |
    Caret,        // ^
    Tilde,        // ~
    Shl,          // <<
    Shr,          // >>
    EqEq,         // ==
    NotEq,        // !=
    Lt,           // <
    Gt,           // >
    LtEq,         // <=
    GtEq,         // >=
    AndAnd,       // &&
    OrOr,         // ||
    Bang,         // !
    Question,     // ?

    // Compound assignment
    PlusAssign,    // +=
    MinusAssign,   // -=
    StarAssign,    // *=
    SlashAssign,   // /=
    PercentAssign, // %=
    AmpAssign,     // &=
    PipeAssign,    // |=
    CaretAssign,   // ^=
    ShlAssign,     // <<=
    ShrAssign,     // >>=

    // Access
    Dot,   // .
    Arrow, // ->

    // Punctuation
    Comma,
    Colon,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Literals
    IntegerLiteral,
    FloatLiteral,
    CharLiteral,
    StringLiteral,

    Identifier,

    // Doc comments are kept as tokens for later extraction
    DocLineOuter,  // ///
    DocLineInner,  // //!
    DocBlockOuter, // /** */
    DocBlockInner, // /*! */

    Error,
    Eof,
}

impl TokenKind {
    pub fn is_keyword(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Let | Const
                | Fn
                | Return
                | If
                | Elif
                | Else
                | While
                | Break
                | Continue
                | For
                | True
                | False
                | Enum
                | Null
                | Import
                | Export
        )
    }

    pub fn is_primitive_type(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            U8 | U16
                | U32
                | U64
                | U128
                | I8
                | I16
                | I32
                | I64
                | I128
                | F16
                | F32
                | F64
                | Char
                | String
                | Bool
                | Void
        )
    }

    pub fn is_literal(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            IntegerLiteral | FloatLiteral | CharLiteral | StringLiteral
        )
    }

    pub fn is_doc_comment(self) -> bool {
        use TokenKind::*;
        matches!(self, DocLineOuter | DocLineInner | DocBlockOuter | DocBlockInner)
    }
}

/// A lexed token.
///
/// `span` is the token's start position, recorded before its first
/// codepoint was consumed. `lexeme` is the exact source text, except for
/// identifiers and keywords where it is the NFKC-normalized form, and for
/// `Eof` where it is empty.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            span,
            lexeme: lexeme.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_predicates() {
        assert!(TokenKind::Elif.is_keyword());
        assert!(!TokenKind::U8.is_keyword());
        assert!(TokenKind::U8.is_primitive_type());
        assert!(TokenKind::FloatLiteral.is_literal());
        assert!(TokenKind::DocBlockInner.is_doc_comment());
        assert!(!TokenKind::Error.is_literal());
        assert!(!TokenKind::Eof.is_keyword());
    }
}
