//! Hand-written tokenizer for the Lyra compiler.
//!
//! The lexer makes one forward pass over a source buffer and produces a
//! `Vec<Token>` terminated by exactly one `Eof` token. Malformed input
//! never aborts the scan: each defect becomes an `Error` token plus a
//! coded diagnostic reported through a
//! [`DiagnosticSink`](lyra_diagnostic::DiagnosticSink), and lexing
//! continues at the next codepoint.
//!
//! ```
//! use lyra_diagnostic::DiagnosticEngine;
//! use lyra_lexer::{lex, TokenKind};
//! use lyra_source::FileId;
//!
//! let mut engine = DiagnosticEngine::new();
//! let tokens = lex(FileId::from_index(0), "let x = 1;", &mut engine);
//! assert_eq!(tokens.first().map(|t| t.kind), Some(TokenKind::Let));
//! assert!(!engine.has_errors());
//! ```

mod escape;
mod keywords;
mod lexer;
mod number;
mod symbols;
mod token;

pub use escape::EscapeError;
pub use keywords::lookup as keyword_lookup;
pub use lexer::{lex, Lexer};
pub use symbols::lookup as symbol_lookup;
pub use token::{Token, TokenKind};
