use lyra_diagnostic::{Diagnostic, DiagnosticId, DiagnosticSink};
use lyra_lexer_core::classify::{is_ident_continue, is_ident_start, is_number_start, is_whitespace};
use lyra_lexer_core::{Cursor, SourceBuffer};
use lyra_source::{FileId, Span};
use tracing::{debug, trace};
use unicode_normalization::UnicodeNormalization;

use crate::escape::{scan_escape, EscapeError};
use crate::number::scan_number;
use crate::{keywords, symbols, Token, TokenKind};

/// Single-pass tokenizer.
///
/// One cursor, one forward scan, no backtracking beyond the copyable
/// cursor. Every iteration of [`Lexer::tokenize`] consumes at least one
/// codepoint, so the lexer terminates on any finite input and always
/// produces a stream ending in exactly one `Eof` token.
pub struct Lexer<'src> {
    file: FileId,
    cursor: Cursor<'src>,
    tokens: Vec<Token>,
}

/// Lex `source`, reporting diagnostics into `sink`.
pub fn lex(file: FileId, source: &str, sink: &mut dyn DiagnosticSink) -> Vec<Token> {
    let buffer = SourceBuffer::new(source);
    Lexer::new(file, &buffer).tokenize(sink)
}

impl<'src> Lexer<'src> {
    pub fn new(file: FileId, buffer: &'src SourceBuffer) -> Self {
        Lexer {
            file,
            cursor: buffer.cursor(),
            tokens: Vec::new(),
        }
    }

    /// Run the scan loop to end of input and return the token stream.
    pub fn tokenize(mut self, sink: &mut dyn DiagnosticSink) -> Vec<Token> {
        while !self.cursor.is_eof() {
            let start = self.cursor.pos();
            let (line, column) = self.cursor.coords();
            let span = Span::new(self.file, line, column);
            let first = self.cursor.bump();

            if is_whitespace(first) {
                continue;
            }
            if first == '/' && self.cursor.peek() == '/' {
                self.cursor.bump();
                self.line_comment(span, start);
            } else if first == '/' && self.cursor.peek() == '*' {
                self.cursor.bump();
                self.block_comment(span, start, sink);
            } else if is_number_start(first, self.cursor.peek()) {
                // Checked before identifier-start so `_123` is scanned as
                // a number (and diagnosed there) while `_foo` stays an
                // identifier.
                self.number(span, start, first, sink);
            } else if is_ident_start(first) {
                self.identifier(span, start);
            } else if first == '\'' {
                self.char_literal(span, start, sink);
            } else if first == '"' {
                self.string_literal(span, start, sink);
            } else {
                self.symbol(span, first, sink);
            }
        }

        let (line, column) = self.cursor.coords();
        self.push(TokenKind::Eof, Span::new(self.file, line, column), String::new());
        debug!(tokens = self.tokens.len(), "lexed source file");
        self.tokens
    }

    fn push(&mut self, kind: TokenKind, span: Span, lexeme: String) {
        trace!(?kind, line = span.line, column = span.column, "token");
        self.tokens.push(Token::new(kind, span, lexeme));
    }

    fn push_spanned(&mut self, kind: TokenKind, span: Span, start: u32) {
        let lexeme = self.cursor.lexeme(start, self.cursor.pos());
        self.push(kind, span, lexeme);
    }

    // === Comments ===

    fn line_comment(&mut self, span: Span, start: u32) {
        let doc = if self.cursor.peek() == '/' {
            self.cursor.bump();
            Some(TokenKind::DocLineOuter)
        } else if self.cursor.peek() == '!' {
            self.cursor.bump();
            Some(TokenKind::DocLineInner)
        } else {
            None
        };

        self.cursor.eat_line();

        // Plain line comments vanish; doc comments are kept for extraction.
        if let Some(kind) = doc {
            self.push_spanned(kind, span, start);
        }
    }

    fn block_comment(&mut self, span: Span, start: u32, sink: &mut dyn DiagnosticSink) {
        let mut depth = 1u32;

        // `/**/` is an empty plain comment, not a doc comment, hence the
        // immediate-close check.
        let doc = if self.cursor.peek() == '*' && self.cursor.peek_at(1) != '/' {
            self.cursor.bump();
            Some(TokenKind::DocBlockOuter)
        } else if self.cursor.peek() == '!' {
            self.cursor.bump();
            Some(TokenKind::DocBlockInner)
        } else {
            None
        };

        while !self.cursor.is_eof() {
            if self.cursor.peek() == '/' && self.cursor.peek_at(1) == '*' {
                self.cursor.bump();
                self.cursor.bump();
                depth += 1;
            } else if self.cursor.peek() == '*' && self.cursor.peek_at(1) == '/' {
                self.cursor.bump();
                self.cursor.bump();
                depth -= 1;
                if depth == 0 {
                    break;
                }
            } else {
                self.cursor.bump();
            }
        }

        if depth > 0 {
            let flavor = if doc.is_some() { "doc" } else { "block" };
            sink.report(Diagnostic::new(
                DiagnosticId::BlockCommentUnterminated,
                span,
                format!("unterminated {flavor} comment"),
            ));
            self.push_spanned(TokenKind::Error, span, start);
            return;
        }

        if let Some(kind) = doc {
            self.push_spanned(kind, span, start);
        }
    }

    // === Identifiers and keywords ===

    fn identifier(&mut self, span: Span, start: u32) {
        while !self.cursor.is_eof() && is_ident_continue(self.cursor.peek()) {
            self.cursor.bump();
        }

        // Normalize at lex time so canonically equivalent spellings
        // compare equal downstream and match keywords consistently.
        let raw = self.cursor.lexeme(start, self.cursor.pos());
        let normalized: String = raw.nfkc().collect();

        let kind = keywords::lookup(&normalized).unwrap_or(TokenKind::Identifier);
        self.push(kind, span, normalized);
    }

    // === Literals ===

    fn number(&mut self, span: Span, start: u32, first: char, sink: &mut dyn DiagnosticSink) {
        match scan_number(&mut self.cursor, first) {
            Ok(kind) => self.push_spanned(kind, span, start),
            Err(err) => {
                sink.report(Diagnostic::new(err.id, span, err.message));
                if let Some(hint) = err.hint {
                    sink.report(Diagnostic::new(DiagnosticId::NumberSuffixHint, span, hint));
                }
                self.push_spanned(TokenKind::Error, span, start);
            }
        }
    }

    fn char_literal(&mut self, span: Span, start: u32, sink: &mut dyn DiagnosticSink) {
        if self.cursor.matches('\'') {
            sink.report(Diagnostic::new(
                DiagnosticId::CharEmpty,
                span,
                "empty char literal",
            ));
            self.push_spanned(TokenKind::Error, span, start);
            return;
        }

        let mut escape_error: Option<EscapeError> = None;
        if self.cursor.peek() == '\\' {
            self.cursor.bump();
            if let Err(err) = scan_escape(&mut self.cursor) {
                escape_error = Some(err);
            }
        } else {
            self.cursor.bump();
        }

        // Look for the closing quote; anything before it past the first
        // codepoint makes the literal multi-codepoint.
        let mut multi_codepoint = false;
        let mut unterminated = false;
        if !self.cursor.matches('\'') {
            while !self.cursor.is_eof()
                && self.cursor.peek() != '\n'
                && self.cursor.peek() != '\''
            {
                self.cursor.bump();
            }
            if self.cursor.matches('\'') {
                multi_codepoint = true;
            } else {
                unterminated = true;
            }
        }

        // Unterminated beats escape errors beats multi-codepoint.
        if unterminated {
            sink.report(Diagnostic::new(
                DiagnosticId::CharUnterminated,
                span,
                "unterminated character literal",
            ));
            self.push_spanned(TokenKind::Error, span, start);
            return;
        }
        if let Some(err) = escape_error {
            sink.report(Diagnostic::new(err.char_id(), span, err.message()));
            self.push_spanned(TokenKind::Error, span, start);
            return;
        }
        if multi_codepoint {
            sink.report(Diagnostic::new(
                DiagnosticId::CharMultiCodepoint,
                span,
                "character literal may only contain one codepoint",
            ));
            self.push_spanned(TokenKind::Error, span, start);
            return;
        }

        self.push_spanned(TokenKind::CharLiteral, span, start);
    }

    fn string_literal(&mut self, span: Span, start: u32, sink: &mut dyn DiagnosticSink) {
        let mut escape_errors: Vec<EscapeError> = Vec::new();

        // Keep scanning past bad escapes; the closing quote decides
        // whether they get reported at all.
        while !self.cursor.is_eof() && self.cursor.peek() != '\n' && self.cursor.peek() != '"' {
            if self.cursor.peek() == '\\' {
                self.cursor.bump();
                if let Err(err) = scan_escape(&mut self.cursor) {
                    escape_errors.push(err);
                }
            } else {
                self.cursor.bump();
            }
        }

        if !self.cursor.matches('"') {
            // Reported at the opening quote: that is where the literal
            // the user forgot to close begins.
            sink.report(Diagnostic::new(
                DiagnosticId::StringUnterminated,
                span,
                "unterminated string literal",
            ));
            self.push_spanned(TokenKind::Error, span, start);
            return;
        }

        if !escape_errors.is_empty() {
            for err in &escape_errors {
                sink.report(Diagnostic::new(err.string_id(), span, err.message()));
            }
            self.push_spanned(TokenKind::Error, span, start);
            return;
        }

        self.push_spanned(TokenKind::StringLiteral, span, start);
    }

    // === Symbols ===

    fn symbol(&mut self, span: Span, first: char, sink: &mut dyn DiagnosticSink) {
        let mut spelling = String::from(first);

        let Some(mut kind) = symbols::lookup(&spelling) else {
            sink.report(Diagnostic::new(
                DiagnosticId::UnrecognizedSymbol,
                span,
                format!("unrecognized symbol `{first}` (U+{:04X})", u32::from(first)),
            ));
            self.push(TokenKind::Error, span, spelling);
            return;
        };

        // Maximal munch: grow the spelling while the extension is still in
        // the table, so `<` `<<` `<<=` collapse into one ShlAssign.
        while !self.cursor.is_eof() {
            let mut extended = spelling.clone();
            extended.push(self.cursor.peek());
            match symbols::lookup(&extended) {
                Some(extended_kind) => {
                    self.cursor.bump();
                    spelling = extended;
                    kind = extended_kind;
                }
                None => break,
            }
        }

        self.push(kind, span, spelling);
    }
}
