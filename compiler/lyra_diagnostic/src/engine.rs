use std::io::{self, Write};

use lyra_source::SourceTable;

use crate::Diagnostic;

/// Destination for diagnostics.
///
/// The lexer reports through this trait so it never decides how (or
/// whether) diagnostics are stored or rendered.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Sink that drops every diagnostic. Useful when only the tokens matter.
#[derive(Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Collecting sink used by the compiler driver.
///
/// Diagnostics are kept in report order; the driver queries
/// [`DiagnosticEngine::has_errors`] for the exit code and calls
/// [`DiagnosticEngine::print`] to render everything at the end.
#[derive(Default)]
pub struct DiagnosticEngine {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// All diagnostics reported so far, in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether any error-or-worse diagnostic was reported.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    /// Render every diagnostic with its source line and a caret marker:
    ///
    /// ```text
    /// error[E3001]: empty char literal
    ///  --> main.lyr:2:5
    ///   |
    /// 2 | let c = '';
    ///   |     ^
    /// ```
    pub fn print(&self, sources: &dyn SourceTable, out: &mut dyn Write) -> io::Result<()> {
        for d in &self.diagnostics {
            writeln!(out, "{}[{}]: {}", d.severity, d.code(), d.message)?;
            let path = sources
                .path(d.span.file)
                .map_or_else(|| "<unknown>".into(), |p| p.display().to_string());
            writeln!(out, " --> {}:{}:{}", path, d.span.line, d.span.column)?;

            if let Some(line) = sources.line(d.span.file, d.span.line) {
                let line_no = d.span.line.to_string();
                let gutter = " ".repeat(line_no.len());
                writeln!(out, "{gutter} |")?;
                writeln!(out, "{line_no} | {line}")?;
                // Column is in codepoints, so the caret pad is too.
                let pad = " ".repeat(d.span.column.saturating_sub(1) as usize);
                writeln!(out, "{gutter} | {pad}^")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

impl DiagnosticSink for DiagnosticEngine {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
