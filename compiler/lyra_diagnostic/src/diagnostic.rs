use std::fmt;

use lyra_source::Span;

use crate::{DiagnosticId, Severity};

/// A single reported condition: what went wrong, how bad, and where.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub id: DiagnosticId,
    pub severity: Severity,
    pub span: Span,
    pub message: String,
}

impl Diagnostic {
    /// Build a diagnostic with the id's default severity.
    pub fn new(id: DiagnosticId, span: Span, message: impl Into<String>) -> Self {
        Diagnostic {
            id,
            severity: id.severity(),
            span,
            message: message.into(),
        }
    }

    /// Override the default severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Stable code of the underlying id, e.g. `"E2002"`.
    pub fn code(&self) -> &'static str {
        self.id.code()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code(), self.message)
    }
}
