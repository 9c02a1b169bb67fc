//! Diagnostics for the Lyra compiler.
//!
//! Every reportable condition has a [`DiagnosticId`] with a stable,
//! searchable code (`E2002`) and a default [`Severity`]. Producers build
//! [`Diagnostic`] values and hand them to a [`DiagnosticSink`]; the
//! [`DiagnosticEngine`] is the collecting sink the driver uses, and
//! [`NullSink`] discards everything for token-only lexing.

mod diagnostic;
mod engine;
mod id;

pub use diagnostic::Diagnostic;
pub use engine::{DiagnosticEngine, DiagnosticSink, NullSink};
pub use id::{DiagnosticId, Severity};
