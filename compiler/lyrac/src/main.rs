//! Lyra compiler CLI.
//!
//! Currently the front end stops after lexing: `lyrac <file.lyr>` prints
//! the token stream, renders any diagnostics, and exits non-zero when the
//! source had lexical errors.

use std::io::Write;

use lyra_diagnostic::DiagnosticEngine;
use lyra_source::{SourceManager, SourceTable};
use tracing_subscriber::EnvFilter;

fn main() {
    // Log filtering comes from LYRA_LOG, e.g. LYRA_LOG=lyra_lexer=trace.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("LYRA_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: lyrac <file.lyr>");
        std::process::exit(1);
    }

    let mut sources = SourceManager::new();
    let file = match sources.load(&args[1]) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let mut engine = DiagnosticEngine::new();
    let source = sources.buffer(file).unwrap_or_default();
    let tokens = lyra_lexer::lex(file, source, &mut engine);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for token in &tokens {
        let _ = writeln!(
            out,
            "Token: {:?} @ {}  {}",
            token.kind, token.span, token.lexeme
        );
    }

    let stderr = std::io::stderr();
    let mut err_out = stderr.lock();
    let _ = engine.print(&sources, &mut err_out);

    if engine.has_errors() {
        std::process::exit(1);
    }
}
