//! Diagnostic reporting for lexical errors.
//!
//! The scanner embeds every lexical error as an `Error` token in its output;
//! a [`DiagnosticSink`] additionally receives each error at the moment it is
//! detected, so callers can stream human-readable messages without parsing
//! the token list.

use crate::LexicalError;

/// Receives lexical errors as the scanner detects them.
pub trait DiagnosticSink {
    fn report(&mut self, error: &LexicalError);
}

/// Writes one line per diagnostic to stderr. Used by the CLI so the token
/// table on stdout stays clean.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, error: &LexicalError) {
        eprintln!("{error}");
    }
}

/// Buffers diagnostics for later inspection.
#[derive(Debug, Default)]
pub struct CollectSink {
    pub errors: Vec<LexicalError>,
}

impl DiagnosticSink for CollectSink {
    fn report(&mut self, error: &LexicalError) {
        self.errors.push(error.clone());
    }
}
