//! golite Lexer
//!
//! Tokenizes golite source text into an ordered stream of classified tokens:
//! keywords, operators, delimiters, identifiers, and literals. Malformed
//! constructs (unterminated strings, bad character literals, unclosed block
//! comments, stray characters) become inline `Error` tokens and the scan
//! continues, so a full token sequence is always produced.
//!
//! # Example
//!
//! ```
//! use golite_lexer::Scanner;
//!
//! let tokens = Scanner::tokenize("x = 1");
//! assert_eq!(tokens.len(), 3);
//! ```

pub mod diagnostics;
pub mod scanner;
pub mod token;
pub mod vocabulary;

pub use diagnostics::{CollectSink, DiagnosticSink, StderrSink};
pub use scanner::Scanner;
pub use token::{Token, TokenKind};
pub use vocabulary::Vocabulary;

/// A lexical error with position information.
///
/// Also the payload delivered to a [`DiagnosticSink`]; the same message text
/// appears as the value of the corresponding `Error` token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error at line {line}, column {column}: {message}")]
pub struct LexicalError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}
