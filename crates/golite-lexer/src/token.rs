use std::fmt;

/// Token classification for golite source.
///
/// `Error` marks a malformed lexical construct; the token's `value` then
/// carries the diagnostic message instead of matched source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    Keyword,
    Operator,
    Delimiter,
    Identifier,
    Literal,
    Error,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Operator => "Operator",
            TokenKind::Delimiter => "Delimiter",
            TokenKind::Identifier => "Identifier",
            TokenKind::Literal => "Literal",
            TokenKind::Error => "Error",
        };
        f.write_str(name)
    }
}

/// A token produced by the golite scanner.
///
/// `value` is the exact matched text (string literals keep their quotes).
/// `line` and `column` are 1-based and point at the first character of the
/// match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            column,
        }
    }
}
