use crate::diagnostics::DiagnosticSink;
use crate::token::{Token, TokenKind};
use crate::vocabulary::Vocabulary;
use crate::LexicalError;

/// golite source scanner.
///
/// A single forward pass over decoded characters. Dispatches on the character
/// at the cursor, in a fixed priority order (whitespace, comments, strings,
/// identifiers, numbers, character literals, operators, delimiters), and
/// appends one token per match. Lexical errors become `Error` tokens and are
/// also pushed to an optional [`DiagnosticSink`]; the scan always runs to the
/// end of input.
///
/// The scanner works over `Vec<char>` for index-based navigation, so
/// multi-byte characters occupy one cursor step and one column.
pub struct Scanner<'a> {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
    vocabulary: Vocabulary,
    sink: Option<&'a mut dyn DiagnosticSink>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner for the given source. Diagnostics are not reported
    /// anywhere beyond the `Error` tokens in the output.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
            vocabulary: Vocabulary::default(),
            sink: None,
        }
    }

    /// Create a scanner that reports each lexical error to `sink` at the
    /// moment of detection, in addition to embedding `Error` tokens.
    pub fn with_sink(source: &str, sink: &'a mut dyn DiagnosticSink) -> Self {
        let mut scanner = Self::new(source);
        scanner.sink = Some(sink);
        scanner
    }

    /// Tokenize the entire source into a vector of tokens.
    pub fn tokenize(source: &str) -> Vec<Token> {
        Scanner::new(source).scan()
    }

    /// Run the scan to completion and return the token sequence.
    ///
    /// Never fails as a whole: malformed constructs appear as `Error` tokens
    /// at their point of occurrence and scanning continues.
    pub fn scan(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.scan_token();
        }
        self.tokens
    }

    /// Dispatch on the character at the cursor. Rule order is significant:
    /// comments win over the `/` operator, identifiers over keyword-prefixed
    /// runs, the number rule claims `.` before the delimiter table sees it.
    /// Every branch advances the cursor by at least one character.
    fn scan_token(&mut self) {
        let ch = self.peek();
        match ch {
            c if c.is_whitespace() => self.skip_whitespace(),
            '/' if self.peek_next() == '/' => self.skip_line_comment(),
            '/' if self.peek_next() == '*' => self.skip_block_comment(),
            '"' => self.scan_string(),
            c if is_identifier_start(c) => self.scan_identifier(),
            c if c.is_ascii_digit() || c == '.' => self.scan_number(),
            '\'' => self.scan_character(),
            c if self.vocabulary.is_operator_char(c) => self.scan_operator(),
            c if self.vocabulary.is_delimiter(c) => self.scan_delimiter(),
            c => {
                let (line, column) = (self.line, self.column);
                self.report_error(format!("Invalid character: {c}"), line, column);
                self.advance();
            }
        }
    }

    // --- Skip rules ---

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.peek().is_whitespace() {
            self.advance();
        }
    }

    /// Skip `//` to the end of the line. The newline itself is left for the
    /// whitespace rule.
    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    /// Skip `/* ... */`. An unclosed comment is reported at the position of
    /// the opening `/*` and consumes the rest of the input.
    fn skip_block_comment(&mut self) {
        let start_line = self.line;
        let start_col = self.column;
        self.advance(); // `/`
        self.advance(); // `*`

        while !self.is_at_end() {
            if self.peek() == '*' && self.peek_next() == '/' {
                self.advance();
                self.advance();
                return;
            }
            self.advance();
        }
        self.report_error("Unclosed multiline comment", start_line, start_col);
    }

    // --- Token rules ---

    /// Scan a string literal. Escapes are not interpreted: any `"` closes the
    /// string, including one preceded by a backslash. The token value keeps
    /// both quote characters.
    fn scan_string(&mut self) {
        let start_line = self.line;
        let start_col = self.column;
        let start = self.pos;
        self.advance(); // opening quote

        while !self.is_at_end() && self.peek() != '"' {
            self.advance();
        }

        if self.is_at_end() {
            self.report_error("Unterminated string literal", start_line, start_col);
            return;
        }

        self.advance(); // closing quote
        let value = self.text_from(start);
        self.push_token(TokenKind::Literal, value, start_line, start_col);
    }

    /// Scan an identifier run and classify it against the keyword table.
    fn scan_identifier(&mut self) {
        let start_line = self.line;
        let start_col = self.column;
        let start = self.pos;

        while !self.is_at_end() && is_identifier_continue(self.peek()) {
            self.advance();
        }

        let value = self.text_from(start);
        let kind = if self.vocabulary.is_keyword(&value) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.push_token(kind, value, start_line, start_col);
    }

    /// Scan a number literal: a digit run with at most one embedded `.`.
    /// A second `.` ends the literal and is reclassified on the next
    /// dispatch. A `.` with no digits before it in the current match does
    /// not start a literal; it is emitted as the `.` delimiter (the dispatch
    /// test only looks at the current character, so a bare dot still lands
    /// here).
    fn scan_number(&mut self) {
        let start_line = self.line;
        let start_col = self.column;
        let start = self.pos;
        let mut seen_dot = false;

        while !self.is_at_end() {
            let c = self.peek();
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.' && !seen_dot && self.pos > start {
                seen_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        if self.pos == start {
            self.advance(); // the bare `.`
            self.push_token(TokenKind::Delimiter, ".", start_line, start_col);
            return;
        }

        let value = self.text_from(start);
        self.push_token(TokenKind::Literal, value, start_line, start_col);
    }

    /// Scan a character literal: `'`, exactly one non-quote character, `'`.
    /// On any deviation the error is reported where the check failed and the
    /// cursor stays there, so the next dispatch re-examines that character.
    fn scan_character(&mut self) {
        let start_line = self.line;
        let start_col = self.column;
        let start = self.pos;
        self.advance(); // opening quote

        if !self.is_at_end() && self.peek() != '\'' {
            self.advance(); // the interior character
            if !self.is_at_end() && self.peek() == '\'' {
                self.advance(); // closing quote
                let value = self.text_from(start);
                self.push_token(TokenKind::Literal, value, start_line, start_col);
            } else {
                let (line, column) = (self.line, self.column);
                self.report_error("Invalid character literal", line, column);
            }
        } else {
            let (line, column) = (self.line, self.column);
            self.report_error("Invalid character literal", line, column);
        }
    }

    /// Scan an operator with maximal munch: the two-character window at the
    /// cursor is tried against the table before the single character, so
    /// `<=` never tokenizes as `<` `=`.
    fn scan_operator(&mut self) {
        let start_line = self.line;
        let start_col = self.column;

        if self.pos + 1 < self.chars.len() {
            let pair: String = self.chars[self.pos..self.pos + 2].iter().collect();
            if self.vocabulary.is_operator(&pair) {
                self.advance();
                self.advance();
                self.push_token(TokenKind::Operator, pair, start_line, start_col);
                return;
            }
        }

        let single = self.peek().to_string();
        self.advance();
        self.push_token(TokenKind::Operator, single, start_line, start_col);
    }

    fn scan_delimiter(&mut self) {
        let start_line = self.line;
        let start_col = self.column;
        let value = self.peek().to_string();
        self.advance();
        self.push_token(TokenKind::Delimiter, value, start_line, start_col);
    }

    // --- Helpers ---

    fn push_token(&mut self, kind: TokenKind, value: impl Into<String>, line: usize, column: usize) {
        self.tokens.push(Token::new(kind, value, line, column));
    }

    /// Embed an `Error` token and notify the sink, if any.
    fn report_error(&mut self, message: impl Into<String>, line: usize, column: usize) {
        let message = message.into();
        if let Some(sink) = self.sink.as_mut() {
            sink.report(&LexicalError {
                message: message.clone(),
                line,
                column,
            });
        }
        self.tokens.push(Token::new(TokenKind::Error, message, line, column));
    }

    fn text_from(&self, start: usize) -> String {
        self.chars[start..self.pos].iter().collect()
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.pos]
        }
    }

    fn peek_next(&self) -> char {
        if self.pos + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.pos + 1]
        }
    }

    /// Advance one character. Newlines reset the column and bump the line, so
    /// positions stay correct inside multi-line strings and comments.
    fn advance(&mut self) {
        if let Some(&c) = self.chars.get(self.pos) {
            self.pos += 1;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

/// Valid as the first character of an identifier.
fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Valid in the rest of an identifier.
fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
