//! Fixed classification tables for the scanner.
//!
//! Three read-only vocabularies drive token classification: reserved words,
//! operators (single and compound), and single-character delimiters. Each
//! scanner owns its own [`Vocabulary`] so scans never share mutable state.

use std::collections::HashSet;

/// The reserved words of golite.
pub const KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
    "true",
    "false",
    "iota",
];

/// All operator spellings. The matcher only ever tries the two-character
/// window at the cursor before falling back to one character, so the
/// three-character entries (`<<=`, `>>=`, `&&=`, `||=`) are listed for
/// completeness but shadowed by their two-character prefixes.
pub const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "=", "<", ">", "!", "&", "|", "^", // single
    "==", "!=", "<=", ">=", "&&", "||", "<<", ">>", // comparison and shift
    "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", // compound assignment
    "<<=", ">>=", "&&=", "||=",
];

/// Single-character delimiters.
pub const DELIMITERS: &[char] = &['{', '}', '(', ')', '[', ']', ';', ',', '.', ':'];

/// The fixed keyword, operator, and delimiter tables for one scan.
///
/// Built once at scanner construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    keywords: HashSet<&'static str>,
    operators: HashSet<&'static str>,
    operator_starts: HashSet<char>,
    delimiters: HashSet<char>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        let operators: HashSet<&'static str> = OPERATORS.iter().copied().collect();
        let operator_starts = operators
            .iter()
            .filter(|op| op.chars().count() == 1)
            .filter_map(|op| op.chars().next())
            .collect();
        Self {
            keywords: KEYWORDS.iter().copied().collect(),
            operators,
            operator_starts,
            delimiters: DELIMITERS.iter().copied().collect(),
        }
    }
}

impl Vocabulary {
    /// Whether `text` is a reserved word.
    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.contains(text)
    }

    /// Whether `text` is an operator spelling (any length).
    pub fn is_operator(&self, text: &str) -> bool {
        self.operators.contains(text)
    }

    /// Whether `ch` is a single-character operator, i.e. can begin an
    /// operator token.
    pub fn is_operator_char(&self, ch: char) -> bool {
        self.operator_starts.contains(&ch)
    }

    /// Whether `ch` is a delimiter.
    pub fn is_delimiter(&self, ch: char) -> bool {
        self.delimiters.contains(&ch)
    }
}
