//! Error types for rule compilation and tokenization

use std::fmt;

/// Unmatched-input previews are capped at this many characters.
const PREVIEW_CHARS: usize = 10;

/// Errors that can occur while compiling a rule set or tokenizing input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// Input that no rule matches, located at its first offending character
    UnmatchedInput {
        line: usize,
        column: usize,
        preview: String,
    },
    /// A rule pattern the regex engine rejects
    InvalidPattern {
        ruleset: Option<String>,
        message: String,
    },
    /// A rule-set identifier that resolves to no rules
    EmptyRuleset { ruleset: Option<String> },
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::UnmatchedInput {
                line,
                column,
                preview,
            } => {
                write!(f, "Unexpected '{}' on line {}, column {}.", preview, line, column)
            }
            TokenizeError::InvalidPattern { ruleset, message } => match ruleset {
                Some(id) => write!(f, "Invalid pattern in ruleset '{}': {}", id, message),
                None => write!(f, "Invalid pattern: {}", message),
            },
            TokenizeError::EmptyRuleset { ruleset } => match ruleset {
                Some(id) => write!(f, "Ruleset '{}' has no rules", id),
                None => write!(f, "The root ruleset has no rules"),
            },
        }
    }
}

impl std::error::Error for TokenizeError {}

/// Render a bounded, newline-escaped preview of the unmatched tail.
pub(crate) fn preview(tail: &str) -> String {
    tail.chars()
        .take(PREVIEW_CHARS)
        .collect::<String>()
        .replace('\n', "\\n")
}
