//! Output tokens produced by the tokenizer
//!
//! A token is either a coded token - the resolved type name had an entry in
//! the engine's type registry - or a bare fragment of matched text for
//! structural slices the consumer does not need classified (literal
//! delimiters, insignificant whitespace, and the like).

use serde::{Deserialize, Serialize};

/// One matched slice of input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// A registry-coded token with its source position
    Coded {
        code: i64,
        text: String,
        line: usize,
        column: usize,
        type_name: String,
    },
    /// An untyped slice of matched text
    Fragment(String),
}

impl Token {
    /// The matched source text, for either variant.
    pub fn text(&self) -> &str {
        match self {
            Token::Coded { text, .. } => text,
            Token::Fragment(text) => text,
        }
    }

    /// The registry code, if this token carries one.
    pub fn code(&self) -> Option<i64> {
        match self {
            Token::Coded { code, .. } => Some(*code),
            Token::Fragment(_) => None,
        }
    }

    /// The resolved type name, if this token carries one.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Token::Coded { type_name, .. } => Some(type_name),
            Token::Fragment(_) => None,
        }
    }

    /// 1-based line of the match start, if this token carries a position.
    pub fn line(&self) -> Option<usize> {
        match self {
            Token::Coded { line, .. } => Some(*line),
            Token::Fragment(_) => None,
        }
    }

    /// 1-based column of the match start, if this token carries a position.
    pub fn column(&self) -> Option<usize> {
        match self {
            Token::Coded { column, .. } => Some(*column),
            Token::Fragment(_) => None,
        }
    }

    pub fn is_fragment(&self) -> bool {
        matches!(self, Token::Fragment(_))
    }
}
