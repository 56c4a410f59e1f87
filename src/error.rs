//! Error types for the three pipeline stages: a message, the source
//! position it occurred at, and a `Display` impl that renders both.

use std::fmt::Display;

use crate::position::Position;

/// An error raised while scanning source text into tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    pub position: Position,
}

impl LexError {
    pub fn illegal_char(ch: char, position: Position) -> Self {
        Self {
            message: format!("illegal character '{ch}'"),
            position,
        }
    }

    pub fn unterminated_string(position: Position) -> Self {
        Self {
            message: "unterminated string literal".to_owned(),
            position,
        }
    }

    pub fn bare_bang(position: Position) -> Self {
        Self {
            message: "unexpected '!' (did you mean '!='?)".to_owned(),
            position,
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.position)
    }
}

impl std::error::Error for LexError {}

/// An error raised while building the AST from the token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub position: Position,
}

impl ParseError {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    pub fn unexpected_token(found: impl Display, position: Position) -> Self {
        Self {
            message: format!("unexpected token '{found}'"),
            position,
        }
    }

    pub fn unexpected_eof(position: Position) -> Self {
        Self {
            message: "unexpected end of input".to_owned(),
            position,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.position)
    }
}

impl std::error::Error for ParseError {}

/// An error raised while evaluating a statement. Fatal to the statement
/// that raised it, but not to the program (see spec.md §7/§9).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalError {
    pub message: String,
    pub position: Position,
}

impl EvalError {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

impl Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.position)
    }
}

impl std::error::Error for EvalError {}
