//! A brace-delimited, semicolon-terminated statement list with its own scope.

use super::statement::Statement;

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
}
