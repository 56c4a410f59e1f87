//! `if`/`elif`/`else`: an ordered list of (condition, body) cases plus an optional else body.

use super::block::Block;
use super::expression::Expression;

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub cases: Vec<(Expression, Block)>,
    pub else_body: Option<Block>,
}
