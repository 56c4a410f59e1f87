//! The expression-level AST: everything that evaluates to a [`Value`](crate::value::Value).

use crate::position::Position;

use super::array_index::ArrayIndex;
use super::binary_op::BinOp;
use super::char_cast::CharCast;
use super::num_lit::NumLit;
use super::str_lit::StrLit;
use super::unary_op::UnaryOp;
use super::var_ref::VarRef;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    NumLit(NumLit),
    StrLit(StrLit),
    VarRef(VarRef),
    ArrayIndex(ArrayIndex),
    BinOp(BinOp),
    UnaryOp(UnaryOp),
    CharCast(CharCast),
}

impl Expression {
    pub fn position(&self) -> Position {
        match self {
            Expression::NumLit(n) => n.position(),
            Expression::StrLit(s) => s.position,
            Expression::VarRef(v) => v.position,
            Expression::ArrayIndex(a) => a.position,
            Expression::BinOp(b) => b.position,
            Expression::UnaryOp(u) => u.position,
            Expression::CharCast(c) => c.position,
        }
    }
}
