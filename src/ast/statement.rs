//! The statement-level AST: the units a program's top-level list and every
//! block body are made of.

use super::array_assign::ArrayAssign;
use super::array_elem_assign::ArrayElemAssign;
use super::block::Block;
use super::expression::Expression;
use super::for_loop::ForLoop;
use super::give::Give;
use super::if_stmt::IfStmt;
use super::var_assign::VarAssign;
use super::while_loop::WhileLoop;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VarAssign(VarAssign),
    ArrayAssign(ArrayAssign),
    ArrayElemAssign(ArrayElemAssign),
    Give(Give),
    If(IfStmt),
    While(WhileLoop),
    For(ForLoop),
    Block(Block),
    Expr(Expression),
}
