//! Abstract syntax tree node types, one kind per file, matching the
//! lexer/parser split: the parser's productions build these directly.

mod array_assign;
mod array_elem_assign;
mod array_index;
mod array_init;
mod binary_op;
mod block;
mod char_cast;
mod expression;
mod for_loop;
mod give;
mod if_stmt;
mod num_lit;
mod statement;
mod str_lit;
mod type_annotation;
mod unary_op;
mod var_assign;
mod var_ref;
mod while_loop;

pub use array_assign::ArrayAssign;
pub use array_elem_assign::ArrayElemAssign;
pub use array_index::ArrayIndex;
pub use array_init::ArrayInit;
pub use binary_op::{BinOp, BinOperator};
pub use block::Block;
pub use char_cast::CharCast;
pub use expression::Expression;
pub use for_loop::ForLoop;
pub use give::Give;
pub use if_stmt::IfStmt;
pub use num_lit::NumLit;
pub use statement::Statement;
pub use str_lit::StrLit;
pub use type_annotation::Type;
pub use unary_op::{UnaryOp, UnaryOperator};
pub use var_assign::VarAssign;
pub use var_ref::VarRef;
pub use while_loop::WhileLoop;
