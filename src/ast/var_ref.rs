//! Reading a variable by name.

use crate::position::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct VarRef {
    pub name: String,
    pub position: Position,
}
