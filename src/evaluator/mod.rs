//! Recursive visitor over the AST, evaluating each node against an owned
//! [`SymbolTable`].

use crate::ast::{
    ArrayAssign, ArrayElemAssign, Block, Expression, ForLoop, Give, IfStmt, NumLit, Statement,
    VarAssign, WhileLoop,
};
use crate::error::EvalError;
use crate::position::Position;
use crate::symbol_table::SymbolTable;
use crate::value::Value;

pub struct Evaluator {
    table: SymbolTable,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            table: SymbolTable::new(),
        }
    }

    /// Evaluates one top-level statement. An `Err` here is fatal only to
    /// this statement — the caller decides whether and how to continue.
    pub fn eval_statement(&mut self, stmt: &Statement) -> Result<(), EvalError> {
        match stmt {
            Statement::VarAssign(va) => self.eval_var_assign(va),
            Statement::ArrayAssign(aa) => self.eval_array_assign(aa),
            Statement::ArrayElemAssign(aea) => self.eval_array_elem_assign(aea),
            Statement::Give(give) => self.eval_give(give),
            Statement::If(if_stmt) => self.eval_if(if_stmt),
            Statement::While(while_loop) => self.eval_while(while_loop),
            Statement::For(for_loop) => self.eval_for(for_loop),
            Statement::Block(block) => self.eval_block(block),
            Statement::Expr(expr) => self.eval_expr(expr).map(|_| ()),
        }
    }

    fn eval_var_assign(&mut self, va: &VarAssign) -> Result<(), EvalError> {
        let value = self.eval_expr(&va.value)?;
        match va.declared_type {
            Some(ty) => {
                let coerced = value
                    .coerce_to(ty)
                    .map_err(|m| EvalError::new(m, va.position))?;
                self.table
                    .declare(&va.name, coerced, ty)
                    .map_err(|m| EvalError::new(m, va.position))
            }
            None => {
                let ty = self.table.get_type(&va.name).ok_or_else(|| {
                    EvalError::new(format!("undeclared variable {}", va.name), va.position)
                })?;
                let coerced = value
                    .coerce_to(ty)
                    .map_err(|m| EvalError::new(m, va.position))?;
                self.table
                    .assign(&va.name, coerced)
                    .map_err(|m| EvalError::new(m, va.position))
            }
        }
    }

    fn eval_array_assign(&mut self, aa: &ArrayAssign) -> Result<(), EvalError> {
        let size_value = self.eval_expr(&aa.array_init.size)?;
        let size = match size_value {
            Value::Integer(n) if n >= 0 => n as usize,
            Value::Integer(_) => {
                return Err(EvalError::new("array size cannot be negative", aa.position))
            }
            _ => return Err(EvalError::new("array size must be an integer", aa.position)),
        };

        let elements = match &aa.array_init.elements {
            Some(exprs) => {
                if exprs.len() != size {
                    return Err(EvalError::new(
                        format!(
                            "array initializer has {} elements, expected {}",
                            exprs.len(),
                            size
                        ),
                        aa.position,
                    ));
                }
                let mut values = Vec::with_capacity(size);
                for expr in exprs {
                    let value = self.eval_expr(expr)?;
                    let coerced = value
                        .coerce_to(aa.declared_type)
                        .map_err(|m| EvalError::new(m, expr.position()))?;
                    values.push(coerced);
                }
                values
            }
            None => vec![Value::zero_of(aa.declared_type); size],
        };

        self.table
            .declare(&aa.name, Value::Array(elements), aa.declared_type)
            .map_err(|m| EvalError::new(m, aa.position))
    }

    fn eval_array_elem_assign(&mut self, aea: &ArrayElemAssign) -> Result<(), EvalError> {
        let index = expect_index(self.eval_expr(&aea.index)?, aea.position)?;
        let value = self.eval_expr(&aea.value)?;
        let ty = self.table.get_type(&aea.name).ok_or_else(|| {
            EvalError::new(format!("undeclared variable {}", aea.name), aea.position)
        })?;
        let coerced = value
            .coerce_to(ty)
            .map_err(|m| EvalError::new(m, aea.position))?;

        match self.table.get_mut(&aea.name) {
            Some(Value::Array(elems)) => {
                if index >= elems.len() {
                    return Err(EvalError::new("array index out of bounds", aea.position));
                }
                elems[index] = coerced;
                Ok(())
            }
            Some(_) => Err(EvalError::new(
                format!("{} is not an array", aea.name),
                aea.position,
            )),
            None => Err(EvalError::new(
                format!("undeclared variable {}", aea.name),
                aea.position,
            )),
        }
    }

    fn eval_give(&mut self, give: &Give) -> Result<(), EvalError> {
        let value = self.eval_expr(&give.value)?;
        println!("{value}");
        Ok(())
    }

    fn eval_if(&mut self, if_stmt: &IfStmt) -> Result<(), EvalError> {
        for (cond, body) in &if_stmt.cases {
            if self.eval_expr(cond)?.is_truthy() {
                return self.eval_block(body);
            }
        }
        if let Some(else_body) = &if_stmt.else_body {
            self.eval_block(else_body)?;
        }
        Ok(())
    }

    fn eval_while(&mut self, while_loop: &WhileLoop) -> Result<(), EvalError> {
        while self.eval_expr(&while_loop.condition)?.is_truthy() {
            self.eval_block(&while_loop.body)?;
        }
        Ok(())
    }

    fn eval_for(&mut self, for_loop: &ForLoop) -> Result<(), EvalError> {
        self.table.push_scope();
        let result = self.eval_for_body(for_loop);
        self.table.pop_scope();
        result
    }

    fn eval_for_body(&mut self, for_loop: &ForLoop) -> Result<(), EvalError> {
        self.eval_statement(&for_loop.decl)?;
        while self.eval_expr(&for_loop.condition)?.is_truthy() {
            self.eval_block(&for_loop.body)?;
            self.eval_statement(&for_loop.inc)?;
        }
        Ok(())
    }

    fn eval_block(&mut self, block: &Block) -> Result<(), EvalError> {
        self.table.push_scope();
        let result = self.eval_block_body(block);
        self.table.pop_scope();
        result
    }

    fn eval_block_body(&mut self, block: &Block) -> Result<(), EvalError> {
        for stmt in &block.statements {
            self.eval_statement(stmt)?;
        }
        Ok(())
    }

    fn eval_expr(&mut self, expr: &Expression) -> Result<Value, EvalError> {
        match expr {
            Expression::NumLit(NumLit::Int(v, _)) => Ok(Value::Integer(*v)),
            Expression::NumLit(NumLit::Dec(v, _)) => Ok(Value::Decimal(*v)),
            Expression::StrLit(s) => Ok(Value::Str(s.value.clone())),
            Expression::VarRef(v) => self.table.get(&v.name).cloned().ok_or_else(|| {
                EvalError::new(format!("undeclared variable {}", v.name), v.position)
            }),
            Expression::ArrayIndex(ai) => {
                let index = expect_index(self.eval_expr(&ai.index)?, ai.position)?;
                match self.table.get(&ai.name) {
                    Some(Value::Array(elems)) => elems.get(index).cloned().ok_or_else(|| {
                        EvalError::new("array index out of bounds", ai.position)
                    }),
                    Some(_) => Err(EvalError::new(
                        format!("{} is not an array", ai.name),
                        ai.position,
                    )),
                    None => Err(EvalError::new(
                        format!("undeclared variable {}", ai.name),
                        ai.position,
                    )),
                }
            }
            Expression::BinOp(b) => {
                let left = self.eval_expr(&b.left)?;
                let right = self.eval_expr(&b.right)?;
                left.apply_binary(b.op, &right)
                    .map_err(|m| EvalError::new(m, b.position))
            }
            Expression::UnaryOp(u) => {
                let operand = self.eval_expr(&u.operand)?;
                operand
                    .apply_unary(u.op)
                    .map_err(|m| EvalError::new(m, u.position))
            }
            Expression::CharCast(c) => {
                let operand = self.eval_expr(&c.operand)?;
                match operand {
                    Value::Integer(code) => char::from_u32(code as u32)
                        .map(|ch| Value::Str(ch.to_string()))
                        .ok_or_else(|| EvalError::new("invalid code point", c.position)),
                    other => Err(EvalError::new(
                        format!("char() requires an int, found {}", other.type_name()),
                        c.position,
                    )),
                }
            }
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

fn expect_index(value: Value, position: Position) -> Result<usize, EvalError> {
    match value {
        Value::Integer(n) if n >= 0 => Ok(n as usize),
        Value::Integer(_) => Err(EvalError::new("array index cannot be negative", position)),
        _ => Err(EvalError::new("array index must be an integer", position)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse_program;

    fn run(source: &str) -> Evaluator {
        let mut evaluator = Evaluator::new();
        let program = parse_program(tokenize(source).unwrap()).unwrap();
        for stmt in &program {
            evaluator.eval_statement(stmt).unwrap();
        }
        evaluator
    }

    #[test]
    fn declaration_binds_the_value() {
        let mut evaluator = run("int a = 10;");
        assert_eq!(
            evaluator.eval_expr(&Expression::VarRef(crate::ast::VarRef {
                name: "a".into(),
                position: Position::start(),
            })),
            Ok(Value::Integer(10))
        );
    }

    #[test]
    fn block_scoped_declaration_does_not_leak() {
        let mut evaluator = Evaluator::new();
        let program = parse_program(
            tokenize("int a = 1; { int a = 2; }; ").unwrap(),
        )
        .unwrap();
        for stmt in &program {
            evaluator.eval_statement(stmt).unwrap();
        }
        assert_eq!(evaluator.table.get("a"), Some(&Value::Integer(1)));
    }

    #[test]
    fn for_loop_increments_once_per_iteration() {
        let mut evaluator = Evaluator::new();
        let program = parse_program(
            tokenize("int total = 0; for (int i = 0; i < 3; i = i + 1) { total = total + i; };")
                .unwrap(),
        )
        .unwrap();
        for stmt in &program {
            evaluator.eval_statement(stmt).unwrap();
        }
        assert_eq!(evaluator.table.get("total"), Some(&Value::Integer(3)));
    }

    #[test]
    fn redeclaration_is_a_runtime_error() {
        let mut evaluator = Evaluator::new();
        let program = parse_program(tokenize("int a = 1; int a = 2;").unwrap()).unwrap();
        evaluator.eval_statement(&program[0]).unwrap();
        let err = evaluator.eval_statement(&program[1]).unwrap_err();
        assert_eq!(err.message, "variable declared twice a");
    }

    #[test]
    fn division_by_zero_is_a_runtime_error() {
        let mut evaluator = Evaluator::new();
        let program = parse_program(tokenize("int a = 10 / 0;").unwrap()).unwrap();
        let err = evaluator.eval_statement(&program[0]).unwrap_err();
        assert_eq!(err.message, "Division by zero");
    }

    #[test]
    fn array_index_out_of_bounds_is_a_runtime_error() {
        let mut evaluator = run("int a[2] = {1, 2};");
        let program = parse_program(tokenize("give(a[2]);").unwrap()).unwrap();
        assert!(evaluator.eval_statement(&program[0]).is_err());
    }

    #[test]
    fn char_cast_produces_one_character_string() {
        let mut evaluator = Evaluator::new();
        let expr = Expression::CharCast(crate::ast::CharCast {
            operand: Box::new(Expression::NumLit(NumLit::Int(65, Position::start()))),
            position: Position::start(),
        });
        assert_eq!(evaluator.eval_expr(&expr), Ok(Value::Str("A".into())));
    }
}
