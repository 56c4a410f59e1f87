//! Recursive-descent parser with one-token lookahead, building the AST
//! directly from a flat token stream.
//!
//! `comp_expr` in the grammar is implemented as the full `and`/`or` ->
//! comparison -> arithmetic -> factor precedence chain: every grammar slot
//! that names `comp_expr` (conditions, `give`, array sizes and elements,
//! parenthesized groups) goes through [`Parser::parse_expr`], the topmost
//! layer of that chain.

use crate::ast::{
    ArrayAssign, ArrayElemAssign, ArrayIndex, ArrayInit, BinOp, BinOperator, Block, CharCast,
    Expression, ForLoop, Give, IfStmt, NumLit, Statement, StrLit, Type, UnaryOp, UnaryOperator,
    VarAssign, VarRef, WhileLoop,
};
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};
use crate::position::Position;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    fn peek_kind_at(&self, offset: usize) -> Option<&TokenKind> {
        self.tokens.get(self.pos + offset).map(|t| &t.kind)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eof_position(&self) -> Position {
        self.tokens
            .last()
            .map(|t| t.position)
            .unwrap_or_else(Position::start)
    }

    fn expect(&mut self, matches: impl Fn(&TokenKind) -> bool) -> Result<Token, ParseError> {
        match self.peek() {
            Some(tok) if matches(&tok.kind) => Ok(self.advance().unwrap()),
            Some(tok) => Err(ParseError::unexpected_token(tok.kind.clone(), tok.position)),
            None => Err(ParseError::unexpected_eof(self.eof_position())),
        }
    }

    fn expect_identifier(&mut self) -> Result<(String, Position), ParseError> {
        let tok = self.expect(|k| matches!(k, TokenKind::Identifier(_)))?;
        match tok.kind {
            TokenKind::Identifier(name) => Ok((name, tok.position)),
            _ => unreachable!(),
        }
    }

    fn expect_semi(&mut self) -> Result<(), ParseError> {
        self.expect(|k| *k == TokenKind::Semi).map(|_| ())
    }

    fn expect_kind(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        self.expect(|k| *k == kind)
    }
}

/// Parses a whole program: top-level statements, each terminated by `;`.
pub fn parse_program(tokens: Vec<Token>) -> Result<Vec<Statement>, ParseError> {
    let mut parser = Parser::new(tokens);
    let mut statements = Vec::new();
    while parser.peek().is_some() {
        statements.push(parser.parse_statement()?);
        parser.expect_semi()?;
    }
    Ok(statements)
}

impl Parser {
    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.peek_kind() {
            Some(TokenKind::Int) => self.parse_num_decl(Type::Int),
            Some(TokenKind::Dec) => self.parse_num_decl(Type::Dec),
            Some(TokenKind::Word) => self.parse_word_decl(),
            Some(TokenKind::Give) => self.parse_give(),
            Some(TokenKind::If) => self.parse_if(),
            Some(TokenKind::While) => self.parse_while(),
            Some(TokenKind::For) => self.parse_for(),
            Some(TokenKind::LBraces) => Ok(Statement::Block(self.parse_block()?)),
            Some(TokenKind::Identifier(_)) => self.parse_identifier_led_statement(),
            Some(_) => Ok(Statement::Expr(self.parse_expr()?)),
            None => Err(ParseError::unexpected_eof(self.eof_position())),
        }
    }

    fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.expect_kind(TokenKind::LBraces)?;
        let mut statements = vec![self.parse_statement()?];
        self.expect_semi()?;
        while !matches!(self.peek_kind(), Some(TokenKind::RBraces)) {
            statements.push(self.parse_statement()?);
            self.expect_semi()?;
        }
        self.expect_kind(TokenKind::RBraces)?;
        Ok(Block { statements })
    }

    fn parse_if(&mut self) -> Result<Statement, ParseError> {
        self.expect_kind(TokenKind::If)?;
        self.expect_kind(TokenKind::LParen)?;
        let cond = self.parse_expr()?;
        self.expect_kind(TokenKind::RParen)?;
        let body = self.parse_block()?;
        let mut cases = vec![(cond, body)];

        while matches!(self.peek_kind(), Some(TokenKind::Elif)) {
            self.advance();
            self.expect_kind(TokenKind::LParen)?;
            let cond = self.parse_expr()?;
            self.expect_kind(TokenKind::RParen)?;
            let body = self.parse_block()?;
            cases.push((cond, body));
        }

        let else_body = if matches!(self.peek_kind(), Some(TokenKind::Else)) {
            self.advance();
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Statement::If(IfStmt { cases, else_body }))
    }

    fn parse_while(&mut self) -> Result<Statement, ParseError> {
        self.expect_kind(TokenKind::While)?;
        self.expect_kind(TokenKind::LParen)?;
        let condition = self.parse_expr()?;
        self.expect_kind(TokenKind::RParen)?;
        let body = self.parse_block()?;
        Ok(Statement::While(WhileLoop { condition, body }))
    }

    fn parse_for(&mut self) -> Result<Statement, ParseError> {
        self.expect_kind(TokenKind::For)?;
        self.expect_kind(TokenKind::LParen)?;
        let decl = self.parse_statement()?;
        self.expect_semi()?;
        let condition = self.parse_expr()?;
        self.expect_semi()?;
        let inc = self.parse_statement()?;
        self.expect_kind(TokenKind::RParen)?;
        let body = self.parse_block()?;
        Ok(Statement::For(ForLoop {
            decl: Box::new(decl),
            condition,
            inc: Box::new(inc),
            body,
        }))
    }

    fn parse_give(&mut self) -> Result<Statement, ParseError> {
        self.expect_kind(TokenKind::Give)?;
        self.expect_kind(TokenKind::LParen)?;
        let value = self.parse_expr()?;
        self.expect_kind(TokenKind::RParen)?;
        Ok(Statement::Give(Give { value }))
    }

    fn parse_num_decl(&mut self, ty: Type) -> Result<Statement, ParseError> {
        self.advance();
        let (name, position) = self.expect_identifier()?;

        if matches!(self.peek_kind(), Some(TokenKind::SLBraces)) {
            self.advance();
            let size = self.parse_expr()?;
            self.expect_kind(TokenKind::SRBraces)?;

            let elements = if matches!(self.peek_kind(), Some(TokenKind::Assign)) {
                self.advance();
                self.expect_kind(TokenKind::LBraces)?;
                let mut elems = vec![self.parse_expr()?];
                while matches!(self.peek_kind(), Some(TokenKind::Comma)) {
                    self.advance();
                    elems.push(self.parse_expr()?);
                }
                self.expect_kind(TokenKind::RBraces)?;
                Some(elems)
            } else {
                None
            };

            return Ok(Statement::ArrayAssign(ArrayAssign {
                name,
                array_init: ArrayInit {
                    size: Box::new(size),
                    elements,
                    position,
                },
                declared_type: ty,
                position,
            }));
        }

        let value = if matches!(self.peek_kind(), Some(TokenKind::Assign)) {
            self.advance();
            self.parse_expr()?
        } else {
            match ty {
                Type::Int => Expression::NumLit(NumLit::Int(0, position)),
                Type::Dec => Expression::NumLit(NumLit::Dec(0.0, position)),
                Type::Word => unreachable!("parse_num_decl only called for int/dec"),
            }
        };

        Ok(Statement::VarAssign(VarAssign {
            name,
            value: Box::new(value),
            declared_type: Some(ty),
            position,
        }))
    }

    fn parse_word_decl(&mut self) -> Result<Statement, ParseError> {
        self.advance();
        let (name, position) = self.expect_identifier()?;

        let value = if matches!(self.peek_kind(), Some(TokenKind::Assign)) {
            self.advance();
            self.parse_expr()?
        } else {
            Expression::StrLit(StrLit {
                value: String::new(),
                position,
            })
        };

        Ok(Statement::VarAssign(VarAssign {
            name,
            value: Box::new(value),
            declared_type: Some(Type::Word),
            position,
        }))
    }

    fn parse_identifier_led_statement(&mut self) -> Result<Statement, ParseError> {
        if matches!(self.peek_kind_at(1), Some(TokenKind::Assign)) {
            let (name, position) = self.expect_identifier()?;
            self.advance();
            let value = self.parse_expr()?;
            return Ok(Statement::VarAssign(VarAssign {
                name,
                value: Box::new(value),
                declared_type: None,
                position,
            }));
        }

        if matches!(self.peek_kind_at(1), Some(TokenKind::SLBraces)) {
            let (name, position) = self.expect_identifier()?;
            self.advance();
            let index = self.parse_expr()?;
            self.expect_kind(TokenKind::SRBraces)?;

            if matches!(self.peek_kind(), Some(TokenKind::Assign)) {
                self.advance();
                let value = self.parse_expr()?;
                return Ok(Statement::ArrayElemAssign(ArrayElemAssign {
                    name,
                    index: Box::new(index),
                    value: Box::new(value),
                    position,
                }));
            }

            return Ok(Statement::Expr(Expression::ArrayIndex(ArrayIndex {
                name,
                index: Box::new(index),
                position,
            })));
        }

        Ok(Statement::Expr(self.parse_expr()?))
    }

    /// Top of the expression grammar: `or`-chain over `and`-chains.
    fn parse_expr(&mut self) -> Result<Expression, ParseError> {
        self.parse_logic_or()
    }

    fn parse_logic_or(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_logic_and()?;
        while matches!(self.peek_kind(), Some(TokenKind::Or)) {
            let tok = self.advance().unwrap();
            let right = self.parse_logic_and()?;
            left = Expression::BinOp(BinOp {
                left: Box::new(left),
                op: BinOperator::Or,
                right: Box::new(right),
                position: tok.position,
            });
        }
        Ok(left)
    }

    fn parse_logic_and(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_comparison()?;
        while matches!(self.peek_kind(), Some(TokenKind::And)) {
            let tok = self.advance().unwrap();
            let right = self.parse_comparison()?;
            left = Expression::BinOp(BinOp {
                left: Box::new(left),
                op: BinOperator::And,
                right: Box::new(right),
                position: tok.position,
            });
        }
        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Expression, ParseError> {
        if matches!(self.peek_kind(), Some(TokenKind::Not)) {
            let tok = self.advance().unwrap();
            let operand = self.parse_comparison()?;
            return Ok(Expression::UnaryOp(UnaryOp {
                op: UnaryOperator::Not,
                operand: Box::new(operand),
                position: tok.position,
            }));
        }

        let mut left = self.parse_additive()?;
        while let Some(op) = self.peek_kind().and_then(BinOperator::from_token) {
            if !matches!(op, BinOperator::Eq | BinOperator::Ne | BinOperator::Lt
                | BinOperator::Lte | BinOperator::Gt | BinOperator::Gte)
            {
                break;
            }
            let tok = self.advance().unwrap();
            let right = self.parse_additive()?;
            left = Expression::BinOp(BinOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
                position: tok.position,
            });
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_term()?;
        while matches!(self.peek_kind(), Some(TokenKind::Plus) | Some(TokenKind::Min)) {
            let tok = self.advance().unwrap();
            let op = BinOperator::from_token(&tok.kind).unwrap();
            let right = self.parse_term()?;
            left = Expression::BinOp(BinOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
                position: tok.position,
            });
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_factor()?;
        while matches!(
            self.peek_kind(),
            Some(TokenKind::Mul) | Some(TokenKind::Div) | Some(TokenKind::Mod)
        ) {
            let tok = self.advance().unwrap();
            let op = BinOperator::from_token(&tok.kind).unwrap();
            let right = self.parse_factor()?;
            left = Expression::BinOp(BinOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
                position: tok.position,
            });
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expression, ParseError> {
        match self.peek_kind() {
            Some(TokenKind::IntConst(_)) => {
                let tok = self.advance().unwrap();
                match tok.kind {
                    TokenKind::IntConst(v) => Ok(Expression::NumLit(NumLit::Int(v, tok.position))),
                    _ => unreachable!(),
                }
            }
            Some(TokenKind::DecConst(_)) => {
                let tok = self.advance().unwrap();
                match tok.kind {
                    TokenKind::DecConst(v) => Ok(Expression::NumLit(NumLit::Dec(v, tok.position))),
                    _ => unreachable!(),
                }
            }
            Some(TokenKind::WordConst(_)) => {
                let tok = self.advance().unwrap();
                match tok.kind {
                    TokenKind::WordConst(value) => Ok(Expression::StrLit(StrLit {
                        value,
                        position: tok.position,
                    })),
                    _ => unreachable!(),
                }
            }
            Some(TokenKind::Identifier(_)) => {
                let tok = self.advance().unwrap();
                let name = match tok.kind {
                    TokenKind::Identifier(name) => name,
                    _ => unreachable!(),
                };
                if matches!(self.peek_kind(), Some(TokenKind::SLBraces)) {
                    self.advance();
                    let index = self.parse_expr()?;
                    self.expect_kind(TokenKind::SRBraces)?;
                    Ok(Expression::ArrayIndex(ArrayIndex {
                        name,
                        index: Box::new(index),
                        position: tok.position,
                    }))
                } else {
                    Ok(Expression::VarRef(VarRef {
                        name,
                        position: tok.position,
                    }))
                }
            }
            Some(TokenKind::Plus) | Some(TokenKind::Min) => {
                let tok = self.advance().unwrap();
                let op = if tok.kind == TokenKind::Plus {
                    UnaryOperator::Plus
                } else {
                    UnaryOperator::Neg
                };
                let operand = self.parse_additive()?;
                Ok(Expression::UnaryOp(UnaryOp {
                    op,
                    operand: Box::new(operand),
                    position: tok.position,
                }))
            }
            Some(TokenKind::LParen) => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect_kind(TokenKind::RParen)?;
                Ok(inner)
            }
            Some(TokenKind::Char) => {
                let tok = self.advance().unwrap();
                self.expect_kind(TokenKind::LParen)?;
                let operand = self.parse_expr()?;
                self.expect_kind(TokenKind::RParen)?;
                Ok(Expression::CharCast(CharCast {
                    operand: Box::new(operand),
                    position: tok.position,
                }))
            }
            Some(_) => {
                let tok = self.peek().unwrap();
                Err(ParseError::unexpected_token(tok.kind.clone(), tok.position))
            }
            None => Err(ParseError::unexpected_eof(self.eof_position())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse(source: &str) -> Vec<Statement> {
        parse_program(tokenize(source).unwrap()).unwrap()
    }

    #[test]
    fn parses_declaration_with_initializer() {
        let program = parse("int a = 5;");
        assert!(matches!(program[0], Statement::VarAssign(_)));
    }

    #[test]
    fn parses_declaration_without_initializer_as_default() {
        let program = parse("int a;");
        match &program[0] {
            Statement::VarAssign(VarAssign { value, .. }) => {
                assert!(matches!(**value, Expression::NumLit(NumLit::Int(0, _))));
            }
            other => panic!("expected VarAssign, got {other:?}"),
        }
    }

    #[test]
    fn parses_arithmetic_precedence() {
        let program = parse("give(1 + 2 * 3);");
        match &program[0] {
            Statement::Give(Give { value: Expression::BinOp(bin) }) => {
                assert_eq!(bin.op, BinOperator::Add);
                assert!(matches!(*bin.right, Expression::BinOp(_)));
            }
            other => panic!("expected give(BinOp), got {other:?}"),
        }
    }

    #[test]
    fn parses_array_declaration_with_initializer() {
        let program = parse("int a[3] = {1, 2, 3};");
        match &program[0] {
            Statement::ArrayAssign(ArrayAssign { array_init, .. }) => {
                assert_eq!(array_init.elements.as_ref().unwrap().len(), 3);
            }
            other => panic!("expected ArrayAssign, got {other:?}"),
        }
    }

    #[test]
    fn parses_if_elif_else() {
        let program = parse("if (1 == 1) { give(1); } elif (1 == 2) { give(2); } else { give(3); };");
        match &program[0] {
            Statement::If(IfStmt { cases, else_body }) => {
                assert_eq!(cases.len(), 2);
                assert!(else_body.is_some());
            }
            other => panic!("expected If, got {other:?}"),
        }
    }

    #[test]
    fn parses_for_loop() {
        let program = parse("for (int i = 0; i < 3; i = i + 1) { give(i); };");
        assert!(matches!(program[0], Statement::For(_)));
    }

    #[test]
    fn parses_array_element_assignment() {
        let program = parse("a[1] = 9;");
        assert!(matches!(program[0], Statement::ArrayElemAssign(_)));
    }

    #[test]
    fn rejects_unexpected_token() {
        let result = parse_program(tokenize("give(;").unwrap());
        assert!(result.is_err());
    }
}
