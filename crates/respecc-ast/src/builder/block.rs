//! Builders for statement lists.

use respecc_core::Span;

use crate::{Block, Expression, Program, Statement, StmtBuilder, TypeAnnotation};

/// Builder for constructing blocks
#[derive(Default)]
pub struct BlockBuilder {
    block: Block,
}

impl BlockBuilder {
    /// Creates a new block builder
    #[must_use]
    pub fn new(span: Span) -> Self {
        Self {
            block: Block {
                statements: Vec::new(),
                span,
            },
        }
    }

    /// Adds a statement to the block
    pub fn add_statement(&mut self, statement: Statement) -> &mut Self {
        self.block.statements.push(statement);
        self
    }

    /// Adds a variable declaration
    pub fn add_variable(
        &mut self,
        name: &str,
        type_annotation: Option<TypeAnnotation>,
        initializer: Option<Expression>,
    ) -> &mut Self {
        self.add_statement(StmtBuilder::variable(name, type_annotation, initializer))
    }

    /// Adds an assignment statement
    pub fn add_assign(&mut self, target: Expression, value: Expression) -> &mut Self {
        self.add_statement(StmtBuilder::assign(target, value))
    }

    /// Adds a return statement
    pub fn add_return(&mut self, value: Option<Expression>) -> &mut Self {
        self.add_statement(StmtBuilder::ret(value))
    }

    pub fn add_break(&mut self) -> &mut Self {
        self.add_statement(StmtBuilder::brk())
    }

    /// Adds an expression statement
    pub fn add_expression(&mut self, expr: Expression) -> &mut Self {
        self.add_statement(StmtBuilder::expr(expr))
    }

    /// Builds and returns the block
    #[must_use]
    pub fn build(self) -> Block {
        self.block
    }
}

/// Builder for constructing whole programs
#[derive(Default)]
pub struct ProgramBuilder {
    program: Program,
}

impl ProgramBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level statement
    pub fn add_statement(&mut self, statement: Statement) -> &mut Self {
        self.program.statements.push(statement);
        self
    }

    /// Adds a top-level variable declaration
    pub fn add_variable(
        &mut self,
        name: &str,
        type_annotation: Option<TypeAnnotation>,
        initializer: Option<Expression>,
    ) -> &mut Self {
        self.add_statement(StmtBuilder::variable(name, type_annotation, initializer))
    }

    /// Adds a top-level expression statement
    pub fn add_expression(&mut self, expr: Expression) -> &mut Self {
        self.add_statement(StmtBuilder::expr(expr))
    }

    /// Builds and returns the program
    #[must_use]
    pub fn build(self) -> Program {
        self.program
    }
}
