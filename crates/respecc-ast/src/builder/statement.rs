//! Helper functions for creating statements and declarations.

use respecc_core::Span;

use crate::{
    Assignment, Block, ClassBlock, ClassDeclaration, Conditional, Constructor, ElseIf,
    Expression, ForLoop, FunctionDeclaration, Parameter, Return, Statement, TypeAnnotation,
    VariableDeclaration, WhileLoop,
};

/// Helper functions for creating statements
pub struct StmtBuilder;

impl StmtBuilder {
    /// Creates a parameter; `None` leaves it untyped
    #[must_use]
    pub fn param(name: impl Into<String>, type_annotation: Option<TypeAnnotation>) -> Parameter {
        Parameter {
            name: name.into(),
            type_annotation,
            span: Span::default(),
            resolved_type: None,
        }
    }

    /// Creates a variable declaration node
    #[must_use]
    pub fn declaration(
        name: impl Into<String>,
        type_annotation: Option<TypeAnnotation>,
        initializer: Option<Expression>,
    ) -> VariableDeclaration {
        VariableDeclaration {
            name: name.into(),
            type_annotation,
            initializer,
            span: Span::default(),
            resolved_type: None,
        }
    }

    /// Creates a variable declaration statement
    #[must_use]
    pub fn variable(
        name: impl Into<String>,
        type_annotation: Option<TypeAnnotation>,
        initializer: Option<Expression>,
    ) -> Statement {
        Statement::Variable(Self::declaration(name, type_annotation, initializer))
    }

    #[must_use]
    pub fn assign(target: Expression, value: Expression) -> Statement {
        Statement::Assignment(Assignment {
            target,
            value,
            span: Span::default(),
        })
    }

    /// Creates a function declaration statement
    #[must_use]
    pub fn function(
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        return_type: Option<TypeAnnotation>,
        body: Block,
    ) -> Statement {
        Statement::Function(FunctionDeclaration {
            name: name.into(),
            parameters,
            return_type,
            body,
            span: Span::default(),
            resolved_type: None,
            type_resolved: false,
            body_scope: None,
        })
    }

    /// Creates a class declaration statement
    #[must_use]
    pub fn class(name: impl Into<String>, members: Vec<Statement>) -> Statement {
        Statement::Class(ClassDeclaration {
            name: name.into(),
            body: ClassBlock {
                members,
                span: Span::default(),
            },
            span: Span::default(),
            class_id: None,
            body_scope: None,
            overloads_validated: false,
        })
    }

    /// Creates a constructor member
    #[must_use]
    pub fn constructor(
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        body: Block,
    ) -> Statement {
        Statement::Constructor(Constructor {
            name: name.into(),
            parameters,
            body,
            span: Span::default(),
            body_scope: None,
            class_id: None,
        })
    }

    /// Creates an `if` with optional `else if` branches and `else`
    #[must_use]
    pub fn conditional(
        condition: Expression,
        then_block: Block,
        else_ifs: Vec<(Expression, Block)>,
        else_block: Option<Block>,
    ) -> Statement {
        Statement::Conditional(Conditional {
            condition,
            then_block,
            else_ifs: else_ifs
                .into_iter()
                .map(|(condition, block)| ElseIf {
                    condition,
                    block,
                    span: Span::default(),
                })
                .collect(),
            else_block,
            span: Span::default(),
        })
    }

    #[must_use]
    pub fn while_loop(condition: Expression, body: Block) -> Statement {
        Statement::While(WhileLoop {
            condition,
            body,
            span: Span::default(),
        })
    }

    #[must_use]
    pub fn for_loop(
        initializer: Option<VariableDeclaration>,
        condition: Option<Expression>,
        update: Option<Statement>,
        body: Block,
    ) -> Statement {
        Statement::For(ForLoop {
            initializer: initializer.map(Box::new),
            condition,
            update: update.map(Box::new),
            body,
            span: Span::default(),
        })
    }

    #[must_use]
    pub fn ret(value: Option<Expression>) -> Statement {
        Statement::Return(Return {
            value,
            span: Span::default(),
        })
    }

    #[must_use]
    pub fn brk() -> Statement {
        Statement::Break {
            span: Span::default(),
        }
    }

    #[must_use]
    pub fn expr(expression: Expression) -> Statement {
        Statement::Expression(expression)
    }
}
