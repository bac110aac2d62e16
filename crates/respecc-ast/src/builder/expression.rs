//! Helper functions for creating common expressions.

use respecc_core::Span;

use crate::{
    BinaryOperator, Block, Call, DictEntry, Expression, ExpressionKind, Lambda, LambdaBody,
    Parameter, PostfixOperator, UnaryOperator,
};

/// Helper functions for creating common expressions
pub struct ExprBuilder;

fn node(kind: ExpressionKind) -> Expression {
    Expression::new(kind, Span::default())
}

impl ExprBuilder {
    /// Creates a number literal
    #[must_use]
    pub fn number(value: f64) -> Expression {
        node(ExpressionKind::Number(value))
    }

    /// Creates a string literal
    #[must_use]
    pub fn string(value: impl Into<String>) -> Expression {
        node(ExpressionKind::String(value.into()))
    }

    /// Creates a boolean literal
    #[must_use]
    pub fn boolean(value: bool) -> Expression {
        node(ExpressionKind::Boolean(value))
    }

    /// Creates a null literal
    #[must_use]
    pub fn null() -> Expression {
        node(ExpressionKind::Null)
    }

    /// Creates an identifier reference
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Expression {
        node(ExpressionKind::Identifier(name.into()))
    }

    #[must_use]
    pub fn this() -> Expression {
        node(ExpressionKind::This)
    }

    /// Creates a binary operation
    #[must_use]
    pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
        node(ExpressionKind::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// Creates a prefix operation
    #[must_use]
    pub fn unary(operator: UnaryOperator, operand: Expression) -> Expression {
        node(ExpressionKind::Unary {
            operator,
            operand: Box::new(operand),
        })
    }

    /// Creates a postfix operation
    #[must_use]
    pub fn postfix(operand: Expression, operator: PostfixOperator) -> Expression {
        node(ExpressionKind::Postfix {
            operand: Box::new(operand),
            operator,
        })
    }

    #[must_use]
    pub fn ternary(condition: Expression, then_branch: Expression, else_branch: Expression) -> Expression {
        node(ExpressionKind::Ternary {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }

    /// Creates a call of a named function or class
    #[must_use]
    pub fn call(callee: impl Into<String>, arguments: Vec<Expression>) -> Expression {
        Self::call_expr(Self::ident(callee), arguments)
    }

    /// Creates a call of an arbitrary callee expression
    #[must_use]
    pub fn call_expr(callee: Expression, arguments: Vec<Expression>) -> Expression {
        node(ExpressionKind::Call(Call {
            callee: Box::new(callee),
            arguments,
            target: None,
        }))
    }

    /// Creates a method call: `object.method(args...)`
    #[must_use]
    pub fn method_call(
        object: Expression,
        method: impl Into<String>,
        arguments: Vec<Expression>,
    ) -> Expression {
        Self::call_expr(Self::member(object, method), arguments)
    }

    /// Creates a member access
    #[must_use]
    pub fn member(object: Expression, field: impl Into<String>) -> Expression {
        node(ExpressionKind::Member {
            object: Box::new(object),
            field: field.into(),
        })
    }

    /// Creates a subscript expression
    #[must_use]
    pub fn subscript(object: Expression, index: Expression) -> Expression {
        node(ExpressionKind::Subscript {
            object: Box::new(object),
            index: Box::new(index),
        })
    }

    /// Creates an array literal
    #[must_use]
    pub fn array(elements: Vec<Expression>) -> Expression {
        node(ExpressionKind::Array(elements))
    }

    /// Creates a dictionary literal
    #[must_use]
    pub fn dictionary(entries: Vec<(Expression, Expression)>) -> Expression {
        node(ExpressionKind::Dictionary(
            entries
                .into_iter()
                .map(|(key, value)| DictEntry { key, value })
                .collect(),
        ))
    }

    /// Creates a block-bodied lambda
    #[must_use]
    pub fn lambda(parameters: Vec<Parameter>, body: Block) -> Expression {
        node(ExpressionKind::Lambda(Box::new(Lambda {
            parameters,
            body: LambdaBody::Block(body),
            body_scope: None,
        })))
    }

    /// Creates an expression-bodied lambda
    #[must_use]
    pub fn lambda_expr(parameters: Vec<Parameter>, body: Expression) -> Expression {
        node(ExpressionKind::Lambda(Box::new(Lambda {
            parameters,
            body: LambdaBody::Expression(Box::new(body)),
            body_scope: None,
        })))
    }
}
