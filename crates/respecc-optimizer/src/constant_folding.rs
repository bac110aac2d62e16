//! Constant folding optimization pass.
//!
//! Evaluates operations on literals and applies the numeric identities.
//! Example: `2 + 3 * 4` becomes `14` and `x * 1` becomes `x`.

use respecc_ast::{BinaryOperator, Expression, ExpressionKind, Program, UnaryOperator};
use respecc_core::Span;
use respecc_core::type_system::TypeId;

use crate::OptimizationPass;
use crate::visit::{child_expressions_mut, has_side_effects, statement_expressions_mut, visit_blocks};

/// Constant folding optimization pass
pub struct ConstantFoldingPass;

impl OptimizationPass for ConstantFoldingPass {
    fn name(&self) -> &str {
        "ConstantFolding"
    }

    fn run(&self, program: &mut Program) -> bool {
        visit_blocks(&mut program.statements, &mut |statements| {
            let mut changed = false;
            for statement in statements.iter_mut() {
                for expression in statement_expressions_mut(statement) {
                    changed |= fold_expression(expression);
                }
            }
            changed
        })
    }
}

/// Folds an expression bottom-up (returns true if changed)
pub(crate) fn fold_expression(expression: &mut Expression) -> bool {
    let mut changed = false;
    for child in child_expressions_mut(&mut expression.kind) {
        changed |= fold_expression(child);
    }

    let folded = match &expression.kind {
        ExpressionKind::Binary {
            left,
            operator,
            right,
        } => try_fold_binary(*operator, left, right, expression.span),
        ExpressionKind::Unary { operator, operand } => {
            try_fold_unary(*operator, operand, expression.span)
        }
        ExpressionKind::Ternary {
            condition,
            then_branch,
            else_branch,
        } => match condition.as_boolean() {
            Some(true) => Some((**then_branch).clone()),
            Some(false) => Some((**else_branch).clone()),
            None => None,
        },
        _ => None,
    };

    match folded {
        Some(folded) => {
            *expression = folded;
            true
        }
        None => changed,
    }
}

fn number(value: f64, span: Span) -> Expression {
    Expression {
        kind: ExpressionKind::Number(value),
        span,
        resolved_type: Some(TypeId::NUMBER),
    }
}

fn boolean(value: bool, span: Span) -> Expression {
    Expression {
        kind: ExpressionKind::Boolean(value),
        span,
        resolved_type: Some(TypeId::BOOLEAN),
    }
}

fn is_numeric(expression: &Expression) -> bool {
    expression.resolved_type == Some(TypeId::NUMBER)
}

/// Tries to fold a binary operation
fn try_fold_binary(
    operator: BinaryOperator,
    left: &Expression,
    right: &Expression,
    span: Span,
) -> Option<Expression> {
    use ExpressionKind::{Boolean, Number};

    match (&left.kind, &right.kind) {
        (Number(l), Number(r)) => {
            let (l, r) = (*l, *r);
            let value = match operator {
                BinaryOperator::Add => l + r,
                BinaryOperator::Subtract => l - r,
                BinaryOperator::Multiply => l * r,
                BinaryOperator::Divide if r != 0.0 => l / r,
                BinaryOperator::Modulo if r != 0.0 => l % r,
                BinaryOperator::Power => l.powf(r),
                BinaryOperator::Less => return Some(boolean(l < r, span)),
                BinaryOperator::LessEqual => return Some(boolean(l <= r, span)),
                BinaryOperator::Greater => return Some(boolean(l > r, span)),
                BinaryOperator::GreaterEqual => return Some(boolean(l >= r, span)),
                BinaryOperator::Equal => return Some(boolean(l == r, span)),
                BinaryOperator::NotEqual => return Some(boolean(l != r, span)),
                _ => return None,
            };
            Some(number(value, span))
        }

        (Boolean(l), Boolean(r)) => {
            let value = match operator {
                BinaryOperator::And => *l && *r,
                BinaryOperator::Or => *l || *r,
                BinaryOperator::Equal => l == r,
                BinaryOperator::NotEqual => l != r,
                _ => return None,
            };
            Some(boolean(value, span))
        }

        _ => try_identity(operator, left, right, span),
    }
}

/// Additive and multiplicative identities, and multiplication by zero.
///
/// Only applies to numeric operands; `+` on strings concatenates. A zero
/// product only replaces an operand without side effects.
fn try_identity(
    operator: BinaryOperator,
    left: &Expression,
    right: &Expression,
    span: Span,
) -> Option<Expression> {
    let (l, r) = (left.as_number(), right.as_number());
    match operator {
        BinaryOperator::Add if r == Some(0.0) && is_numeric(left) => Some(left.clone()),
        BinaryOperator::Add if l == Some(0.0) && is_numeric(right) => Some(right.clone()),
        BinaryOperator::Subtract if r == Some(0.0) && is_numeric(left) => Some(left.clone()),
        BinaryOperator::Multiply if r == Some(1.0) && is_numeric(left) => Some(left.clone()),
        BinaryOperator::Multiply if l == Some(1.0) && is_numeric(right) => Some(right.clone()),
        BinaryOperator::Multiply
            if r == Some(0.0) && is_numeric(left) && !has_side_effects(left) =>
        {
            Some(number(0.0, span))
        }
        BinaryOperator::Multiply
            if l == Some(0.0) && is_numeric(right) && !has_side_effects(right) =>
        {
            Some(number(0.0, span))
        }
        BinaryOperator::Divide if r == Some(1.0) && is_numeric(left) => Some(left.clone()),
        _ => None,
    }
}

/// Tries to fold a unary operation if the operand is a literal
fn try_fold_unary(operator: UnaryOperator, operand: &Expression, span: Span) -> Option<Expression> {
    match (operator, &operand.kind) {
        (UnaryOperator::Negate, ExpressionKind::Number(value)) => Some(number(-value, span)),
        (UnaryOperator::Not, ExpressionKind::Boolean(value)) => Some(boolean(!value, span)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use respecc_ast::ExprBuilder;

    fn typed(mut expression: Expression, ty: TypeId) -> Expression {
        expression.resolved_type = Some(ty);
        expression
    }

    fn variable(name: &str, ty: TypeId) -> Expression {
        typed(ExprBuilder::ident(name), ty)
    }

    #[test]
    fn test_fold_add() {
        let mut expr = ExprBuilder::binary(
            ExprBuilder::number(2.0),
            BinaryOperator::Add,
            ExprBuilder::number(3.0),
        );
        assert!(fold_expression(&mut expr));
        assert_eq!(expr.as_number(), Some(5.0));
        assert_eq!(expr.resolved_type, Some(TypeId::NUMBER));
    }

    #[test]
    fn test_fold_nested_arithmetic() {
        // 2 + (3 * 4) should become 14 in one pass
        let mut expr = ExprBuilder::binary(
            ExprBuilder::number(2.0),
            BinaryOperator::Add,
            ExprBuilder::binary(
                ExprBuilder::number(3.0),
                BinaryOperator::Multiply,
                ExprBuilder::number(4.0),
            ),
        );
        assert!(fold_expression(&mut expr));
        assert_eq!(expr.as_number(), Some(14.0));
    }

    #[test]
    fn test_fold_power_and_modulo() {
        let mut expr = ExprBuilder::binary(
            ExprBuilder::number(2.0),
            BinaryOperator::Power,
            ExprBuilder::number(10.0),
        );
        assert!(fold_expression(&mut expr));
        assert_eq!(expr.as_number(), Some(1024.0));

        let mut expr = ExprBuilder::binary(
            ExprBuilder::number(7.0),
            BinaryOperator::Modulo,
            ExprBuilder::number(4.0),
        );
        assert!(fold_expression(&mut expr));
        assert_eq!(expr.as_number(), Some(3.0));
    }

    #[test]
    fn test_no_fold_division_by_zero() {
        let mut expr = ExprBuilder::binary(
            ExprBuilder::number(1.0),
            BinaryOperator::Divide,
            ExprBuilder::number(0.0),
        );
        assert!(!fold_expression(&mut expr));
        assert!(matches!(expr.kind, ExpressionKind::Binary { .. }));
    }

    #[test]
    fn test_fold_comparison() {
        let mut expr = ExprBuilder::binary(
            ExprBuilder::number(2.0),
            BinaryOperator::Less,
            ExprBuilder::number(3.0),
        );
        assert!(fold_expression(&mut expr));
        assert_eq!(expr.as_boolean(), Some(true));
        assert_eq!(expr.resolved_type, Some(TypeId::BOOLEAN));
    }

    #[test]
    fn test_fold_boolean_logic() {
        let mut expr = ExprBuilder::binary(
            ExprBuilder::boolean(true),
            BinaryOperator::And,
            ExprBuilder::boolean(false),
        );
        assert!(fold_expression(&mut expr));
        assert_eq!(expr.as_boolean(), Some(false));
    }

    #[test]
    fn test_fold_unary() {
        let mut expr = ExprBuilder::unary(UnaryOperator::Negate, ExprBuilder::number(42.0));
        assert!(fold_expression(&mut expr));
        assert_eq!(expr.as_number(), Some(-42.0));

        let mut expr = ExprBuilder::unary(UnaryOperator::Not, ExprBuilder::boolean(true));
        assert!(fold_expression(&mut expr));
        assert_eq!(expr.as_boolean(), Some(false));
    }

    #[test]
    fn test_additive_identity() {
        let mut expr = ExprBuilder::binary(
            ExprBuilder::number(0.0),
            BinaryOperator::Add,
            variable("x", TypeId::NUMBER),
        );
        assert!(fold_expression(&mut expr));
        assert_eq!(expr.kind, ExpressionKind::Identifier("x".to_string()));
    }

    #[test]
    fn test_multiplicative_identity_and_zero() {
        let mut expr = ExprBuilder::binary(
            variable("x", TypeId::NUMBER),
            BinaryOperator::Multiply,
            ExprBuilder::number(1.0),
        );
        assert!(fold_expression(&mut expr));
        assert_eq!(expr.kind, ExpressionKind::Identifier("x".to_string()));

        let mut expr = ExprBuilder::binary(
            variable("x", TypeId::NUMBER),
            BinaryOperator::Multiply,
            ExprBuilder::number(0.0),
        );
        assert!(fold_expression(&mut expr));
        assert_eq!(expr.as_number(), Some(0.0));
    }

    #[test]
    fn test_zero_product_keeps_calls() {
        let call = typed(ExprBuilder::call("tick", vec![]), TypeId::NUMBER);
        let mut expr = ExprBuilder::binary(call, BinaryOperator::Multiply, ExprBuilder::number(0.0));
        assert!(!fold_expression(&mut expr));
    }

    #[test]
    fn test_no_identity_on_strings() {
        let mut expr = ExprBuilder::binary(
            variable("s", TypeId::STRING),
            BinaryOperator::Add,
            ExprBuilder::number(0.0),
        );
        assert!(!fold_expression(&mut expr));
    }

    #[test]
    fn test_no_fold_with_variables() {
        let mut expr = ExprBuilder::binary(
            variable("x", TypeId::NUMBER),
            BinaryOperator::Add,
            ExprBuilder::number(3.0),
        );
        assert!(!fold_expression(&mut expr));
    }

    #[test]
    fn test_fold_literal_ternary() {
        let mut expr = ExprBuilder::ternary(
            ExprBuilder::binary(
                ExprBuilder::number(1.0),
                BinaryOperator::Greater,
                ExprBuilder::number(2.0),
            ),
            ExprBuilder::string("big"),
            ExprBuilder::string("small"),
        );
        assert!(fold_expression(&mut expr));
        assert_eq!(expr.kind, ExpressionKind::String("small".to_string()));
    }
}
