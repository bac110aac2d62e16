//! Mutable traversal shared by the passes.
//!
//! Statement lists are visited outermost first: the program, then the bodies
//! of functions, constructors, classes, branches, loops and block lambdas.

use respecc_ast::{Expression, ExpressionKind, LambdaBody, Statement, UnaryOperator};

/// Applies `rewrite` to `statements` and then to every statement list nested
/// in it. Returns `true` if any call reported a change.
pub(crate) fn visit_blocks<F>(statements: &mut Vec<Statement>, rewrite: &mut F) -> bool
where
    F: FnMut(&mut Vec<Statement>) -> bool,
{
    let mut changed = rewrite(statements);
    for statement in statements.iter_mut() {
        for block in nested_blocks_mut(statement) {
            changed |= visit_blocks(block, rewrite);
        }
        for expression in statement_expressions_mut(statement) {
            for block in lambda_blocks_mut(expression) {
                changed |= visit_blocks(block, rewrite);
            }
        }
    }
    changed
}

fn nested_blocks_mut(statement: &mut Statement) -> Vec<&mut Vec<Statement>> {
    match statement {
        Statement::Function(func) => vec![&mut func.body.statements],
        Statement::Constructor(ctor) => vec![&mut ctor.body.statements],
        Statement::Class(class) => vec![&mut class.body.members],
        Statement::Conditional(cond) => {
            let mut blocks = vec![&mut cond.then_block.statements];
            blocks.extend(cond.else_ifs.iter_mut().map(|branch| &mut branch.block.statements));
            if let Some(else_block) = &mut cond.else_block {
                blocks.push(&mut else_block.statements);
            }
            blocks
        }
        Statement::While(while_loop) => vec![&mut while_loop.body.statements],
        Statement::For(for_loop) => vec![&mut for_loop.body.statements],
        _ => Vec::new(),
    }
}

/// Expressions owned directly by a statement, excluding nested blocks.
pub(crate) fn statement_expressions_mut(statement: &mut Statement) -> Vec<&mut Expression> {
    match statement {
        Statement::Variable(decl) => decl.initializer.iter_mut().collect(),
        Statement::Assignment(assign) => vec![&mut assign.target, &mut assign.value],
        Statement::Conditional(cond) => {
            let mut expressions = vec![&mut cond.condition];
            expressions.extend(cond.else_ifs.iter_mut().map(|branch| &mut branch.condition));
            expressions
        }
        Statement::While(while_loop) => vec![&mut while_loop.condition],
        Statement::For(for_loop) => {
            let mut expressions = Vec::new();
            if let Some(initializer) = &mut for_loop.initializer {
                expressions.extend(initializer.initializer.as_mut());
            }
            expressions.extend(for_loop.condition.as_mut());
            if let Some(update) = &mut for_loop.update {
                expressions.extend(statement_expressions_mut(update));
            }
            expressions
        }
        Statement::Return(ret) => ret.value.iter_mut().collect(),
        Statement::Expression(expression) => vec![expression],
        Statement::Function(_)
        | Statement::Class(_)
        | Statement::Constructor(_)
        | Statement::Break { .. } => Vec::new(),
    }
}

/// Direct subexpressions. Block lambda bodies are statement lists and are
/// reached through [`visit_blocks`] instead.
pub(crate) fn child_expressions_mut(kind: &mut ExpressionKind) -> Vec<&mut Expression> {
    match kind {
        ExpressionKind::Binary { left, right, .. } => vec![&mut **left, &mut **right],
        ExpressionKind::Unary { operand, .. } | ExpressionKind::Postfix { operand, .. } => {
            vec![&mut **operand]
        }
        ExpressionKind::Ternary {
            condition,
            then_branch,
            else_branch,
        } => vec![&mut **condition, &mut **then_branch, &mut **else_branch],
        ExpressionKind::Call(call) => {
            let mut children = vec![&mut *call.callee];
            children.extend(call.arguments.iter_mut());
            children
        }
        ExpressionKind::Member { object, .. } => vec![&mut **object],
        ExpressionKind::Subscript { object, index } => vec![&mut **object, &mut **index],
        ExpressionKind::Array(elements) => elements.iter_mut().collect(),
        ExpressionKind::Dictionary(entries) => entries
            .iter_mut()
            .flat_map(|entry| [&mut entry.key, &mut entry.value])
            .collect(),
        ExpressionKind::Lambda(lambda) => match &mut lambda.body {
            LambdaBody::Expression(body) => vec![&mut **body],
            LambdaBody::Block(_) => Vec::new(),
        },
        ExpressionKind::Number(_)
        | ExpressionKind::String(_)
        | ExpressionKind::Boolean(_)
        | ExpressionKind::Null
        | ExpressionKind::Identifier(_)
        | ExpressionKind::This => Vec::new(),
    }
}

fn lambda_blocks_mut(expression: &mut Expression) -> Vec<&mut Vec<Statement>> {
    match &mut expression.kind {
        ExpressionKind::Lambda(lambda) => match &mut lambda.body {
            LambdaBody::Block(block) => vec![&mut block.statements],
            LambdaBody::Expression(body) => lambda_blocks_mut(body),
        },
        kind => child_expressions_mut(kind)
            .into_iter()
            .flat_map(lambda_blocks_mut)
            .collect(),
    }
}

/// Whether evaluating the expression may have an effect beyond its value.
pub(crate) fn has_side_effects(expression: &Expression) -> bool {
    match &expression.kind {
        ExpressionKind::Call(_) => true,
        ExpressionKind::Unary { operator, operand } => {
            !matches!(operator, UnaryOperator::Negate | UnaryOperator::Not)
                || has_side_effects(operand)
        }
        ExpressionKind::Postfix { .. } => true,
        ExpressionKind::Binary { left, right, .. } => {
            has_side_effects(left) || has_side_effects(right)
        }
        ExpressionKind::Ternary {
            condition,
            then_branch,
            else_branch,
        } => {
            has_side_effects(condition)
                || has_side_effects(then_branch)
                || has_side_effects(else_branch)
        }
        ExpressionKind::Member { object, .. } => has_side_effects(object),
        ExpressionKind::Subscript { object, index } => {
            has_side_effects(object) || has_side_effects(index)
        }
        ExpressionKind::Array(elements) => elements.iter().any(has_side_effects),
        ExpressionKind::Dictionary(entries) => entries
            .iter()
            .any(|entry| has_side_effects(&entry.key) || has_side_effects(&entry.value)),
        _ => false,
    }
}
