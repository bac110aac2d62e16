//! Branch pruning optimization pass.
//!
//! Drops branches whose condition is a Boolean literal that rules them out:
//! `if (No)` without alternatives, `else if (No)` arms, everything after an
//! arm that always runs, and `while (No)` loops.

use respecc_ast::{Conditional, Expression, ExpressionKind, Program, Statement};
use respecc_core::Span;
use respecc_core::type_system::TypeId;

use crate::OptimizationPass;
use crate::visit::visit_blocks;

/// Branch pruning optimization pass
pub struct BranchPruningPass;

impl OptimizationPass for BranchPruningPass {
    fn name(&self) -> &str {
        "BranchPruning"
    }

    fn run(&self, program: &mut Program) -> bool {
        visit_blocks(&mut program.statements, &mut prune_statements)
    }
}

fn prune_statements(statements: &mut Vec<Statement>) -> bool {
    let before = statements.len();
    let mut changed = false;
    statements.retain_mut(|statement| match statement {
        Statement::Conditional(cond) => prune_conditional(cond, &mut changed),
        Statement::While(while_loop) => while_loop.condition.as_boolean() != Some(false),
        _ => true,
    });
    changed || statements.len() != before
}

/// Simplifies a conditional in place. Returns `false` when no branch can run.
fn prune_conditional(cond: &mut Conditional, changed: &mut bool) -> bool {
    let arms = cond.else_ifs.len();
    cond.else_ifs
        .retain(|branch| branch.condition.as_boolean() != Some(false));
    *changed |= cond.else_ifs.len() != arms;

    if let Some(index) = cond
        .else_ifs
        .iter()
        .position(|branch| branch.condition.as_boolean() == Some(true))
        && (index + 1 < cond.else_ifs.len() || cond.else_block.is_some())
    {
        cond.else_ifs.truncate(index + 1);
        cond.else_block = None;
        *changed = true;
    }

    match cond.condition.as_boolean() {
        Some(true) => {
            if !cond.else_ifs.is_empty() || cond.else_block.is_some() {
                cond.else_ifs.clear();
                cond.else_block = None;
                *changed = true;
            }
            true
        }
        Some(false) => {
            *changed = true;
            if !cond.else_ifs.is_empty() {
                let next = cond.else_ifs.remove(0);
                cond.condition = next.condition;
                cond.then_block = next.block;
                true
            } else if let Some(else_block) = cond.else_block.take() {
                cond.condition = always(cond.condition.span);
                cond.then_block = else_block;
                true
            } else {
                false
            }
        }
        None => true,
    }
}

fn always(span: Span) -> Expression {
    Expression {
        kind: ExpressionKind::Boolean(true),
        span,
        resolved_type: Some(TypeId::BOOLEAN),
    }
}
