//! Dead code elimination optimization pass.
//!
//! Removes statements that follow an unconditional `break` or `return` in
//! the same block.

use respecc_ast::{Program, Statement};

use crate::OptimizationPass;
use crate::visit::visit_blocks;

/// Dead code elimination optimization pass
pub struct DeadCodeEliminationPass;

impl OptimizationPass for DeadCodeEliminationPass {
    fn name(&self) -> &str {
        "DeadCodeElimination"
    }

    fn run(&self, program: &mut Program) -> bool {
        visit_blocks(&mut program.statements, &mut remove_unreachable_code)
    }
}

/// Truncates a block after its first terminator
fn remove_unreachable_code(statements: &mut Vec<Statement>) -> bool {
    match statements.iter().position(Statement::is_terminator) {
        Some(index) if index + 1 < statements.len() => {
            statements.truncate(index + 1);
            true
        }
        _ => false,
    }
}
